// src/main.rs

use anyhow::{Context, Result};
use log::{debug, info};
use robot_assembly::config::DemoSelection;
use robot_assembly::utils;
use robot_assembly::{AssemblyDirector, RobotBuilder, RobotConfigurator};

fn main() -> Result<()> {
	utils::logger::init();
	info!("Starting robot assembly demo");

	let director = AssemblyDirector::new();
	let mut configurator = RobotConfigurator::new();

	let selection = DemoSelection::default();
	director
		.build_order(&mut configurator, selection.to_order())
		.context("Failed to assemble demo robot")?;

	let robot = configurator.obtain_result();
	debug!("Assembled robot: {}", robot.to_json().context("Failed to export robot")?);

	println!("{}", robot.render().context("Failed to render robot")?);
	Ok(())
}
