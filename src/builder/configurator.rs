// src/builder/configurator.rs

use super::RobotBuilder;
use crate::error::Result;
use crate::models::components::{HeadComponent, OutfitComponent, ToolComponent};
use crate::models::robot::Robot;
use log::debug;

#[derive(Debug, Default)]
pub struct RobotConfigurator {
	robot: Robot,
}

impl RobotConfigurator {
	pub fn new() -> Self {
		Self::default()
	}

	/// The robot as assembled so far.
	pub fn in_progress(&self) -> &Robot {
		&self.robot
	}
}

impl RobotBuilder for RobotConfigurator {
	fn reset_process(&mut self) {
		debug!("Resetting assembly process");
		self.robot = Robot::new();
	}

	fn assign_identity(&mut self, name: &str, kind: &str) -> Result<()> {
		debug!("Assigning identity {} ({})", name, kind);
		self.robot.name = Some(name.to_string());
		self.robot.kind = Some(kind.to_string());
		Ok(())
	}

	fn assemble_head(&mut self, component: HeadComponent) -> Result<()> {
		debug!("Assembling head: {}", component.description);
		self.robot.head = Some(component);
		Ok(())
	}

	fn assemble_outfit(&mut self, component: OutfitComponent) -> Result<()> {
		debug!("Assembling outfit: {}", component.kind);
		self.robot.outfit = Some(component);
		Ok(())
	}

	fn assemble_tool(&mut self, component: ToolComponent) -> Result<()> {
		debug!("Assembling tool: {}", component.name);
		self.robot.tool = Some(component);
		Ok(())
	}

	fn obtain_result(&mut self) -> Robot {
		debug!("Handing over assembled robot, missing parts: {:?}", self.robot.missing_parts());
		std::mem::take(&mut self.robot)
	}
}
