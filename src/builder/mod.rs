// src/builder/mod.rs

pub mod configurator;

use crate::error::Result;
use crate::models::components::{HeadComponent, OutfitComponent, ToolComponent};
use crate::models::robot::Robot;

pub use configurator::RobotConfigurator;

/// Stepwise assembly of a single in-progress [`Robot`].
///
/// Steps may be called in any order and any of them may be skipped; the
/// result is then an incomplete robot, which only fails once it is rendered
/// or exported. A builder holds one build at a time, so concurrent builds
/// each need their own builder instance.
pub trait RobotBuilder {
	/// Drops the in-progress robot, including any parts not yet retrieved.
	fn reset_process(&mut self);

	fn assign_identity(&mut self, name: &str, kind: &str) -> Result<()>;

	fn assemble_head(&mut self, component: HeadComponent) -> Result<()>;

	fn assemble_outfit(&mut self, component: OutfitComponent) -> Result<()>;

	fn assemble_tool(&mut self, component: ToolComponent) -> Result<()>;

	/// Hands over the in-progress robot and starts a fresh, empty one.
	fn obtain_result(&mut self) -> Robot;
}
