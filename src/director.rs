// src/director.rs

use crate::builder::RobotBuilder;
use crate::catalog::Role;
use crate::error::Result;
use crate::models::components::{HeadComponent, OutfitComponent, ToolComponent};
use log::info;
use serde::{Deserialize, Serialize};

/// Everything the director needs to assemble one robot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotOrder {
	pub name: String,
	pub kind: String,
	pub head: HeadComponent,
	pub outfit: OutfitComponent,
	pub tool: ToolComponent,
}

impl RobotOrder {
	/// Builds an order whose parts are taken from the catalog by role.
	pub fn from_roles(
		name: impl Into<String>,
		kind: impl Into<String>,
		head: Role,
		outfit: Role,
		tool: Role,
	) -> Self {
		Self {
			name: name.into(),
			kind: kind.into(),
			head: head.head().clone(),
			outfit: outfit.outfit().clone(),
			tool: tool.tool().clone(),
		}
	}
}

/// Runs the standard assembly sequence against any builder.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssemblyDirector;

impl AssemblyDirector {
	pub fn new() -> Self {
		Self
	}

	/// Resets the builder, assigns identity, then assembles outfit, head and
	/// tool in that order. The first failing step aborts the sequence and
	/// leaves the partial robot in the builder. The result is not retrieved.
	pub fn build_custom_robot<B: RobotBuilder + ?Sized>(
		&self,
		builder: &mut B,
		name: &str,
		kind: &str,
		head: HeadComponent,
		outfit: OutfitComponent,
		tool: ToolComponent,
	) -> Result<()> {
		info!("Assembling robot {} ({})", name, kind);

		builder.reset_process();
		builder.assign_identity(name, kind)?;
		builder.assemble_outfit(outfit)?;
		builder.assemble_head(head)?;
		builder.assemble_tool(tool)?;

		Ok(())
	}

	pub fn build_order<B: RobotBuilder + ?Sized>(&self, builder: &mut B, order: RobotOrder) -> Result<()> {
		self.build_custom_robot(
			builder,
			&order.name,
			&order.kind,
			order.head,
			order.outfit,
			order.tool,
		)
	}
}
