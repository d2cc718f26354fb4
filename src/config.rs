// src/config.rs

use crate::catalog::Role;
use crate::director::RobotOrder;
use serde::{Deserialize, Serialize};

pub const DEMO_NAME: &str = "RoboProfe-001";
pub const DEMO_KIND: &str = "Profesor Híbrido";

/// Parts and identity for the demo build: a teacher robot wearing a
/// firefighter helmet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSelection {
	pub name: String,
	pub kind: String,
	pub head: Role,
	pub outfit: Role,
	pub tool: Role,
}

impl Default for DemoSelection {
	fn default() -> Self {
		Self {
			name: DEMO_NAME.to_string(),
			kind: DEMO_KIND.to_string(),
			head: Role::Firefighter,
			outfit: Role::Teacher,
			tool: Role::Teacher,
		}
	}
}

impl DemoSelection {
	pub fn to_order(&self) -> RobotOrder {
		RobotOrder::from_roles(self.name.as_str(), self.kind.as_str(), self.head, self.outfit, self.tool)
	}
}
