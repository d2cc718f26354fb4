// src/models/robot.rs

use crate::error::{AssemblyError, Result};
use crate::models::components::{HeadComponent, OutfitComponent, ToolComponent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An educational robot under construction.
///
/// Every field starts unset and is filled by one assembly step. Consuming
/// the robot through [`Robot::render`], [`Robot::specification`] or
/// [`Robot::to_json`] requires all five fields to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
	pub name: Option<String>,
	pub kind: Option<String>,
	pub head: Option<HeadComponent>,
	pub outfit: Option<OutfitComponent>,
	pub tool: Option<ToolComponent>,
}

/// Borrowed view of a robot with every field present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RobotSpecification<'a> {
	pub name: &'a str,
	pub kind: &'a str,
	pub head: &'a HeadComponent,
	pub outfit: &'a OutfitComponent,
	pub tool: &'a ToolComponent,
}

impl Robot {
	pub fn new() -> Self {
		Self::default()
	}

	/// Names of the fields that are still unset, in declaration order.
	pub fn missing_parts(&self) -> Vec<&'static str> {
		let mut missing = Vec::new();
		if self.name.is_none() {
			missing.push("name");
		}
		if self.kind.is_none() {
			missing.push("kind");
		}
		if self.head.is_none() {
			missing.push("head");
		}
		if self.outfit.is_none() {
			missing.push("outfit");
		}
		if self.tool.is_none() {
			missing.push("tool");
		}
		missing
	}

	pub fn is_complete(&self) -> bool {
		self.missing_parts().is_empty()
	}

	pub fn specification(&self) -> Result<RobotSpecification<'_>> {
		match (&self.name, &self.kind, &self.head, &self.outfit, &self.tool) {
			(Some(name), Some(kind), Some(head), Some(outfit), Some(tool)) => Ok(RobotSpecification {
				name,
				kind,
				head,
				outfit,
				tool,
			}),
			_ => Err(AssemblyError::IncompleteProduct {
				missing: self.missing_parts(),
			}),
		}
	}

	/// Multi-line human readable summary of a fully assembled robot.
	pub fn render(&self) -> Result<String> {
		Ok(self.specification()?.to_string())
	}

	pub fn to_json(&self) -> Result<String> {
		let spec = self.specification()?;
		Ok(serde_json::to_string_pretty(&spec)?)
	}
}

impl fmt::Display for RobotSpecification<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, " Robot: {} (Tipo: {})", self.name, self.kind)?;
		writeln!(f, "Especificaciones del Robot:")?;
		writeln!(f, " - Módulo Cabeza: {}", self.head.description)?;
		writeln!(f, " - Vestimenta:    {}", self.outfit.kind)?;
		write!(f, " - Herramienta:   {}", self.tool.name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn complete_robot() -> Robot {
		Robot {
			name: Some("RoboBombero-7".to_string()),
			kind: Some("Bombero".to_string()),
			head: Some(HeadComponent::new("Casco de seguridad", "Polímero reforzado")),
			outfit: Some(OutfitComponent::new("Traje térmico", 100)),
			tool: Some(ToolComponent::new("Dispensador de agua", "Extinción")),
		}
	}

	#[test]
	fn test_new_robot_is_empty() {
		let robot = Robot::new();
		assert_eq!(robot, Robot::default());
		assert!(!robot.is_complete());
		assert_eq!(robot.missing_parts(), vec!["name", "kind", "head", "outfit", "tool"]);
	}

	#[test]
	fn test_render_complete_robot() {
		let rendered = complete_robot().render().unwrap();
		let lines: Vec<&str> = rendered.lines().collect();
		assert_eq!(
			lines,
			vec![
				" Robot: RoboBombero-7 (Tipo: Bombero)",
				"Especificaciones del Robot:",
				" - Módulo Cabeza: Casco de seguridad",
				" - Vestimenta:    Traje térmico",
				" - Herramienta:   Dispensador de agua",
			]
		);
		assert!(!rendered.ends_with('\n'));
	}

	#[test]
	fn test_render_incomplete_robot_fails() {
		let mut robot = complete_robot();
		robot.outfit = None;
		robot.kind = None;

		match robot.render() {
			Err(AssemblyError::IncompleteProduct { missing }) => {
				assert_eq!(missing, vec!["kind", "outfit"]);
			}
			other => panic!("expected incomplete product error, got {:?}", other),
		}
	}

	#[test]
	fn test_incomplete_error_message_lists_parts() {
		let err = Robot::new().render().unwrap_err();
		assert_eq!(err.to_string(), "incomplete robot, missing: name, kind, head, outfit, tool");
	}

	#[test]
	fn test_to_json_requires_complete_robot() {
		let mut robot = complete_robot();
		let json = robot.to_json().unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(value["name"], "RoboBombero-7");
		assert_eq!(value["outfit"]["type"], "Traje térmico");
		assert_eq!(value["tool"]["function"], "Extinción");

		robot.tool = None;
		assert!(matches!(robot.to_json(), Err(AssemblyError::IncompleteProduct { .. })));
	}
}
