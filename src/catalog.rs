// src/catalog.rs

use crate::error::AssemblyError;
use crate::models::components::{HeadComponent, OutfitComponent, ToolComponent};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
	pub static ref FIREFIGHTER_HEAD: HeadComponent =
		HeadComponent::new("Casco de seguridad", "Polímero reforzado");
	pub static ref TEACHER_HEAD: HeadComponent =
		HeadComponent::new("Lentes y sensores ópticos", "Vidrio/Metal");
	pub static ref AVIATOR_HEAD: HeadComponent =
		HeadComponent::new("Casco de vuelo", "Cuero sintético");

	pub static ref FIREFIGHTER_OUTFIT: OutfitComponent = OutfitComponent::new("Traje térmico", 100);
	pub static ref TEACHER_OUTFIT: OutfitComponent = OutfitComponent::new("Indumentaria formal", 10);
	pub static ref AVIATOR_OUTFIT: OutfitComponent = OutfitComponent::new("Chaqueta de aviación", 50);

	pub static ref FIREFIGHTER_TOOL: ToolComponent =
		ToolComponent::new("Dispensador de agua", "Extinción");
	pub static ref TEACHER_TOOL: ToolComponent = ToolComponent::new("Puntero láser", "Señalización");
	pub static ref AVIATOR_TOOL: ToolComponent = ToolComponent::new("Módulo GPS", "Navegación");
}

/// Role a catalog part was designed for. Parts from different roles can be
/// mixed freely on one robot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
	Firefighter,
	Teacher,
	Aviator,
}

impl Role {
	pub const ALL: [Role; 3] = [Role::Firefighter, Role::Teacher, Role::Aviator];

	pub fn head(self) -> &'static HeadComponent {
		match self {
			Role::Firefighter => &*FIREFIGHTER_HEAD,
			Role::Teacher => &*TEACHER_HEAD,
			Role::Aviator => &*AVIATOR_HEAD,
		}
	}

	pub fn outfit(self) -> &'static OutfitComponent {
		match self {
			Role::Firefighter => &*FIREFIGHTER_OUTFIT,
			Role::Teacher => &*TEACHER_OUTFIT,
			Role::Aviator => &*AVIATOR_OUTFIT,
		}
	}

	pub fn tool(self) -> &'static ToolComponent {
		match self {
			Role::Firefighter => &*FIREFIGHTER_TOOL,
			Role::Teacher => &*TEACHER_TOOL,
			Role::Aviator => &*AVIATOR_TOOL,
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Role::Firefighter => write!(f, "firefighter"),
			Role::Teacher => write!(f, "teacher"),
			Role::Aviator => write!(f, "aviator"),
		}
	}
}

impl FromStr for Role {
	type Err = AssemblyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"firefighter" => Ok(Role::Firefighter),
			"teacher" => Ok(Role::Teacher),
			"aviator" => Ok(Role::Aviator),
			_ => Err(AssemblyError::UnknownRole(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_catalog_entries_are_stable() {
		let first = FIREFIGHTER_HEAD.clone();
		let second = FIREFIGHTER_HEAD.clone();
		assert_eq!(first, second);
		assert!(std::ptr::eq(Role::Teacher.tool(), Role::Teacher.tool()));
	}

	#[test]
	fn test_role_lookup_matches_constants() {
		assert_eq!(Role::Firefighter.head().description, "Casco de seguridad");
		assert_eq!(Role::Firefighter.head().material, "Polímero reforzado");
		assert_eq!(Role::Teacher.outfit(), &OutfitComponent::new("Indumentaria formal", 10));
		assert_eq!(Role::Aviator.outfit().protection_level, 50);
		assert_eq!(Role::Aviator.tool(), &ToolComponent::new("Módulo GPS", "Navegación"));
	}

	#[test]
	fn test_every_role_has_distinct_parts() {
		for (i, a) in Role::ALL.iter().enumerate() {
			for b in Role::ALL.iter().skip(i + 1) {
				assert_ne!(a.head(), b.head());
				assert_ne!(a.outfit(), b.outfit());
				assert_ne!(a.tool(), b.tool());
			}
		}
	}

	#[test]
	fn test_parse_role() {
		assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
		assert_eq!(" aviator ".parse::<Role>().unwrap(), Role::Aviator);
		assert!(matches!("pilot".parse::<Role>(), Err(AssemblyError::UnknownRole(_))));
		for role in Role::ALL {
			assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
		}
	}
}
