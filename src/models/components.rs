// src/models/components.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadComponent {
	pub description: String,
	pub material: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutfitComponent {
	#[serde(rename = "type")]
	pub kind: String,
	pub protection_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolComponent {
	pub name: String,
	pub function: String,
}

impl HeadComponent {
	pub fn new(description: impl Into<String>, material: impl Into<String>) -> Self {
		Self {
			description: description.into(),
			material: material.into(),
		}
	}
}

impl OutfitComponent {
	pub fn new(kind: impl Into<String>, protection_level: u32) -> Self {
		Self {
			kind: kind.into(),
			protection_level,
		}
	}
}

impl ToolComponent {
	pub fn new(name: impl Into<String>, function: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			function: function.into(),
		}
	}
}
