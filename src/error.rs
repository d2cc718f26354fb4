// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblyError {
	/// The robot is missing one or more parts or identity fields.
	#[error("incomplete robot, missing: {}", .missing.join(", "))]
	IncompleteProduct { missing: Vec<&'static str> },

	#[error("assembly step `{step}` rejected: {reason}")]
	StepRejected { step: &'static str, reason: String },

	#[error("unknown catalog role: {0}")]
	UnknownRole(String),

	#[error("failed to export robot")]
	Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
