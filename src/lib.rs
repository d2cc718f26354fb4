// src/lib.rs

pub mod builder;
pub mod catalog;
pub mod config;
pub mod director;
pub mod error;
pub mod models;
pub mod utils;

pub use builder::{RobotBuilder, RobotConfigurator};
pub use director::{AssemblyDirector, RobotOrder};
pub use error::{AssemblyError, Result};
pub use models::robot::Robot;
