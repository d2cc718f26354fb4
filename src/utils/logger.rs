// src/utils/logger.rs

use env_logger::{Builder, Env};

/// Logs go to stderr; stdout is reserved for the rendered robot.
pub fn init() {
	Builder::from_env(Env::default().default_filter_or("warn"))
		.format_timestamp_millis()
		.format_module_path(true)
		.init();
}
