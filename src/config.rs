//! Application Configuration
//!
//! Compile-time settings. There is no environment or CLI surface in the browser.

use log::LevelFilter;

/// localStorage key holding the serialized task list
pub const STORAGE_KEY: &str = "taskTracker.tasks.v1";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
