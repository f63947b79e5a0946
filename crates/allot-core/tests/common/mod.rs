use std::path::Path;

use allot_core::{models::WeekStart, Config, ConfigBuilder};
use tempfile::TempDir;

/// Helper function to create a config whose state lives in a temp dir
pub fn create_test_config() -> (TempDir, Config) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = config_in(temp_dir.path());
    (temp_dir, config)
}

pub fn config_in(dir: &Path) -> Config {
    ConfigBuilder::new()
        .with_config_file(Some(dir.join("config.json")))
        .with_state_dir(Some(dir.join("store")))
        .with_week_start(Some(WeekStart::Monday))
        .build()
        .expect("Failed to build config")
}
