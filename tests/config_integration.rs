//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use bounce2d::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("B2D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("B2D_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("B2D_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    // Values from config/default.toml
    assert_eq!(config.window.title, "Bounce2D");
    assert_eq!(config.physics.tick_interval_ms, 10);
    assert_eq!(config.physics.boundary_x, 39.0);
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    let config = AppConfig::load_from("does-not-exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.input.jump_force, 400.0);
}
