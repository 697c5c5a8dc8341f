//! Integration tests for loading the config hierarchy from files.

use std::fs;
use std::time::Duration;

use gameboard_core::config::loading::load_from_paths;
use gameboard_core::{BoardState, GameBoardError, Seat};

#[test]
fn test_missing_files_yield_defaults() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let paths = vec![
        temp_dir.path().join("user.toml"),
        temp_dir.path().join("project.toml"),
    ];

    let config = load_from_paths(&paths).expect("Missing files should not fail");
    assert_eq!(config.window.title(), "GameBoard Standalone Test");
    assert_eq!(config.window.min_width(), 1200);
    assert_eq!(config.window.min_height(), 800);
}

#[test]
fn test_project_overrides_user() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let user = temp_dir.path().join("user.toml");
    let project = temp_dir.path().join("project.toml");

    fs::write(
        &user,
        r#"
[window]
title = "User Board"
min_width = 1400

[glow]
tick_interval_ms = 30
"#,
    )
    .expect("Failed to write user config");
    fs::write(
        &project,
        r#"
[window]
title = "Project Board"

[health]
starting_value = 20
"#,
    )
    .expect("Failed to write project config");

    let config = load_from_paths(&[user, project]).expect("Config should load");
    assert_eq!(config.window.title(), "Project Board");
    assert_eq!(config.window.min_width(), 1400);
    assert_eq!(config.glow.tick_interval(), Duration::from_millis(30));

    let board = BoardState::from_config(&config);
    assert_eq!(board.player(Seat::Top).health().value(), 20);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "invalid toml [[[").expect("Failed to write invalid config");

    let err = load_from_paths(&[path]).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    assert!(err.is_user_error());
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[glow]\nstep = 2.0\n").expect("Failed to write config");

    let err = load_from_paths(&[path]).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    assert!(err.to_string().contains("glow.step"));
}
