//! End-to-end tests for the non-interactive `mosaic` flags.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the mosaic binary against a config file inside `config_dir`.
fn run_with_config(config_dir: &Path, args: &[&str]) -> Output {
    let config_path = config_dir.join("config.toml");
    Command::new(env!("CARGO_BIN_EXE_mosaic"))
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_init_writes_default_config() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_with_config(temp_dir.path(), &["--init"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = fs::read_to_string(temp_dir.path().join("config.toml")).unwrap();
    assert!(content.contains("[palette]"));
    assert!(content.contains("[grid]"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("config.toml"));
}

#[test]
fn test_dump_state_prints_startup_board() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_with_config(temp_dir.path(), &["--dump-state"]);

    assert_eq!(output.status.code(), Some(0));
    let state: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");
    assert_eq!(state["board"]["tile_density"], 3);
    assert_eq!(state["board"]["tiles"][0]["cells"].as_array().unwrap().len(), 9);
    assert_eq!(state["board"]["canvas"]["density"], 20);
    assert_eq!(state["palette"]["colors"].as_array().unwrap().len(), 4);
}

#[test]
fn test_tile_density_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_with_config(temp_dir.path(), &["--tile-density", "7", "--dump-state"]);

    assert_eq!(output.status.code(), Some(0));
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["board"]["tile_density"], 7);
    assert_eq!(state["board"]["tiles"][3]["density"], 7);
}

#[test]
fn test_out_of_range_tile_density_flag_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_with_config(temp_dir.path(), &["--tile-density", "40", "--dump-state"]);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid configuration"));
}

#[test]
fn test_log_file_receives_startup_message() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("mosaic.log");

    let output = run_with_config(
        temp_dir.path(),
        &["--log-file", log_path.to_str().unwrap(), "--dump-state"],
    );

    assert_eq!(output.status.code(), Some(0));
    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("editor started"));
}
