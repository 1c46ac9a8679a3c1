//! End-to-end tests for `spritedye config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wrap Left: false"), "stdout: {stdout}");
    assert!(stdout.contains("Warn Unordered: true"), "stdout: {stdout}");
    assert!(stdout.contains("using defaults"), "stdout: {stdout}");
}

#[test]
fn test_config_show_json_format() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert_eq!(json["navigation"]["wrap_left"], false);
    assert_eq!(json["grouping"]["warn_unordered"], true);
    assert!(json["path"]
        .as_str()
        .unwrap()
        .ends_with("config.toml"));
}

#[test]
fn test_config_show_invalid_file_fails() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.toml"), "navigation = [").unwrap();

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_command(
        &["config", "set", "--wrap-left", "true", "--warn-unordered", "false"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Set should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("updated"));

    let content = fs::read_to_string(config_dir.path().join("config.toml")).unwrap();
    assert!(content.contains("wrap_left = true"), "content: {content}");
    assert!(content.contains("warn_unordered = false"), "content: {content}");

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["navigation"]["wrap_left"], true);
    assert_eq!(json["grouping"]["warn_unordered"], false);
}

#[test]
fn test_config_set_keeps_other_values() {
    let config_dir = TempDir::new().unwrap();

    for args in [
        ["config", "set", "--wrap-left", "true"],
        ["config", "set", "--warn-unordered", "false"],
    ] {
        let output = isolated_command(&args, config_dir.path())
            .output()
            .expect("Failed to execute command");
        assert_eq!(output.status.code(), Some(0));
    }

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["navigation"]["wrap_left"], true);
    assert_eq!(json["grouping"]["warn_unordered"], false);
}

#[test]
fn test_config_set_invalid_file_is_left_untouched() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("config.toml");
    let original = "[navigation]\nwrap_left = true\n\n[grouping]\nwarn_unordered = \"nope\"\n";
    fs::write(&config_file, original).unwrap();

    let output = isolated_command(
        &["config", "set", "--warn-unordered", "false"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(1),
        "Set on an unreadable config should fail. stdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(&config_file).unwrap(), original);
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_wrap_left_applies_to_navigation() {
    let config_dir = TempDir::new().unwrap();
    let (roster_path, _temp_dir) = create_temp_roster_file(&test_roster());
    let navigate = [
        "roster",
        "navigate",
        "--data",
        roster_path.to_str().unwrap(),
        "--from",
        "1",
        "--direction",
        "left",
    ];

    let output = isolated_command(&navigate, config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(3));

    let set = isolated_command(&["config", "set", "--wrap-left", "true"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    let output = isolated_command(&navigate, config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "3");
}

// ============================================================================
// Path Command Tests
// ============================================================================

#[test]
fn test_config_path_uses_override() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "path"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let expected = config_dir.path().join("config.toml");
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        expected.display().to_string()
    );
}
