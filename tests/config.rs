use anyhow::Result;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run inject-text with arguments and capture output
fn run_inject_text(args: &[&str]) -> Result<(String, String, bool)> {
    let exe_path = PathBuf::from(env!("CARGO_BIN_EXE_inject-text"));
    let output = Command::new(exe_path)
        .args(args)
        .env_remove("INJECT_TEXT_CONFIG")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    Ok((stdout, stderr, output.status.success()))
}

#[test]
fn test_config_init_creates_default_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("inject-text.json");

    let (stdout, _stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "init",
    ])?;

    assert!(success);
    assert!(stdout.contains("Created config file at:"));
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path)?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(config["version"], "0.1.0");
    assert_eq!(config["srcGenFolderBase"], "src-gen/main/java");
    assert_eq!(config["safeMode"], true);
    assert_eq!(config["injections"], serde_json::json!([]));

    Ok(())
}

#[test]
fn test_config_init_with_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("inject-text.json");

    std::fs::write(&config_path, "{}")?;

    let (stdout, _stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "init",
    ])?;

    assert!(success);
    assert!(stdout.contains("Config file already exists"));
    assert!(stdout.contains("Use --force to overwrite"));
    assert_eq!(std::fs::read_to_string(&config_path)?, "{}");

    Ok(())
}

#[test]
fn test_config_init_force_overwrites() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("inject-text.json");

    std::fs::write(&config_path, r#"{"version": "old"}"#)?;

    let (stdout, _stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "init",
        "--force",
    ])?;

    assert!(success);
    assert!(stdout.contains("Created config file at:"));

    let content = std::fs::read_to_string(&config_path)?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(config["version"], "0.1.0");

    Ok(())
}

#[test]
fn test_config_validate_valid_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("inject-text.json");

    std::fs::write(
        &config_path,
        r#"{
            "version": "0.1.0",
            "injections": [
                { "inputFile": "text/about.txt", "packageName": "com.example", "className": "About" }
            ]
        }"#,
    )?;

    let (stdout, _stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "validate",
    ])?;

    assert!(success);
    assert!(stdout.contains("Config file is valid!"));
    assert!(stdout.contains("Resolved paths:"));
    assert!(stdout.contains("about.txt"));

    Ok(())
}

#[test]
fn test_config_validate_invalid_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("inject-text.json");

    std::fs::write(&config_path, r#"{"version": ""}"#)?;

    let (stdout, _stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "validate",
    ])?;

    assert!(!success);
    assert!(stdout.contains("Config file validation failed"));

    Ok(())
}

#[test]
fn test_config_show_json_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("inject-text.json");

    run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "init",
    ])?;

    let (stdout, _stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "show",
        "--json",
    ])?;

    assert!(success);

    let config: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(config["version"], "0.1.0");

    Ok(())
}

#[test]
fn test_config_show_pretty_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("inject-text.json");

    std::fs::write(
        &config_path,
        r#"{
            "version": "0.1.0",
            "safeMode": false,
            "injections": [
                { "inputFile": "about.txt", "packageName": "com.example", "className": "About", "constantName": "TEXT" }
            ]
        }"#,
    )?;

    let (stdout, _stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "show",
    ])?;

    assert!(success);
    assert!(stdout.contains("Inject Text Configuration"));
    assert!(stdout.contains("Version: 0.1.0"));
    assert!(stdout.contains("Safe Mode: off"));
    assert!(stdout.contains("com.example.About.TEXT <- about.txt"));

    Ok(())
}

#[test]
fn test_config_custom_path_not_found() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("nonexistent.json");

    let (_stdout, stderr, success) = run_inject_text(&[
        "--config-path",
        config_path.to_str().unwrap(),
        "config",
        "show",
    ])?;

    assert!(!success);
    assert!(stderr.contains("Config file not found at specified path"));

    Ok(())
}
