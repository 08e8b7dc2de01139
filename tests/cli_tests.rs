use std::process::Command;

fn inactive_marker() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_inactive_marker"));
    command
        .current_dir(std::env::temp_dir())
        .env_remove("INACTIVE_MARKER_REGION")
        .env_remove("RUST_LOG");
    command
}

#[test]
fn cli_exits_nonzero_without_region() {
    let output = inactive_marker().output().expect("run inactive_marker");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("You must supply a REGION configuration value"),
        "stderr: {stderr}"
    );
}

#[test]
fn cli_exits_nonzero_with_empty_region() {
    let output = inactive_marker()
        .args(["--region", ""])
        .output()
        .expect("run inactive_marker");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("You must supply a REGION configuration value"));
}

#[test]
fn cli_exits_nonzero_on_missing_settings_file() {
    let output = inactive_marker()
        .args(["--region", "us-east-1", "--config"])
        .arg("/nonexistent/inactive-marker/settings.toml")
        .output()
        .expect("run inactive_marker");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("settings error"), "stderr: {stderr}");
}
