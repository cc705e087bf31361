use std::{fs, process::Command};

fn corridor() -> Command {
    Command::new(env!("CARGO_BIN_EXE_corridor"))
}

#[test]
fn config_file_drives_visibility() {
    let path = std::env::temp_dir().join(format!("corridor-cli-{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
        version = 1
        seed = 7

        [visibility]
        hide_all = true
        toggle = ["Bravo", "charlie"]
        "#,
    )
    .expect("write configuration");

    let output = corridor()
        .arg("--config")
        .arg(&path)
        .arg("--list")
        .output()
        .expect("run corridor");
    let _ = fs::remove_file(&path);

    assert!(output.status.success(), "corridor --config should succeed");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let visible: Vec<_> = stdout
        .lines()
        .filter(|line| line.split(' ').nth(2) == Some("true"))
        .filter_map(|line| line.split(' ').next())
        .collect();
    assert_eq!(visible, vec!["main_right", "center_exit"]);
}

#[test]
fn unknown_toggle_warns_without_failing() {
    let output = corridor()
        .args(["--toggle", "nowhere", "--list"])
        .env("RUST_LOG", "warn")
        .output()
        .expect("run corridor");

    assert!(output.status.success(), "unknown toggles must not abort");
    let stderr = String::from_utf8(output.stderr).expect("utf-8 output");
    assert!(stderr.contains("nowhere"), "missing warning in {stderr}");
}

#[test]
fn unsupported_config_versions_fail() {
    let path = std::env::temp_dir().join(format!("corridor-cli-v2-{}.toml", std::process::id()));
    fs::write(&path, "version = 2\n").expect("write configuration");

    let status = corridor()
        .arg("--config")
        .arg(&path)
        .status()
        .expect("run corridor");
    let _ = fs::remove_file(&path);

    assert!(!status.success(), "version 2 must be rejected");
}
