//! The `recast` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn recast(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recast"))
        .args(args)
        .env("RECAST_CONFIG", config)
        .env_remove("RECAST_DATE_PATTERN")
        .env_remove("RECAST_CHARSET")
        .env_remove("RUST_LOG")
        .output()
        .expect("run recast")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn converts_text_argument() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("absent.toml");

    let output = recast(&config, &["int", "0x1F"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "31");

    let output = recast(&config, &["bool", "On"]);
    assert_eq!(stdout(&output), "true");
}

#[test]
fn failure_exits_non_zero_unless_defaulted() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("absent.toml");

    let output = recast(&config, &["bool", "maybe"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a boolean"));

    let output = recast(&config, &["bool", "maybe", "--default", "false"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "false");
}

#[test]
fn json_arrays_convert_element_wise() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("absent.toml");

    let output = recast(&config, &["long[]", r#"[1, null, "0x10"]"#, "--json"]);
    assert_eq!(stdout(&output), "[1, null, 16]");

    let output = recast(&config, &["string", "[1, null, 2, 3]", "--json"]);
    assert_eq!(stdout(&output), "1,2,3");

    let output = recast(&config, &["int", "null", "--json"]);
    assert_eq!(stdout(&output), "0");
}

#[test]
fn config_file_supplies_options() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[date]\npattern = \"yyyyMMdd\"\n\n[text]\ncharset = \"UTF-16BE\"\n")
        .unwrap();

    let output = recast(&config, &["date", "20190601"]);
    assert_eq!(stdout(&output), "2019-06-01");

    let output = recast(&config, &["bytes", "ab"]);
    assert_eq!(stdout(&output), "0x00610062");

    // Flags override the file
    let output = recast(&config, &["bytes", "ab", "--charset", "UTF-8"]);
    assert_eq!(stdout(&output), "0x6162");
}

#[test]
fn unknown_shape_is_an_error() {
    let dir = tempdir().unwrap();
    let output = recast(&dir.path().join("absent.toml"), &["quaternion", "1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown shape: quaternion"));
}
