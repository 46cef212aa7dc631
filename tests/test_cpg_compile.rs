// Copyright 2025 Neurobot Developers
// SPDX-License-Identifier: Apache-2.0

/// End-to-end tests of the `cpg-compile` binary
///
/// Each run happens inside a fresh temporary directory with the config
/// environment cleared, so no stray `neurobot.toml` is picked up.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn cpg_compile(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpg-compile"))
        .args(args)
        .current_dir(dir)
        .env_remove("NEUROBOT_CONFIG_PATH")
        .env_remove("NEUROBOT_DEBUG")
        .env("NEUROBOT_LOG_LEVEL", "warn")
        .output()
        .expect("Failed to run cpg-compile")
}

#[test]
fn test_compiles_default_variant() {
    let temp_dir = TempDir::new().unwrap();
    let output = cpg_compile(temp_dir.path(), &["cpg.c"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let source = fs::read_to_string(temp_dir.path().join("cpg.c")).unwrap();
    assert!(source.contains("#define N_CELLS 16\n"));
    assert!(source.contains("\t[1][0] = 20.0,\n"));
}

#[test]
fn test_double_variant_with_summary() {
    let temp_dir = TempDir::new().unwrap();
    let output = cpg_compile(
        temp_dir.path(),
        &["out.c", "--variant", "double-feedback", "--summary"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["n_cells"], 28);
    assert_eq!(summary["n_neurons"], 24);
    assert_eq!(summary["n_synapses"], 72);

    let source = fs::read_to_string(temp_dir.path().join("out.c")).unwrap();
    assert!(source.contains("#define N_CELLS 28\n"));
}

#[test]
fn test_stdout_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = cpg_compile(temp_dir.path(), &["-", "--variant", "DoubleCPG"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("#include \"libneurobot.h\"\n"));
    assert!(stdout.ends_with("};\n"));
    assert!(!temp_dir.path().join("-").exists());
}

#[test]
fn test_config_file_and_overrides() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("neurobot.toml"),
        "[gains.single]\ngexc = 30.0\nginh = 50.0\n",
    )
    .unwrap();

    let output = cpg_compile(temp_dir.path(), &["cpg.c", "--set", "single.ginh=55"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let source = fs::read_to_string(temp_dir.path().join("cpg.c")).unwrap();
    assert!(source.contains("\t[1][0] = 30.0,\n"));
    assert!(source.contains("\t[0][2] = 55.0,\n"));
}

#[test]
fn test_unknown_variant_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = cpg_compile(temp_dir.path(), &["cpg.c", "--variant", "triple"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("cpg.c").exists());
}

#[test]
fn test_invalid_config_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("neurobot.toml"),
        "[feedback]\nsingle_sided_gain = inf\n",
    )
    .unwrap();

    let output = cpg_compile(temp_dir.path(), &["cpg.c", "--variant", "single-feedback"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("feedback.single_sided_gain"));
    assert!(!temp_dir.path().join("cpg.c").exists());
}

#[test]
fn test_bad_override_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = cpg_compile(temp_dir.path(), &["cpg.c", "--set", "single.gexc"]);
    assert_eq!(output.status.code(), Some(1));
}
