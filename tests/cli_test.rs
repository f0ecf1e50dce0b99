//! CLI contract tests
//!
//! Runs the real binary to verify argument handling, exit codes and where
//! output lands.

use std::path::Path;
use std::process::{Command, Output};

fn collocate_bin() -> String {
    env!("CARGO_BIN_EXE_collocate").to_string()
}

fn setup_workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("bigrams.csv"),
        "\
1;strong;J;tea;N;300;200;400;908868
2;tea;N;party;N;50;380;120;909218
3;green;J;tea;N;12;900;418;908438
4;tea;N;leaf;N;220;210;90;909248
",
    )
    .unwrap();
    dir
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(collocate_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("COLLOCATE_ALPHA")
        .env_remove("COLLOCATE_CORPUS_SIZE")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run collocate")
}

#[test]
fn test_wrong_arity_prints_usage_and_fails() {
    let dir = setup_workspace();
    for args in [&["bigrams.csv", "tea"][..], &["bigrams.csv", "tea", "N", "extra"][..], &[][..]] {
        let output = run_in(dir.path(), args);
        assert!(!output.status.success(), "args {:?} should fail", args);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Usage"), "no usage for {:?}: {}", args, stderr);
    }
    assert!(!dir.path().join("output_tea").exists());
}

#[test]
fn test_default_run_writes_output_dir() {
    let dir = setup_workspace();
    let output = run_in(dir.path(), &["bigrams.csv", "tea", "N"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out = dir.path().join("output_tea");
    assert!(out.join("combined_n_sorted.csv").is_file());
    assert!(out.join("filtered_t_test.csv").is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("As first word"));
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = setup_workspace();
    let output = run_in(dir.path(), &["absent.csv", "tea", "N"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("absent.csv"), "stderr: {}", stderr);
    assert!(!dir.path().join("output_tea").exists());
}

#[test]
fn test_invalid_alpha_is_rejected() {
    let dir = setup_workspace();
    let output = run_in(dir.path(), &["bigrams.csv", "tea", "N", "--alpha", "1.5"]);
    assert!(!output.status.success());
    assert!(!dir.path().join("output_tea").exists());
}

#[test]
fn test_target_word_with_separator_is_rejected() {
    let dir = setup_workspace();
    let output = run_in(dir.path(), &["bigrams.csv", "a/../../x", "N"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("a/../../x"), "stderr: {}", stderr);
    assert!(!dir.path().join("output_a").exists());
}

#[test]
fn test_output_root_and_config_file() {
    let dir = setup_workspace();
    std::fs::write(
        dir.path().join("collocate.toml"),
        "output_root = \"results\"\nalpha = 0.05\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["bigrams.csv", "tea", "N", "--quiet"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(dir.path().join("results/output_tea/data_mi.csv").is_file());

    let chi2 = std::fs::read_to_string(dir.path().join("results/output_tea/filtered_chi2.csv")).unwrap();
    let trailer: f64 = chi2.lines().last().unwrap().parse().unwrap();
    assert!((trailer - 3.8415).abs() < 1e-3, "alpha from config not used: {}", trailer);
}

#[test]
fn test_rerun_output_is_identical() {
    let dir = setup_workspace();
    let read_all = |dir: &Path| -> Vec<(String, Vec<u8>)> {
        let mut files: Vec<(String, Vec<u8>)> = std::fs::read_dir(dir.join("output_tea"))
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (
                    e.file_name().to_string_lossy().to_string(),
                    std::fs::read(e.path()).unwrap(),
                )
            })
            .collect();
        files.sort();
        files
    };

    assert!(run_in(dir.path(), &["bigrams.csv", "tea", "N", "-q"]).status.success());
    let first = read_all(dir.path());
    assert!(run_in(dir.path(), &["bigrams.csv", "tea", "N", "-q"]).status.success());
    let second = read_all(dir.path());

    assert_eq!(first.len(), 12);
    assert_eq!(first, second);
}
