//! Integration tests for genforge-cli.
//!
//! The GitHub path is never exercised here (no `gh` on CI); every `new`
//! invocation passes `--skip-git` so the tests only depend on the
//! filesystem.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn genforge() -> Command {
    Command::cargo_bin("genforge").unwrap()
}

#[test]
fn test_help_flag() {
    genforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("genforge"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_version_flag() {
    genforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    genforge()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--skip-git"))
        .stdout(predicate::str::contains("--skip-github"))
        .stdout(predicate::str::contains("--private"));
}

#[test]
fn test_new_project_scaffolds_the_full_template() {
    let temp = TempDir::new().unwrap();

    genforge()
        .current_dir(temp.path())
        .args(["new", "demo_project", "--skip-git", "--yes"])
        .assert()
        .success();

    let project = temp.path().join("demo_project");
    for path in [
        "config/model_config.yaml",
        "config/logging_config.yaml",
        "src/core/base_llm.py",
        "src/core/model_factory.py",
        "src/prompts/templates.py",
        "src/rag/retriever.py",
        "src/inference/inference_engine.py",
        "data/vectordb",
        "docs/README.md",
        "docs/SETUP.md",
        "main.py",
        "pyproject.toml",
        "requirements.txt",
        ".gitignore",
        ".env.example",
    ] {
        assert!(project.join(path).exists(), "missing: {path}");
    }

    let readme = std::fs::read_to_string(project.join("docs/README.md")).unwrap();
    assert!(readme.starts_with("# demo_project"));
}

#[test]
fn test_invalid_project_name() {
    let temp = TempDir::new().unwrap();

    genforge()
        .current_dir(temp.path())
        .args(["new", "bad name!", "--skip-git", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    // Nothing may be created for a rejected name.
    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_quiet_flag_suppresses_stdout() {
    let temp = TempDir::new().unwrap();

    genforge()
        .current_dir(temp.path())
        .args(["-q", "new", "demo_project", "--skip-git", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo_project/main.py").exists());
}

#[test]
fn test_rerun_overwrites_in_place() {
    let temp = TempDir::new().unwrap();

    for _ in 0..2 {
        genforge()
            .current_dir(temp.path())
            .args(["new", "demo_project", "--skip-git", "--yes"])
            .assert()
            .success();
    }

    assert!(temp.path().join("demo_project/main.py").exists());
}

#[test]
fn test_existing_dir_empty_answer_cancels() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("demo_project")).unwrap();

    // Pressing enter at the continuation prompt must decline, leaving the
    // existing directory untouched.
    genforge()
        .current_dir(temp.path())
        .args(["new", "demo_project", "--skip-git"])
        .write_stdin("\n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cancelled"));

    assert_eq!(
        std::fs::read_dir(temp.path().join("demo_project")).unwrap().count(),
        0
    );
}

#[test]
fn test_existing_dir_explicit_yes_continues() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("demo_project")).unwrap();

    genforge()
        .current_dir(temp.path())
        .args(["new", "demo_project", "--skip-git"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(temp.path().join("demo_project/main.py").exists());
}

#[test]
fn test_public_private_conflict() {
    genforge()
        .args(["new", "x", "--public", "--private"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_shell_completions() {
    genforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("genforge"));
}
