//! Integration tests for the wcforge binary.
//!
//! Every generation run passes `--skip-install` so the tests never spawn
//! npm or bower.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn wcforge() -> Command {
    Command::cargo_bin("wcforge").unwrap()
}

// ── argument surface ──────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    wcforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_flag() {
    wcforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn no_arguments_shows_help_and_fails() {
    wcforge().assert().failure().code(2);
}

#[test]
fn generate_help_lists_flags() {
    wcforge()
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--preview"))
        .stdout(predicate::str::contains("--skip-install"));
}

#[test]
fn completions_bash() {
    wcforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wcforge"));
}

// ── fresh generation ──────────────────────────────────────────────────────────

#[test]
fn generates_a_fresh_project() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("my-panel");

    wcforge()
        .args([
            "generate",
            "--dir",
            dest.to_str().unwrap(),
            "--name",
            "my-panel",
            "--description",
            "A panel",
            "--skip-install",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-panel"));

    assert!(dest.join("my-panel.html").exists());
    assert!(dest.join(".gitignore").exists());
    assert!(dest.join("test/my-panel-test.html").exists());
    assert!(dest.join("demo/index.html").exists());

    let package = fs::read_to_string(dest.join("package.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&package).unwrap();
    assert_eq!(doc["name"], "my-panel");
    assert_eq!(doc["version"], "0.1.0");
    assert_eq!(doc["description"], "A panel");
}

#[test]
fn preview_flag_sets_preview_version() {
    let temp = TempDir::new().unwrap();

    wcforge()
        .current_dir(temp.path())
        .args(["generate", "--name", "prev-el", "--preview", "--skip-install"])
        .assert()
        .success();

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("bower.json")).unwrap()).unwrap();
    assert_eq!(doc["version"], "2.0.0-preview");
}

#[test]
fn rerun_keeps_the_component_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("my-el.html"), "hand-written").unwrap();

    wcforge()
        .current_dir(temp.path())
        .args(["generate", "--name", "my-el", "--skip-install"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("my-el.html")).unwrap(),
        "hand-written"
    );
}

// ── legacy migration ──────────────────────────────────────────────────────────

#[test]
fn migrates_a_legacy_project() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".jshintrc"), "{}").unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{"name": "old-el", "license": "MIT", "devDependencies": {"gulp": "^3.9.1"}}"#,
    )
    .unwrap();
    fs::write(
        temp.path().join(".travis.yml"),
        "language: node_js\nenv:\n- FOO=bar\n",
    )
    .unwrap();

    wcforge()
        .current_dir(temp.path())
        .args(["generate", "--name", "old-el", "--delete-old", "--skip-install"])
        .assert()
        .success();

    // Obsolete file removed, manifest migrated in place.
    assert!(!temp.path().join(".jshintrc").exists());
    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(doc["license"], "Apache-2.0");
    assert!(doc["devDependencies"].get("gulp").is_none());
    assert_eq!(doc["devDependencies"]["polymer-cli"], "^1.7.0");

    // CI pipeline replaced, env preserved.
    let travis: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(temp.path().join(".travis.yml")).unwrap())
            .unwrap();
    assert_eq!(travis["env"][0], "FOO=bar");
    assert_eq!(travis["script"].as_sequence().unwrap().len(), 3);

    // Legacy projects keep their manifests: no fresh demo page.
    assert!(!temp.path().join("demo/index.html").exists());
}

// ── failure modes ─────────────────────────────────────────────────────────────

#[test]
fn rejects_a_name_without_a_dash() {
    let temp = TempDir::new().unwrap();

    wcforge()
        .current_dir(temp.path())
        .args(["generate", "--name", "panel", "--skip-install"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("panel"));
}

#[test]
fn rejects_a_file_destination() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("a-file");
    fs::write(&file, "x").unwrap();

    wcforge()
        .args([
            "generate",
            "--dir",
            file.to_str().unwrap(),
            "--name",
            "my-el",
            "--skip-install",
        ])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn malformed_package_manifest_exits_with_internal_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".jshintrc"), "{}").unwrap();
    fs::write(temp.path().join("package.json"), "{not json").unwrap();

    wcforge()
        .current_dir(temp.path())
        .args(["generate", "--name", "my-el", "--skip-install"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("package.json"));
}
