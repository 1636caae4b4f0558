//! End-to-end generation runs over the in-memory adapters.

use std::path::{Path, PathBuf};

use wcforge_adapters::{BuiltinTemplates, MemoryFilesystem, NoopInstaller, ScriptedPrompt};
use wcforge_core::application::{GeneratorService, services::GenerateReport};
use wcforge_core::domain::Answers;
use wcforge_core::error::{WcforgeError, WcforgeResult};

struct Harness {
    filesystem: MemoryFilesystem,
    installer: NoopInstaller,
    service: GeneratorService,
    root: PathBuf,
}

fn harness_at(root: &str, skip_install: bool) -> Harness {
    let filesystem = MemoryFilesystem::new();
    let installer = NoopInstaller::new();
    let service = GeneratorService::new(
        Box::new(filesystem.clone()),
        Box::new(BuiltinTemplates::new()),
        Box::new(installer.clone()),
        PathBuf::from(root),
        skip_install,
    );
    Harness {
        filesystem,
        installer,
        service,
        root: PathBuf::from(root),
    }
}

fn answers(name: &str) -> Answers {
    Answers {
        name: name.into(),
        description: "A test panel".into(),
        preview: false,
        delete_old: None,
    }
}

impl Harness {
    fn execute(&self, answers: Answers) -> WcforgeResult<GenerateReport> {
        self.service.execute(answers)
    }

    fn read(&self, relative: &str) -> String {
        self.filesystem
            .read_file(&self.root.join(relative))
            .unwrap_or_else(|| panic!("expected {relative} to exist"))
    }

    fn exists(&self, relative: &str) -> bool {
        self.filesystem.read_file(&self.root.join(relative)).is_some()
    }
}

// ── fresh destinations ────────────────────────────────────────────────────────

#[test]
fn fresh_run_writes_both_tiers_and_the_component() {
    let h = harness_at("dest", false);
    let report = h.execute(answers("my-el")).unwrap();

    assert!(!report.legacy);
    // 9 base + 5 fresh + component
    assert_eq!(report.written.len(), 15);
    for file in [
        "gen-tsd.json",
        "polymer.json",
        "index.html",
        "CONTRIBUTING.md",
        ".gitignore",
        "tasks/ci.js",
        "wct.conf.json",
        "README.md",
        "test/my-el-test.html",
        "package.json",
        "bower.json",
        "test/index.html",
        "demo/index.html",
        ".travis.yml",
        "my-el.html",
    ] {
        assert!(h.exists(file), "missing {file}");
    }
}

#[test]
fn tokens_are_substituted_in_bodies_and_paths() {
    let h = harness_at("dest", false);
    h.execute(answers("raml-request-panel")).unwrap();

    let component = h.read("raml-request-panel.html");
    assert!(component.contains("class RamlRequestPanel extends Polymer.Element"));
    assert!(component.contains("return 'raml-request-panel';"));
    assert!(!component.contains("{{module"));

    let readme = h.read("README.md");
    assert!(readme.contains("# raml-request-panel"));
    assert!(readme.contains("A test panel"));
}

#[test]
fn fresh_manifest_gets_the_default_version() {
    let h = harness_at("dest", false);
    h.execute(answers("my-el")).unwrap();

    let doc: serde_json::Value = serde_json::from_str(&h.read("package.json")).unwrap();
    assert_eq!(doc["version"], "0.1.0");
    assert_eq!(doc["name"], "my-el");
}

#[test]
fn preview_answers_select_the_preview_version() {
    let h = harness_at("dest", false);
    h.execute(Answers {
        preview: true,
        ..answers("my-el")
    })
    .unwrap();

    let doc: serde_json::Value = serde_json::from_str(&h.read("bower.json")).unwrap();
    assert_eq!(doc["version"], "2.0.0-preview");
}

#[test]
fn fresh_run_installs_npm_and_bower() {
    let h = harness_at("dest", false);
    h.execute(answers("my-el")).unwrap();
    assert_eq!(h.installer.calls(), [(PathBuf::from("dest"), true, true)]);
}

#[test]
fn skip_install_dispatches_nothing() {
    let h = harness_at("dest", true);
    h.execute(answers("my-el")).unwrap();
    assert!(h.installer.calls().is_empty());
}

#[test]
fn existing_component_file_is_never_overwritten() {
    let h = harness_at("dest", false);
    h.filesystem.seed_file("dest/my-el.html", "hand-written");

    let report = h.execute(answers("my-el")).unwrap();
    assert_eq!(h.read("my-el.html"), "hand-written");
    assert!(!report.written.iter().any(|p| p.ends_with("my-el.html")));
}

#[test]
fn fresh_run_keeps_an_existing_bower_components_tree() {
    let h = harness_at("dest", false);
    h.filesystem
        .seed_file("dest/bower_components/polymer/polymer.html", "<html>");

    let report = h.execute(answers("my-el")).unwrap();
    assert!(!report.legacy);
    assert!(h.exists("bower_components/polymer/polymer.html"));
}

#[test]
fn invalid_name_aborts_before_any_write() {
    let h = harness_at("dest", false);
    let err = h.execute(answers("nodash")).unwrap_err();
    assert!(matches!(err, WcforgeError::Domain(_)));
    assert!(h.filesystem.list_files().is_empty());
}

// ── legacy destinations ───────────────────────────────────────────────────────

fn legacy_harness() -> Harness {
    let h = harness_at("dest", false);
    h.filesystem.seed_file("dest/.jshintrc", "{}");
    h.filesystem.seed_file(
        "dest/package.json",
        r#"{
  "name": "my-el",
  "description": "Old description",
  "license": "MIT",
  "devDependencies": {"gulp": "^3.9.1"}
}"#,
    );
    h.filesystem.seed_file(
        "dest/bower.json",
        r#"{
  "name": "my-el",
  "dependencies": {"polymer": "Polymer/polymer#^1.0.0", "paper-button": "PolymerElements/paper-button#^1.0.0"}
}"#,
    );
    h.filesystem
        .seed_file("dest/.travis.yml", "language: node_js\nenv:\n- FOO=bar\n");
    h.filesystem
        .seed_file("dest/bower_components/polymer/polymer.html", "<html>");
    h
}

#[test]
fn legacy_run_migrates_instead_of_replacing_manifests() {
    let h = legacy_harness();
    let report = h
        .execute(Answers {
            delete_old: Some(false),
            ..answers("my-el")
        })
        .unwrap();

    assert!(report.legacy);
    // Fresh-tier templates are withheld.
    assert!(!h.exists("test/index.html"));
    assert!(!h.exists("demo/index.html"));

    let package: serde_json::Value = serde_json::from_str(&h.read("package.json")).unwrap();
    assert!(package["devDependencies"].get("gulp").is_none());
    assert_eq!(
        package["devDependencies"]["polymer-cli"],
        "^1.7.0"
    );
    assert_eq!(package["license"], "Apache-2.0");
    assert_eq!(package["scripts"]["lint"], "polymer lint my-el.html");

    let bower: serde_json::Value = serde_json::from_str(&h.read("bower.json")).unwrap();
    assert_eq!(bower["dependencies"]["polymer"], "Polymer/polymer#^2.0.0");
    assert_eq!(
        bower["dependencies"]["paper-button"],
        "PolymerElements/paper-button#^2.0.0"
    );

    let travis = h.read(".travis.yml");
    assert!(travis.contains("FOO=bar"));
    assert!(travis.contains("sauce"));
}

#[test]
fn legacy_run_drops_bower_components_and_skips_bower_install() {
    let h = legacy_harness();
    h.execute(answers("my-el")).unwrap();

    assert!(!h.exists("bower_components/polymer/polymer.html"));
    assert_eq!(h.installer.calls(), [(PathBuf::from("dest"), true, false)]);
}

#[test]
fn confirmed_cleanup_deletes_the_inventory() {
    let h = legacy_harness();
    let report = h
        .execute(Answers {
            delete_old: Some(true),
            ..answers("my-el")
        })
        .unwrap();

    assert!(!h.exists(".jshintrc"));
    assert_eq!(report.deleted, [Path::new("dest/.jshintrc")]);
}

#[test]
fn declined_cleanup_keeps_the_inventory() {
    let h = legacy_harness();
    h.execute(Answers {
        delete_old: Some(false),
        ..answers("my-el")
    })
    .unwrap();
    assert!(h.exists(".jshintrc"));
}

#[test]
fn malformed_package_manifest_aborts_the_run() {
    let h = harness_at("dest", false);
    h.filesystem.seed_file("dest/.jshintrc", "{}");
    h.filesystem.seed_file("dest/package.json", "{not json");

    let err = h.execute(answers("my-el")).unwrap_err();
    assert!(err.to_string().contains("package.json"));
}

#[test]
fn malformed_ci_manifest_is_left_alone() {
    let h = harness_at("dest", false);
    h.filesystem.seed_file("dest/.jshintrc", "{}");
    h.filesystem
        .seed_file("dest/.travis.yml", ": not: valid: yaml: [");

    h.execute(answers("my-el")).unwrap();
    assert_eq!(h.read(".travis.yml"), ": not: valid: yaml: [");
}

// ── interactive runs ──────────────────────────────────────────────────────────

#[test]
fn interactive_run_feeds_wizard_answers_through() {
    let h = harness_at("my-project", false);
    let prompt = ScriptedPrompt::new();
    prompt.push_input("cool-panel").push_input("A cool panel");
    prompt.push_confirm(false);

    let report = h.service.run(&prompt).unwrap();
    assert_eq!(report.module_name, "cool-panel");
    assert!(h.exists("cool-panel.html"));
}

#[test]
fn interactive_run_defaults_description_from_bower_manifest() {
    let h = harness_at("my-project", false);
    h.filesystem.seed_file(
        "my-project/bower.json",
        r#"{"name": "old", "description": "From bower"}"#,
    );
    // Accept the defaults for description and preview; confirm delete-old is
    // not asked because no legacy files exist.
    let prompt = ScriptedPrompt::new();
    prompt.push_input("neat-el");

    let report = h.service.run(&prompt).unwrap();
    assert_eq!(report.module_name, "neat-el");
    let readme = h.read("README.md");
    assert!(readme.contains("From bower"));
}
