//! Pure, idempotent transformers for the package and dependency manifests.
//!
//! Each transformer rewrites known fields of an already-parsed JSON document
//! in place. They are deliberately tolerant of missing optional sections
//! (`dependencies`, `devDependencies`, `scripts`, ...): absent maps are
//! treated as empty, never as errors. Filesystem concerns (reading, pretty
//! printing, writing back) live in the application layer.

use serde_json::{Map, Value, json};

/// Authors list written into migrated manifests.
pub const AUTHORS: [&str; 2] = [
    "The wcforge authors",
    "The Advanced Components authors <components@wcforge.dev>",
];

/// License forced onto migrated manifests.
pub const LICENSE: &str = "Apache-2.0";

/// Development tools guaranteed to be present after a package migration.
const ENSURED_DEV_TOOLS: [(&str, &str); 2] = [
    ("@polymer/gen-typescript-declarations", "^1.1.1"),
    ("polymer-cli", "^1.7.0"),
];

/// Tooling from the old build pipeline, removed from both dependency
/// sections of `package.json`.
const OBSOLETE_DEV_TOOLS: [&str; 16] = [
    "conventional-github-releaser",
    "gulp-conventional-changelog",
    "gulp",
    "gulp-bump",
    "gulp-git",
    "gulp-html-extract",
    "gulp-if",
    "gulp-jshint",
    "gulp-jscs",
    "gulp-jscs-stylish",
    "gulp-load-plugins",
    "gulp-util",
    "jshint-stylish",
    "run-sequence",
    "web-component-tester",
    "bower",
];

/// Script entries from the old pipeline with no equivalent in the new one.
const OBSOLETE_SCRIPTS: [&str; 4] = ["update-deps", "release", "serve", "deps"];

/// Dev dependencies pinned by the bower migration.
const BOWER_DEV_DEPENDENCIES: [(&str, &str); 5] = [
    ("iron-demo-helpers", "PolymerElements/iron-demo-helpers#^2.0.0"),
    ("web-component-tester", "Polymer/web-component-tester#^6.0.0"),
    ("webcomponentsjs", "webcomponents/webcomponentsjs#^1.0.0"),
    ("iron-component-page", "PolymerElements/iron-component-page#^3.0.1"),
    ("iron-test-helpers", "PolymerElements/iron-test-helpers#^2.0.0"),
];

/// Bower dev dependencies dropped by the migration.
const BOWER_OBSOLETE_DEV_DEPENDENCIES: [&str; 2] = ["paper-styles", "test-fixture"];

/// Preview version string, re-exported for transformer callers.
pub use crate::domain::tokens::PREVIEW_VERSION;

/// Migrate a `package.json` document to the new project convention.
///
/// Safe to run repeatedly; every edit either overwrites with a fixed value
/// or deletes a key.
pub fn upgrade_package(doc: &mut Value, module_name: &str, preview: bool) {
    let Some(root) = doc.as_object_mut() else {
        return;
    };

    with_object(root, "devDependencies", |dev| {
        for (name, range) in ENSURED_DEV_TOOLS {
            dev.entry(name).or_insert_with(|| json!(range));
        }
        for name in OBSOLETE_DEV_TOOLS {
            dev.remove(name);
        }
    });
    if let Some(deps) = section_mut(root, "dependencies") {
        for name in OBSOLETE_DEV_TOOLS {
            deps.remove(name);
        }
    }

    root.remove("engine");
    normalize_authors(root);
    root.insert("license".into(), json!(LICENSE));

    with_object(root, "scripts", |scripts| {
        for name in OBSOLETE_SCRIPTS {
            scripts.remove(name);
        }
        scripts.insert("lint".into(), json!(format!("polymer lint {module_name}.html")));
        scripts.insert("test".into(), json!("polymer test --plugin local"));
        scripts.insert(
            "test-sauce".into(),
            json!(format!(
                "polymer test --plugin sauce --job-name \"{module_name}:local-test\""
            )),
        );
        scripts.insert(
            "update-types".into(),
            json!("gen-typescript-declarations --deleteExisting --outDir ."),
        );
    });

    collapse_main(root);
    if preview {
        root.insert("version".into(), json!(PREVIEW_VERSION));
    }
}

/// Migrate a `bower.json` document to the new project convention.
pub fn upgrade_bower(doc: &mut Value, preview: bool) {
    let Some(root) = doc.as_object_mut() else {
        return;
    };

    root.insert("license".into(), json!(LICENSE));
    collapse_main(root);
    normalize_authors(root);

    with_object(root, "devDependencies", |dev| {
        for (name, source) in BOWER_DEV_DEPENDENCIES {
            dev.insert(name.into(), json!(source));
        }
        for name in BOWER_OBSOLETE_DEV_DEPENDENCIES {
            dev.remove(name);
        }
    });

    // The old layout listed its CI policy file in bower's ignore list.
    if let Some(Value::Array(ignore)) = root.get_mut("ignore") {
        if let Some(pos) = ignore.iter().position(|v| v == "dependencyci.yml") {
            ignore.remove(pos);
        }
    }

    if let Some(deps) = section_mut(root, "dependencies") {
        for (key, value) in deps.iter_mut() {
            rewrite_dependency_pin(key, value);
        }
    }

    if preview {
        root.insert("version".into(), json!(PREVIEW_VERSION));
    }
}

/// Rewrite one runtime dependency's version pin to the new major version.
///
/// Priority list: the hardcoded `polymer` key first, then the `paper-` /
/// `iron-` prefix rules. Prefixed entries are only touched when they carry a
/// `#^` or `#<2` marker; anything else is left alone.
fn rewrite_dependency_pin(key: &str, value: &mut Value) {
    if key == "polymer" {
        *value = json!("Polymer/polymer#^2.0.0");
        return;
    }
    if !(key.starts_with("paper-") || key.starts_with("iron-")) {
        return;
    }
    let Some(source) = value.as_str() else {
        return;
    };
    let marker = source.find("#^").or_else(|| source.find("#<2"));
    if let Some(index) = marker {
        *value = json!(format!("{}#^2.0.0", &source[..index]));
    }
}

// ── Shared field edits ────────────────────────────────────────────────────────

/// Replace a singular `author` field, or a single-entry `authors` list, with
/// the fixed two-entry authors list.
fn normalize_authors(root: &mut Map<String, Value>) {
    let had_author = root.remove("author").is_some();
    let single_entry = matches!(root.get("authors"), Some(Value::Array(a)) if a.len() == 1);
    if had_author || single_entry {
        root.insert("authors".into(), json!(AUTHORS));
    }
}

/// Collapse an array-valued `main` field to its first element.
///
/// Historical manifests used `"main": ["x.html"]`; the new convention is a
/// plain scalar. Normalized here, at the document boundary, so nothing
/// downstream has to handle the union.
fn collapse_main(root: &mut Map<String, Value>) {
    if let Some(Value::Array(items)) = root.get_mut("main") {
        if let Some(first) = items.first().cloned() {
            root.insert("main".into(), first);
        }
    }
}

/// Edit the object stored under `key`, creating it when absent. A non-object
/// value under `key` is discarded and rebuilt as an empty object.
fn with_object(
    root: &mut Map<String, Value>,
    key: &str,
    edit: impl FnOnce(&mut Map<String, Value>),
) {
    let mut section = match root.remove(key) {
        Some(Value::Object(section)) => section,
        _ => Map::new(),
    };
    edit(&mut section);
    root.insert(key.to_string(), Value::Object(section));
}

fn section_mut<'a>(
    root: &'a mut Map<String, Value>,
    key: &str,
) -> Option<&'a mut Map<String, Value>> {
    root.get_mut(key).and_then(Value::as_object_mut)
}
