//! CI manifest (`.travis.yml`) replacement.
//!
//! Unlike the JSON manifests, the CI file is not edited field by field: the
//! old document is parsed only to salvage its `env` block, then replaced
//! wholesale with the fixed pipeline definition. A document that fails to
//! parse is left untouched — this is the one transformer with a recoverable
//! failure path.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// The fixed CI pipeline written for migrated projects.
///
/// Field order is serialization order.
#[derive(Debug, Serialize)]
struct CiPipeline {
    language: String,
    node_js: String,
    sudo: String,
    before_script: Vec<String>,
    addons: Addons,
    script: Vec<String>,
    cache: Cache,
    after_success: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env: Option<Value>,
}

#[derive(Debug, Serialize)]
struct Addons {
    firefox: String,
    apt: Apt,
    sauce_connect: bool,
}

#[derive(Debug, Serialize)]
struct Apt {
    sources: Vec<String>,
    packages: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Cache {
    directories: Vec<String>,
}

/// The only part of the old document worth keeping.
#[derive(Debug, Deserialize)]
struct OldCi {
    #[serde(default)]
    env: Option<Value>,
}

/// Build the replacement CI document for `source`.
///
/// Returns `None` when the existing document cannot be parsed; the caller
/// must then leave the file untouched and continue the run.
pub fn upgrade_ci(source: &str, module_name: &str) -> Option<String> {
    let old: OldCi = match serde_yaml::from_str(source) {
        Ok(doc) => doc,
        Err(error) => {
            tracing::warn!(%error, "CI manifest is malformed, leaving it untouched");
            return None;
        }
    };

    let sauce_step = format!(
        "if [ \"${{TRAVIS_PULL_REQUEST}}\" = \"false\" ]; then \
         polymer test --plugin sauce --job-name \"{module_name}:${{TRAVIS_BRANCH}}\" \
         --build-number=${{TRAVIS_BUILD_NUMBER}}; fi"
    );

    let pipeline = CiPipeline {
        language: "node_js".into(),
        node_js: "stable".into(),
        sudo: "required".into(),
        before_script: vec![
            "npm install -g polymer-cli istanbul wct-istanbub".into(),
            "polymer install".into(),
        ],
        addons: Addons {
            firefox: "latest".into(),
            apt: Apt {
                sources: vec!["google-chrome".into()],
                packages: vec!["google-chrome-stable".into()],
            },
            sauce_connect: true,
        },
        script: vec![
            "npm run lint".into(),
            "xvfb-run polymer test --plugin local".into(),
            sauce_step,
        ],
        cache: Cache {
            directories: vec!["node_modules".into()],
        },
        after_success: vec!["node tasks/ci.js".into()],
        env: old.env,
    };

    // Serializing a plain struct of strings/lists cannot fail.
    serde_yaml::to_string(&pipeline).ok()
}
