//! Wizard answers and the derived template token set.
//!
//! `Answers` is created once by the wizard and immutable afterwards.
//! `TokenSet` is fully determined by `Answers` — no hidden state.

use std::collections::HashMap;

use crate::domain::case_map::{CaseMap, SEPARATOR};
use crate::domain::error::DomainError;

/// Component version written for regular (non-preview) projects.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Component version written when the preview track is selected.
pub const PREVIEW_VERSION: &str = "2.0.0-preview";

/// The flat answer set produced by one wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    /// Component name; dash-delimited, validated by [`validate_component_name`].
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Target the `2.0.0-preview` version track.
    pub preview: bool,
    /// Delete obsolete config files; `None` when the question was never asked
    /// (no legacy files detected).
    pub delete_old: Option<bool>,
}

impl Answers {
    /// `true` only when the user explicitly confirmed deletion.
    pub fn wants_delete_old(&self) -> bool {
        self.delete_old.unwrap_or(false)
    }
}

/// Validate a component name: non-empty and containing at least one `-`.
///
/// Custom-element names require a dash, so this is a hard rule, not a
/// convention.
pub fn validate_component_name(input: &str) -> Result<(), DomainError> {
    if input.is_empty() {
        return Err(DomainError::EmptyComponentName);
    }
    if !input.contains(SEPARATOR) {
        return Err(DomainError::NameMissingSeparator {
            name: input.to_string(),
        });
    }
    Ok(())
}

/// The string-keyed record substituted into templates.
///
/// Keys match the `{{token}}` placeholders used in template bodies and in
/// one destination path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSet {
    pub module_name: String,
    pub module_description: String,
    pub module_version: String,
    pub module_class_name: String,
}

impl TokenSet {
    /// Derive the token set from a completed answer set.
    pub fn derive(answers: &Answers, case_map: &mut CaseMap) -> Self {
        let version = if answers.preview {
            PREVIEW_VERSION
        } else {
            DEFAULT_VERSION
        };
        Self {
            module_name: answers.name.clone(),
            module_description: answers.description.clone(),
            module_version: version.to_string(),
            module_class_name: case_map.dash_to_camel(&answers.name, true),
        }
    }

    /// Substitute every `{{token}}` occurrence in `input`.
    ///
    /// Unknown placeholders are left as-is; their meaning belongs to the
    /// template author, not to us.
    pub fn render(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (key, value) in self.pairs() {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }

    fn pairs(&self) -> HashMap<&'static str, &str> {
        let mut map = HashMap::new();
        map.insert("moduleName", self.module_name.as_str());
        map.insert("moduleDescription", self.module_description.as_str());
        map.insert("moduleVersion", self.module_version.as_str());
        map.insert("moduleClassName", self.module_class_name.as_str());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(name: &str, preview: bool) -> Answers {
        Answers {
            name: name.into(),
            description: "A panel".into(),
            preview,
            delete_old: None,
        }
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            validate_component_name(""),
            Err(DomainError::EmptyComponentName)
        ));
    }

    #[test]
    fn name_without_separator_is_rejected() {
        assert!(matches!(
            validate_component_name("validname"),
            Err(DomainError::NameMissingSeparator { .. })
        ));
    }

    #[test]
    fn dashed_name_is_accepted() {
        assert!(validate_component_name("valid-name").is_ok());
    }

    // ── derivation ────────────────────────────────────────────────────────

    #[test]
    fn tokens_are_derived_from_answers() {
        let mut cm = CaseMap::new();
        let tokens = TokenSet::derive(&answers("raml-request-panel", false), &mut cm);
        assert_eq!(tokens.module_name, "raml-request-panel");
        assert_eq!(tokens.module_class_name, "RamlRequestPanel");
        assert_eq!(tokens.module_version, DEFAULT_VERSION);
    }

    #[test]
    fn preview_flag_selects_preview_version() {
        let mut cm = CaseMap::new();
        let tokens = TokenSet::derive(&answers("my-el", true), &mut cm);
        assert_eq!(tokens.module_version, PREVIEW_VERSION);
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn render_substitutes_all_tokens() {
        let mut cm = CaseMap::new();
        let tokens = TokenSet::derive(&answers("my-el", false), &mut cm);
        let body = "<{{moduleName}}> v{{moduleVersion}}: {{moduleDescription}} ({{moduleClassName}})";
        assert_eq!(tokens.render(body), "<my-el> v0.1.0: A panel (MyEl)");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let mut cm = CaseMap::new();
        let tokens = TokenSet::derive(&answers("my-el", false), &mut cm);
        assert_eq!(tokens.render("{{somethingElse}}"), "{{somethingElse}}");
    }

    #[test]
    fn delete_old_defaults_to_false_downstream() {
        assert!(!answers("a-b", false).wants_delete_old());
        let confirmed = Answers {
            delete_old: Some(true),
            ..answers("a-b", false)
        };
        assert!(confirmed.wants_delete_old());
    }
}
