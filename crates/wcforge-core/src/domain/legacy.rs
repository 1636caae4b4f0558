//! Detection of obsolete metadata files from the historical project layout.
//!
//! A destination containing any of these files is a **legacy layout**: it
//! keeps its existing manifests (which are migrated in place) instead of
//! receiving fresh ones, and the found files are offered for deletion.

/// Config files that the old project layout carried and the new one doesn't.
pub const LEGACY_FILES: [&str; 7] = [
    ".editorconfig",
    ".gitattributes",
    ".jsbeautifyrc",
    ".jscsrc",
    ".jshintrc",
    ".npmignore",
    "dependencyci.yml",
];

/// The set of obsolete files found in a destination directory.
///
/// Computed once, before any file is written or deleted, and read-only
/// afterwards — a file removed during cleanup must not "reappear" in later
/// decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyInventory {
    found: Vec<&'static str>,
}

impl LegacyInventory {
    /// Build an inventory by probing each known filename with `exists`.
    pub fn detect(mut exists: impl FnMut(&str) -> bool) -> Self {
        let found = LEGACY_FILES
            .iter()
            .copied()
            .filter(|name| exists(name))
            .collect();
        Self { found }
    }

    /// `true` when at least one obsolete file exists — the destination is a
    /// legacy layout.
    pub fn is_legacy(&self) -> bool {
        !self.found.is_empty()
    }

    /// Filenames found, in the fixed detection order.
    pub fn files(&self) -> &[&'static str] {
        &self.found
    }

    /// Comma-separated list for the delete-confirmation prompt.
    pub fn join(&self) -> String {
        self.found.join(", ")
    }
}
