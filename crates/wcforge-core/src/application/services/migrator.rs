//! In-place migration of existing metadata files.
//!
//! Applies the pure document transformers from `domain::manifest` and
//! `domain::ci` through the [`Filesystem`] port. Each file is independent: a
//! missing file means nothing to do, a malformed CI manifest is skipped with
//! a warning, but a malformed JSON manifest aborts the run rather than risk
//! clobbering a document we cannot read.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::ci::upgrade_ci;
use crate::domain::manifest::{upgrade_bower, upgrade_package};
use crate::error::WcforgeResult;

const PACKAGE_MANIFEST: &str = "package.json";
const BOWER_MANIFEST: &str = "bower.json";
const CI_MANIFEST: &str = ".travis.yml";
const BOWER_COMPONENTS_DIR: &str = "bower_components";

/// One migration pass over a legacy destination.
pub struct Migrator<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> Migrator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { filesystem, root }
    }

    /// Migrate `package.json`, `bower.json` and `.travis.yml` in place, and
    /// drop any installed `bower_components` tree: the rewritten pins target
    /// a new major version and conflict with what is already on disk.
    ///
    /// Returns the paths actually rewritten.
    pub fn migrate(&self, module_name: &str, preview: bool) -> WcforgeResult<Vec<PathBuf>> {
        let mut touched = Vec::new();

        if let Some(path) =
            self.upgrade_json(PACKAGE_MANIFEST, |doc| upgrade_package(doc, module_name, preview))?
        {
            touched.push(path);
        }
        if let Some(path) = self.upgrade_json(BOWER_MANIFEST, |doc| upgrade_bower(doc, preview))? {
            touched.push(path);
        }
        if let Some(path) = self.upgrade_travis(module_name)? {
            touched.push(path);
        }

        let stale = self.root.join(BOWER_COMPONENTS_DIR);
        if self.filesystem.exists(&stale) {
            self.filesystem.remove_dir_all(&stale)?;
            debug!(path = %stale.display(), "removed stale bower_components");
        }

        info!(count = touched.len(), "migrated metadata files");
        Ok(touched)
    }

    /// Read, transform and pretty-print one JSON manifest. A missing file is
    /// a no-op; an unparseable one is fatal.
    fn upgrade_json(
        &self,
        name: &str,
        apply: impl FnOnce(&mut Value),
    ) -> WcforgeResult<Option<PathBuf>> {
        let path = self.root.join(name);
        if !self.filesystem.exists(&path) {
            debug!(manifest = name, "not present, skipping");
            return Ok(None);
        }

        let source = self.filesystem.read_to_string(&path)?;
        let mut doc: Value = serde_json::from_str(&source).map_err(|e| {
            ApplicationError::ManifestParse {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;

        apply(&mut doc);

        let mut rendered = serde_json::to_string_pretty(&doc).map_err(|e| {
            ApplicationError::ManifestParse {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;
        rendered.push('\n');
        self.filesystem.write_file(&path, &rendered)?;
        debug!(manifest = name, "rewritten");
        Ok(Some(path))
    }

    /// Replace the CI pipeline wholesale, keeping the old `env` section.
    /// Unlike the JSON manifests, a file we cannot parse is left untouched
    /// and the run continues.
    fn upgrade_travis(&self, module_name: &str) -> WcforgeResult<Option<PathBuf>> {
        let path = self.root.join(CI_MANIFEST);
        if !self.filesystem.exists(&path) {
            debug!(manifest = CI_MANIFEST, "not present, skipping");
            return Ok(None);
        }

        let source = self.filesystem.read_to_string(&path)?;
        let Some(rendered) = upgrade_ci(&source, module_name) else {
            warn!(manifest = CI_MANIFEST, "unparseable, leaving it alone");
            return Ok(None);
        };
        self.filesystem.write_file(&path, &rendered)?;
        debug!(manifest = CI_MANIFEST, "rewritten");
        Ok(Some(path))
    }
}
