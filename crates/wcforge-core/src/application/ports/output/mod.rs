//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wcforge-adapters` crate provides implementations.

use std::path::Path;

use crate::application::wizard::{ConfirmQuestion, InputQuestion};
use crate::error::WcforgeResult;

/// Port for filesystem operations under the destination root.
///
/// Implemented by:
/// - `wcforge_adapters::filesystem::LocalFilesystem` (production)
/// - `wcforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Read an entire file as UTF-8.
    fn read_to_string(&self, path: &Path) -> WcforgeResult<String>;

    /// Write content to a file, creating parents as needed.
    fn write_file(&self, path: &Path, content: &str) -> WcforgeResult<()>;

    /// Delete a single file.
    fn remove_file(&self, path: &Path) -> WcforgeResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> WcforgeResult<()>;
}

/// Port for reading bundled template bodies.
///
/// Keys are template-relative paths such as `test/component-test.html`.
pub trait TemplateSource: Send + Sync {
    /// Fetch a template body by its template-relative path.
    fn read(&self, template_path: &str) -> WcforgeResult<String>;
}

/// Port for the interactive prompt channel.
///
/// Adapters own the re-prompt loop: when an input question carries a
/// validator and the answer fails it, the same question is asked again with
/// a visible message — invalid input is never silently accepted.
pub trait Prompter: Send + Sync {
    /// Ask a free-text question.
    fn input(&self, question: &InputQuestion<'_>) -> WcforgeResult<String>;

    /// Ask a yes/no question.
    fn confirm(&self, question: &ConfirmQuestion<'_>) -> WcforgeResult<bool>;
}

/// Port for the external dependency installer.
///
/// Fire-and-forget: implementations log failures but never propagate them,
/// per the run model — all file operations are already complete when this
/// runs.
pub trait Installer: Send + Sync {
    /// Install dependencies under `root`. `npm` and `bower` select which
    /// package managers run.
    fn install(&self, root: &Path, npm: bool, bower: bool);
}
