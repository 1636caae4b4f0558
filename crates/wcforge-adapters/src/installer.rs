//! Dependency installer adapters.
//!
//! Installation runs after every file operation has completed, so nothing
//! downstream depends on its outcome. Failures are logged and swallowed.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use wcforge_core::application::ports::Installer;

/// Runs `npm install` and `bower install` as child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInstaller;

impl CommandInstaller {
    pub fn new() -> Self {
        Self
    }

    fn run(tool: &str, root: &Path) {
        info!(tool, root = %root.display(), "installing dependencies");
        match Command::new(tool).arg("install").current_dir(root).status() {
            Ok(status) if status.success() => {}
            Ok(status) => warn!(tool, %status, "install exited with failure"),
            Err(e) => warn!(tool, error = %e, "could not launch installer"),
        }
    }
}

impl Installer for CommandInstaller {
    fn install(&self, root: &Path, npm: bool, bower: bool) {
        if npm {
            Self::run("npm", root);
        }
        if bower {
            Self::run("bower", root);
        }
    }
}

/// Installer that records its invocations instead of running anything.
/// Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct NoopInstaller {
    calls: Arc<Mutex<Vec<(PathBuf, bool, bool)>>>,
}

impl NoopInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(root, npm, bower)` tuples in call order.
    pub fn calls(&self) -> Vec<(PathBuf, bool, bool)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Installer for NoopInstaller {
    fn install(&self, root: &Path, npm: bool, bower: bool) {
        self.calls
            .lock()
            .unwrap()
            .push((root.to_path_buf(), npm, bower));
    }
}
