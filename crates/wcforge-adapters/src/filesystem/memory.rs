//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use wcforge_core::application::ApplicationError;
use wcforge_core::application::ports::Filesystem;
use wcforge_core::error::WcforgeResult;

/// In-memory filesystem for testing.
///
/// Directories exist implicitly: writing `a/b/c.txt` makes `a` and `a/b`
/// visible to `exists`, and `seed_dir` registers an empty directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a file (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: &str) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        register_parents(&mut inner.directories, &path);
        inner.files.insert(path, content.to_string());
    }

    /// Pre-populate an empty directory (testing helper).
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        register_parents(&mut inner.directories, &path);
        inner.directories.insert(path);
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }
}

fn register_parents(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    if let Some(parent) = path.parent() {
        for component in parent.components() {
            current.push(component);
            directories.insert(current.clone());
        }
    }
}

fn lock_error(path: &Path) -> wcforge_core::error::WcforgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn read_to_string(&self, path: &Path) -> WcforgeResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> WcforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        register_parents(&mut inner.directories, path);
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> WcforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        if inner.files.remove(path).is_none() {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into());
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> WcforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_register_parent_directories() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("dest/test/index.html"), "<html>")
            .unwrap();

        assert!(fs.exists(Path::new("dest")));
        assert!(fs.exists(Path::new("dest/test")));
        assert!(fs.exists(Path::new("dest/test/index.html")));
    }

    #[test]
    fn remove_dir_all_drops_files_under_it() {
        let fs = MemoryFilesystem::new();
        fs.seed_file("dest/bower_components/polymer/polymer.html", "x");
        fs.seed_file("dest/index.html", "y");

        fs.remove_dir_all(Path::new("dest/bower_components")).unwrap();
        assert!(!fs.exists(Path::new("dest/bower_components")));
        assert!(fs.exists(Path::new("dest/index.html")));
    }

    #[test]
    fn removing_a_missing_file_is_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_file(Path::new("absent")).is_err());
    }
}
