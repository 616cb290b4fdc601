use crate::error::{MirrorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Persistence capability used by the crawler. Paths are relative to the store's root.
pub trait Persist {
    fn ensure_dir(&self, path: &Path) -> Result<()>;
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

/// Writes documents under a root directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Persist for FsStore {
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        let full = self.root.join(path);
        fs::create_dir_all(&full).map_err(|source| MirrorError::IoError { path: full, source })
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let full = self.root.join(path);
        fs::write(&full, contents).map_err(|source| MirrorError::IoError { path: full, source })
    }
}
