//! Scratch files for tests.

use std::path::{Path, PathBuf};

/// A file under the system temp dir, removed on drop.
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    pub fn with_contents(contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("shopfront-{}.csv", uuid::Uuid::now_v7()));
        std::fs::write(&path, contents).expect("write temp file");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
