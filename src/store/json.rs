//! File-backed store rooted at the modsync home directory

use std::fs;
use std::path::{Path, PathBuf};

use super::{Document, Store};
use crate::error::{Result, fs as fs_err};

/// Stores each document as `<root>/<file name>`
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, document: Document) -> PathBuf {
        self.root.join(document.file_name())
    }
}

impl Store for JsonStore {
    fn read(&self, document: Document) -> Result<Option<String>> {
        let path = self.path_of(document);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| fs_err::read_failed(path.display().to_string(), e.to_string()))
    }

    /// Write through a temp file and rename, so readers never see a partial document
    fn write(&self, document: Document, contents: &str) -> Result<()> {
        let path = self.path_of(document);
        fs::create_dir_all(&self.root)
            .map_err(|e| fs_err::persistence_failed(document.file_name(), e.to_string()))?;

        let tmp_path = self.root.join(format!("{}.tmp", document.file_name()));
        fs::write(&tmp_path, contents)
            .map_err(|e| fs_err::persistence_failed(document.file_name(), e.to_string()))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| fs_err::persistence_failed(document.file_name(), e.to_string()))
    }
}
