//! Whole-file load and save

use crate::error::{EditorError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// What a load found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(String),
    /// Nothing at that path yet; saving will create it.
    Missing,
}

/// Read the whole file. A missing file is not an error here.
pub fn load(path: &Path) -> Result<LoadOutcome> {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "loaded file");
            Ok(LoadOutcome::Loaded(content))
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file does not exist yet");
            Ok(LoadOutcome::Missing)
        }
        Err(source) => Err(EditorError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read a file that must exist.
pub fn read_existing(path: &Path) -> Result<String> {
    match load(path)? {
        LoadOutcome::Loaded(content) => Ok(content),
        LoadOutcome::Missing => Err(EditorError::FileNotFound(path.to_path_buf())),
    }
}

/// Replace the file's contents with `content`.
pub fn save(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| EditorError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "saved file");
    Ok(())
}
