//! Error taxonomy shared by the core and the terminal front end

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{0}' not found")]
    SearchNoMatch(String),

    #[error("Viewport geometry is not available yet")]
    GeometryUnavailable,
}

pub type Result<T> = std::result::Result<T, EditorError>;
