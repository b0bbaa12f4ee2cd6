//! Text acquisition for file scanning.
//!
//! The core scanner only ever sees an already-decoded string; this module
//! owns the failure taxonomy for producing one from a named file. Callers
//! report the typed error and degrade to "no expressions found" — a failed
//! read never reaches the core.

use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

/// Why a text source could not be turned into a string.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("file is not valid UTF-8: {path}")]
    Decode { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read and decode a file as UTF-8 text.
pub fn read_text_source(path: &Path) -> Result<String, SourceError> {
    let display = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            SourceError::NotFound { path: display.clone() }
        } else {
            SourceError::Io {
                path: display.clone(),
                source: e,
            }
        }
    })?;

    String::from_utf8(bytes).map_err(|_| SourceError::Decode { path: display })
}
