//! Error types for the extraction engine
//!
//! The original tool collapsed every failure into a `(0, 0)` result that was
//! indistinguishable from an empty-but-successful run. Extraction here returns
//! a proper error enum instead; the CLI layer maps each variant back to the
//! human-readable messages operators expect.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a single extraction run. No variant is retried.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source file does not exist.
    #[error("source file {path:?} was not found")]
    SourceNotFound { path: PathBuf },

    /// The source file exists but could not be read (permissions, OS error).
    #[error("failed to read source file {path:?}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written. A partially written
    /// file may be left behind; that is accepted, not cleaned up.
    #[error("failed to write output file {path:?}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every numbered output slot is already taken. Raised before any read
    /// or write is attempted.
    #[error("all output slots {base}_00.txt through {base}_{max_number:02}.txt are taken")]
    NoFreeSlot { base: String, max_number: u32 },
}

impl ExtractError {
    /// Classify a read-phase I/O error against the path it occurred on.
    pub fn from_read_error(path: &std::path::Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::SourceNotFound {
                path: path.to_path_buf(),
            },
            _ => Self::SourceUnreadable {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Wrap a write-phase I/O error against the output path.
    pub fn from_write_error(path: &std::path::Path, err: io::Error) -> Self {
        Self::OutputUnwritable {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
