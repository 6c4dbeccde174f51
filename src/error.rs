//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, ShiftcryptError>`](ShiftcryptError).
//!
//! None of these errors is fatal to the process: every failure ends the single
//! operation that raised it and leaves the caller free to start another one.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for all shiftcrypt operations.
#[derive(Error, Debug)]
pub enum ShiftcryptError {
    /// The input file could not be opened or read.
    ///
    /// Raised when the path does not exist, is a directory, or is not
    /// readable. No output file is created when this happens.
    #[error("failed to open {} for reading: {source}", path.display())]
    OpenForRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or truncated.
    ///
    /// The input file is left untouched.
    #[error("failed to open {} for writing: {source}", path.display())]
    OpenForWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or syncing the output failed after it was opened (disk full,
    /// device error). The partial output file is removed.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A decode was requested for a file whose name does not end with the
    /// marker suffix, so no output name can be derived from it.
    #[error("{} does not end with `{suffix}`; cannot derive a decoded file name", path.display())]
    MissingSuffix { path: PathBuf, suffix: String },

    /// Runner configuration was rejected by [`RunnerBuilder::build`](crate::builders::RunnerBuilder::build).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The progress observer asked the run to stop. Nothing was written.
    #[error("operation on {} was cancelled", path.display())]
    Cancelled { path: PathBuf },

    /// I/O error from the streaming API, where no file path is known.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ShiftcryptError {
    /// Path the failure relates to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::OpenForRead { path, .. }
            | Self::OpenForWrite { path, .. }
            | Self::WriteFailure { path, .. }
            | Self::MissingSuffix { path, .. }
            | Self::Cancelled { path } => Some(path.as_path()),
            Self::InvalidConfig(_) | Self::Io(_) => None,
        }
    }
}
