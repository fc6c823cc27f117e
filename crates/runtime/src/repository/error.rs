//! Error types raised by the repository layer.

use std::path::PathBuf;

use thiserror::Error;

use chronicle_core::DecodeError;

/// Errors surfaced by chronicle persistence.
///
/// Every variant is recoverable by the caller; nothing here is fatal to
/// the process.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("chronicle not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read chronicle: {0}")]
    Read(std::io::Error),

    #[error("failed to write chronicle: {0}")]
    Write(std::io::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
