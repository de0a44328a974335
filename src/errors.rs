use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReadError>;

#[derive(Error, Debug)]
pub enum ReadError {
    /// Rejected before any I/O took place.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Resource {} is unavailable: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to allocate {requested} bytes: {source}")]
    AllocationFailure {
        /// Total size asked for, terminator slot included.
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("Transfer failed after {transferred} bytes: {source}")]
    TransferFailure {
        /// Bytes received from the source before it failed.
        transferred: usize,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub(crate) fn unavailable(
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }
}
