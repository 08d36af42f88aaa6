//! File export and import.

use thiserror::Error;

#[cfg(feature = "stl-io")]
pub mod stl;

/// Export or import failure.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("input is malformed: {0}")]
    MalformedInput(String),
}
