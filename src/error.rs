//! Error types shared across the crate
//!
//! None of these are fatal to the browser itself: filesystem failures are
//! logged and turned into no-ops by the UI, tag failures become empty
//! metadata. Only terminal and logging setup in `main` can abort the program.

use std::io;
use std::path::PathBuf;

/// Errors produced by the filesystem lister and process setup
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
