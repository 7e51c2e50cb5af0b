//! Errors raised while reading a catalog.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to access the input catalog.
///
/// Malformed lines are never reported here; they are skipped during the scan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The catalog file could not be opened.
    #[error("could not open catalog {path:?}: {source}")]
    Open {
        /// Path that was passed in.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an opened catalog failed part way through.
    #[error("could not read catalog: {source}")]
    Read {
        /// Underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
