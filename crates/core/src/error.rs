//! Typed error values for the toolkit.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced when parsing, loading, writing, or converting JSON
/// documents.
///
/// Comment stripping itself never fails; malformed comment syntax degrades
/// gracefully and any resulting damage surfaces here as a [`Parse`] error
/// from the downstream parser.
///
/// [`Parse`]: JsonError::Parse
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum JsonError {
    /// The text was not valid JSON (after comment stripping, if enabled).
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading a document from disk failed.
    #[error("reading {}: {source}", path.display())]
    Read {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Writing a document to disk failed.
    #[error("writing {}: {source}", path.display())]
    Write {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// A component array had the wrong number of elements.
    #[error("expected {expected} numeric components, found {found}")]
    ComponentCount {
        /// The component count required by the target type.
        expected: usize,
        /// The number of elements actually present.
        found: usize,
    },

    /// A value other than an array of numbers was supplied for component
    /// conversion.
    #[error("expected an array of numbers, found {0}")]
    NotComponents(&'static str),
}
