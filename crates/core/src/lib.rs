//! JSONC toolkit core library.
//!
//! Provides comment stripping for JSON-with-comments input, a leaf-merge
//! deep update over parsed values, and formatted output with an optional
//! array-packing pass.  The main entry points are [`parse_jsonc`] /
//! [`load_jsonc`] for reading, [`update_leaves`] for merging, and
//! [`write_json`] for output.

#![warn(missing_docs)]

/// Typed error values.
pub mod error;
/// Numeric-component conversion for geometry value types.
#[cfg(feature = "geom")]
pub mod geom;
/// Parsing, loading, and formatted writing of documents.
pub mod io;
/// Leaf-merge deep update over parsed values.
pub mod merge;
/// Array-packing post-pass over serialized text.
pub mod pack;
/// JSONC comment stripping.
pub mod strip;

// ── Convenience re-exports ──────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

pub use error::JsonError;
pub use io::{
    ParseOptions, WriteOptions, load_json, load_jsonc, parse_jsonc, parse_str, to_string_formatted,
    write_json,
};
pub use merge::update_leaves;
pub use pack::pack_arrays;
pub use strip::strip_comments;
