//! Parsing, loading, and formatted writing of JSON/JSONC documents.
//!
//! The parse path optionally runs the comment stripper before handing the
//! text to `serde_json`; the write path serializes with configurable
//! indentation and applies the ensure-ascii and array-packing post-passes.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::error::JsonError;
use crate::pack::pack_arrays;
use crate::strip::strip_comments;

// ── Options ─────────────────────────────────────────────────────────────

/// Configuration for [`parse_str`] and [`load_json`].
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Strip `//` and `/* */` comments before parsing.
    pub strip_comments: bool,
    /// Replace stripped comments with spaces instead of deleting them, so
    /// parse-error positions stay aligned with the original source. Only
    /// meaningful when `strip_comments` is set.
    pub keep_whitespace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strip_comments: false,
            keep_whitespace: true,
        }
    }
}

impl ParseOptions {
    /// Options for JSONC input: strip comments, preserving positions.
    #[must_use]
    pub fn jsonc() -> Self {
        Self {
            strip_comments: true,
            keep_whitespace: true,
        }
    }
}

/// Configuration for [`to_string_formatted`] and [`write_json`].
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Pretty-print with this many `indent_char`s per nesting level;
    /// `None` produces compact single-line output.
    pub indent: Option<usize>,
    /// The indentation character (space or tab).
    pub indent_char: char,
    /// Collapse multi-line arrays onto one line after serialization; pairs
    /// with tab indentation (see [`pack_arrays`]).
    pub pack_arrays: bool,
    /// Escape every non-ASCII character as `\uXXXX` (surrogate pairs above
    /// the Basic Multilingual Plane).
    pub ensure_ascii: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: None,
            indent_char: ' ',
            pack_arrays: false,
            ensure_ascii: false,
        }
    }
}

// ── Parsing ─────────────────────────────────────────────────────────────

/// Parse a JSON document from a string, optionally stripping comments first.
pub fn parse_str(input: &str, options: &ParseOptions) -> Result<Value, JsonError> {
    let text = if options.strip_comments {
        Cow::Owned(strip_comments(input, options.keep_whitespace))
    } else {
        Cow::Borrowed(input)
    };
    Ok(serde_json::from_str(&text)?)
}

/// Parse a JSONC string: strip comments (space-filling them, so error
/// positions stay aligned), then parse.
pub fn parse_jsonc(input: &str) -> Result<Value, JsonError> {
    parse_str(input, &ParseOptions::jsonc())
}

/// Load a JSON document from a file.
pub fn load_json<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Value, JsonError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| JsonError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&text, options)
}

/// Load a JSONC document from a file, stripping comments before parsing.
pub fn load_jsonc<P: AsRef<Path>>(path: P) -> Result<Value, JsonError> {
    load_json(path, &ParseOptions::jsonc())
}

// ── Writing ─────────────────────────────────────────────────────────────

/// Serialize a value to text according to `options`.
#[must_use]
pub fn to_string_formatted(value: &Value, options: &WriteOptions) -> String {
    let mut text = match options.indent {
        None => serde_json::to_string(value).expect("Value serialization cannot fail"),
        Some(width) => {
            let indent: String = std::iter::repeat(options.indent_char).take(width).collect();
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut buf = Vec::new();
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            value
                .serialize(&mut ser)
                .expect("Value serialization cannot fail");
            String::from_utf8(buf).expect("serialized JSON is valid UTF-8")
        }
    };

    if options.ensure_ascii {
        text = escape_non_ascii(&text);
    }
    if options.pack_arrays {
        text = pack_arrays(&text);
    }
    text
}

/// Serialize a value and write it to a file, creating parent directories as
/// needed.
pub fn write_json<P: AsRef<Path>>(
    path: P,
    value: &Value,
    options: &WriteOptions,
) -> Result<(), JsonError> {
    let path = path.as_ref();
    let text = to_string_formatted(value, options);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| JsonError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, text).map_err(|source| JsonError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Escape every non-ASCII scalar as `\uXXXX` UTF-16 units. Serialized JSON
/// carries non-ASCII only inside string literals, so a blanket pass over the
/// text is safe.
fn escape_non_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            let mut units = [0u16; 2];
            for &unit in ch.encode_utf16(&mut units).iter() {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}
