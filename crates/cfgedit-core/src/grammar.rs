//! Line grammar shared by the parser, the codec and name validation
//!
//! There is exactly one grammar: quoted values, names matching
//! `[A-Z_][A-Z0-9_]*`, and a header that must be closed by a line made only
//! of `#` characters. All patterns are matched against a single line with its
//! `\n` / `\r\n` terminator already removed.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// First line of a header, e.g. `##### Header #####`
pub static HEADER_START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#+\s*header\s*#+$").unwrap());

/// Header terminator: two or more `#` and nothing else
pub static HEADER_END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{2,}$").unwrap());

/// Any comment line; captures the comment without surrounding whitespace
pub static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(#.*?)\s*$").unwrap());

/// `NAME="value"`; captures the name and the raw payload
pub static DECLARATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*([A-Z_][A-Z0-9_]*)\s*=\s*"(.*)"\s*$"#).unwrap());

/// A whole variable name
pub static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_][A-Z0-9_]*$").unwrap());

/// A payload written in the base64 alphabet with optional padding
pub static ENCODED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+/]*={0,2}$").unwrap());

/// Reject names that cannot be written back as a declaration.
pub fn validate_name(name: &str) -> Result<()> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Strip a trailing `\n` or `\r\n` from a line.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Extract the trimmed comment text from a line, if it is a comment.
pub fn comment_text(line: &str) -> Option<&str> {
    COMMENT_PATTERN
        .captures(strip_line_ending(line))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

/// Split a declaration line into `(name, payload)`.
pub fn declaration(line: &str) -> Option<(&str, &str)> {
    let cap = DECLARATION_PATTERN.captures(strip_line_ending(line))?;
    Some((cap.get(1)?.as_str(), cap.get(2)?.as_str()))
}
