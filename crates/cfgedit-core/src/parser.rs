//! Text to [`Document`]
//!
//! Parsing is lossy by policy: blank lines and lines that are neither a
//! comment nor a declaration are dropped and do not survive a rewrite. A
//! comment block that is not followed by a declaration is dropped as well.

use crate::document::{Document, Occurrence};
use crate::grammar::{self, HEADER_END_PATTERN, HEADER_START_PATTERN};

/// Parse file text into a [`Document`].
///
/// A header is only recognised when it is terminated. If the header-start
/// line is followed by a non-comment line, or the input ends, before a
/// terminator is seen, the whole input is parsed as ordinary content and
/// the would-be header lines become comments of the first declaration.
pub fn parse(source: &str) -> Document {
    let lines: Vec<&str> = source.split_inclusive('\n').collect();

    let (header, body_start) = match scan_header(&lines) {
        Some((header, consumed)) => (header, consumed),
        None => (String::new(), 0),
    };

    let mut doc = Document::with_header(header);
    let mut comment_buffer = String::new();

    for line in &lines[body_start..] {
        if let Some((name, value)) = grammar::declaration(line) {
            doc.push(name, Occurrence::new(comment_buffer.trim(), value));
            comment_buffer.clear();
        } else if grammar::comment_text(line).is_some() {
            comment_buffer.push_str(line);
            if !line.ends_with('\n') {
                comment_buffer.push('\n');
            }
        } else {
            tracing::trace!(line = grammar::strip_line_ending(line), "dropping unparsed line");
        }
    }

    if !comment_buffer.trim().is_empty() {
        tracing::debug!("dropping trailing comments with no declaration");
    }

    doc
}

/// Returns the header text and the number of lines it spans.
fn scan_header(lines: &[&str]) -> Option<(String, usize)> {
    let first = grammar::strip_line_ending(lines.first()?);
    if !HEADER_START_PATTERN.is_match(first) {
        return None;
    }

    let mut header = format!("{first}\n");
    for (idx, line) in lines.iter().enumerate().skip(1) {
        let Some(text) = grammar::comment_text(line) else {
            tracing::debug!(line = idx + 1, "header interrupted before its terminator");
            return None;
        };
        header.push_str(text);
        header.push('\n');
        if HEADER_END_PATTERN.is_match(text) {
            return Some((header, idx + 1));
        }
    }

    tracing::debug!("header has no terminator");
    None
}
