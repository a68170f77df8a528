//! [`Document`] to text

use crate::document::Document;

/// Render a document as file text.
///
/// The header is written verbatim, then every variable in name order. An
/// occurrence with comments is preceded by a blank line and its comment
/// block. If the very first occurrence has no comments, a single blank line
/// separates it from the header instead.
pub fn render(doc: &Document) -> String {
    let mut out = String::with_capacity(doc.header().len() + 64 * doc.variables().len());
    out.push_str(doc.header());

    let first_uncommented = doc
        .variables()
        .values()
        .next()
        .and_then(|occurrences| occurrences.first())
        .is_some_and(|occurrence| occurrence.comments.is_empty());
    if first_uncommented {
        out.push('\n');
    }

    for (name, occurrences) in doc.variables() {
        for occurrence in occurrences {
            if !occurrence.comments.is_empty() {
                out.push('\n');
                out.push_str(&occurrence.comments);
                out.push('\n');
            }
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&occurrence.value);
            out.push_str("\"\n");
        }
    }

    out
}
