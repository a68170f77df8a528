//! In-memory form of a config file

use std::collections::BTreeMap;

use crate::codec;
use crate::error::{Error, Result};
use crate::grammar::validate_name;
use crate::{parser, serializer};

/// Header written into every newly created file.
pub const DEFAULT_HEADER: &str = "\
##################### Header #####################
# Anything contained in this header will be pre-
# served by cfgedit as long as every line begins
# with a single '#' symbol. A line beginning with
# 2 or more '#' characters and containing nothing
# else will be interpreted as the end of the header.
#
# Comments included anywhere else in the file are
# associated with the variable that immediately
# follows, and may be reformatted to reflect that
# association. If a variable is removed, its
# associated comments will also be removed.
##################################################
";

/// One declaration of a variable together with the comments above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrence {
    /// Comment lines directly above the declaration, trimmed; empty if none
    pub comments: String,
    /// Payload between the quotes, as stored
    pub value: String,
}

impl Occurrence {
    pub fn new(comments: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            comments: comments.into(),
            value: value.into(),
        }
    }
}

/// A parsed config file.
///
/// Variables are kept in a sorted map so rendering is always in name order.
/// A name may carry several occurrences; the parser never discards one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    header: String,
    variables: BTreeMap<String, Vec<Occurrence>>,
}

impl Document {
    /// An empty document with no header and no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty document carrying the given header text.
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            variables: BTreeMap::new(),
        }
    }

    /// Parse file text. Never fails; see [`parser::parse`].
    pub fn parse(source: &str) -> Self {
        parser::parse(source)
    }

    /// Render back to file text; see [`serializer::render`].
    pub fn render(&self) -> String {
        serializer::render(self)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn variables(&self) -> &BTreeMap<String, Vec<Occurrence>> {
        &self.variables
    }

    /// Variable names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn occurrences(&self, name: &str) -> Option<&[Occurrence]> {
        self.variables.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.variables.is_empty()
    }

    /// Stored payload of the earliest occurrence of `name`.
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.variables
            .get(name)
            .and_then(|occurrences| occurrences.first())
            .map(|occurrence| occurrence.value.as_str())
    }

    /// Append an occurrence without validating the name.
    pub(crate) fn push(&mut self, name: &str, occurrence: Occurrence) {
        self.variables
            .entry(name.to_string())
            .or_default()
            .push(occurrence);
    }

    /// Store `plaintext` encoded under `name`, replacing every previous
    /// occurrence. Comments of the replaced occurrences are kept.
    pub fn set(&mut self, name: &str, plaintext: &str) -> Result<()> {
        self.set_raw(name, &codec::encode(plaintext))
    }

    /// Like [`Document::set`] but stores `payload` as-is.
    pub fn set_raw(&mut self, name: &str, payload: &str) -> Result<()> {
        validate_name(name)?;
        if payload.contains(['\n', '\r']) {
            return Err(Error::malformed(payload, "values cannot span lines"));
        }

        let comments = self
            .variables
            .remove(name)
            .unwrap_or_default()
            .into_iter()
            .map(|occurrence| occurrence.comments)
            .filter(|comments| !comments.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        self.variables
            .insert(name.to_string(), vec![Occurrence::new(comments, payload)]);
        Ok(())
    }

    /// Drop every occurrence of `name` along with its comments.
    pub fn remove(&mut self, name: &str) -> Result<Vec<Occurrence>> {
        validate_name(name)?;
        self.variables
            .remove(name)
            .ok_or_else(|| Error::not_found(name))
    }

    /// Base64-encode every stored payload, treating them as plaintext.
    ///
    /// Returns the number of payloads encoded.
    pub fn encode_values(&mut self) -> usize {
        let mut count = 0;
        for occurrence in self.variables.values_mut().flatten() {
            occurrence.value = codec::encode(&occurrence.value);
            count += 1;
        }
        count
    }

    /// Names declared more than once.
    pub fn duplicates(&self) -> impl Iterator<Item = &str> {
        self.variables
            .iter()
            .filter(|(_, occurrences)| occurrences.len() > 1)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_encodes_value() {
        let mut doc = Document::new();
        doc.set("TOKEN", "1").unwrap();
        assert_eq!(doc.first_value("TOKEN"), Some("MQ=="));
    }

    #[test]
    fn test_set_raw_rejects_line_breaks() {
        let mut doc = Document::new();
        let err = doc.set_raw("TOKEN", "a\nb").unwrap_err();
        assert!(matches!(err, Error::MalformedValue { .. }));
        assert!(!doc.contains("TOKEN"));
    }

    #[test]
    fn test_set_merges_comments_of_duplicates() {
        let mut doc = Document::new();
        doc.push("Z", Occurrence::new("# first", "MQ=="));
        doc.push("Z", Occurrence::new("", "Mg=="));
        doc.push("Z", Occurrence::new("# third", "Mw=="));

        doc.set("Z", "4").unwrap();

        let occurrences = doc.occurrences("Z").unwrap();
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].comments, "# first\n# third");
        assert_eq!(occurrences[0].value, "NA==");
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut doc = Document::new();
        assert!(matches!(doc.remove("NOPE"), Err(Error::NotFound { .. })));
        assert!(matches!(doc.remove("nope"), Err(Error::InvalidName { .. })));
    }

    #[test]
    fn test_encode_values_counts_every_occurrence() {
        let mut doc = Document::new();
        doc.push("A", Occurrence::new("", "1"));
        doc.push("A", Occurrence::new("", "2"));
        doc.push("B", Occurrence::new("", ""));

        assert_eq!(doc.encode_values(), 3);
        assert_eq!(doc.occurrences("A").unwrap()[1].value, "Mg==");
        assert_eq!(doc.first_value("B"), Some(""));
        assert_eq!(doc.duplicates().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_default_header_is_a_valid_header() {
        let doc = Document::parse(DEFAULT_HEADER);
        assert_eq!(doc.header(), DEFAULT_HEADER);
        assert!(doc.variables().is_empty());
    }
}
