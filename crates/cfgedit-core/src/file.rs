//! Whole-file operations on a config file path
//!
//! Every call reads the file fresh, works on an in-memory [`Document`] and,
//! for mutations, rewrites the whole file. Nothing is cached between calls.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::codec::DecodeMode;
use crate::document::{DEFAULT_HEADER, Document};
use crate::grammar::validate_name;
use crate::{Error, Result, io};

/// Handle to a config file on disk.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    decode_mode: DecodeMode,
}

impl ConfigFile {
    /// Create a handle using lenient decoding.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            decode_mode: DecodeMode::default(),
        }
    }

    /// Choose how malformed stored values are handled by queries.
    pub fn with_decode_mode(mut self, decode_mode: DecodeMode) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.decode_mode
    }

    /// Parse the file. A missing file reads as an empty document.
    pub fn load(&self) -> Result<Document> {
        let source = io::read_source(&self.path)?.unwrap_or_default();
        Ok(Document::parse(&source))
    }

    /// Parse the file, failing with [`Error::FileNotFound`] if it is missing.
    pub fn load_existing(&self) -> Result<Document> {
        let source = io::read_source(&self.path)?.ok_or_else(|| Error::FileNotFound {
            path: self.path.clone(),
        })?;
        Ok(Document::parse(&source))
    }

    /// Write a document over the file.
    pub fn save(&self, doc: &Document) -> Result<()> {
        io::write_atomic(&self.path, doc.render().as_bytes())
    }

    /// Create the file holding only the default header.
    pub fn create(&self) -> Result<()> {
        if self.path.exists() {
            return Err(Error::AlreadyExists {
                path: self.path.clone(),
            });
        }
        self.save(&Document::with_header(DEFAULT_HEADER))?;
        tracing::info!(path = %self.path.display(), "created config file");
        Ok(())
    }

    /// Encode `plaintext` and store it under `name`, replacing any previous
    /// value. Comments of the previous occurrences are kept.
    pub fn set_value(&self, name: &str, plaintext: &str) -> Result<()> {
        validate_name(name)?;
        let mut doc = self.load()?;
        doc.set(name, plaintext)?;
        self.save(&doc)?;
        tracing::debug!(variable = name, "set value");
        Ok(())
    }

    /// Store `payload` under `name` without encoding it.
    pub fn set_raw_value(&self, name: &str, payload: &str) -> Result<()> {
        validate_name(name)?;
        let mut doc = self.load()?;
        doc.set_raw(name, payload)?;
        self.save(&doc)
    }

    /// Remove every occurrence of `name` and its comments.
    pub fn remove_variable(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        let mut doc = self.load()?;
        let removed = doc.remove(name)?;
        self.save(&doc)?;
        tracing::debug!(variable = name, occurrences = removed.len(), "removed variable");
        Ok(())
    }

    /// Read this file as plaintext values, encode all of them and write the
    /// result to `out`, or back to this file when `out` is `None`.
    ///
    /// Returns the number of values encoded.
    pub fn encode_into(&self, out: Option<&Path>) -> Result<usize> {
        let mut doc = self.load_existing()?;
        for name in doc.duplicates() {
            tracing::warn!(variable = name, "Multiple declarations found");
        }
        let count = doc.encode_values();
        let target = ConfigFile::new(out.unwrap_or(&self.path));
        target.save(&doc)?;
        tracing::info!(
            from = %self.path.display(),
            to = %target.path.display(),
            values = count,
            "encoded config file"
        );
        Ok(count)
    }

    /// Decoded value of the earliest occurrence of `name`.
    ///
    /// Files are not meant to declare a name twice; when they do, the first
    /// declaration in the file wins.
    pub fn get_value(&self, name: &str) -> Result<String> {
        validate_name(name)?;
        let doc = self.load()?;
        let raw = doc.first_value(name).ok_or_else(|| Error::not_found(name))?;
        self.decode_mode.decode(name, raw)
    }

    /// Decoded values of every occurrence of `name`, in file order.
    pub fn get_values(&self, name: &str) -> Result<Vec<String>> {
        self.get_raw_values(name)?
            .iter()
            .map(|raw| self.decode_mode.decode(name, raw))
            .collect()
    }

    /// Stored payloads of every occurrence of `name`, in file order.
    pub fn get_raw_values(&self, name: &str) -> Result<Vec<String>> {
        validate_name(name)?;
        let doc = self.load()?;
        let occurrences = doc.occurrences(name).ok_or_else(|| Error::not_found(name))?;
        Ok(occurrences.iter().map(|o| o.value.clone()).collect())
    }

    /// Names declared in the file.
    pub fn list_names(&self) -> Result<BTreeSet<String>> {
        Ok(self.load()?.names().map(str::to_string).collect())
    }
}
