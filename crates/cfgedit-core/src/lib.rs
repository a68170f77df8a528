//! Editing for cfgedit config files
//!
//! A config file is an optional `#` header followed by `NAME="value"`
//! declarations, each preceded by its own comment lines. Values are stored
//! base64-encoded. This crate parses such files into a [`Document`], edits
//! them, and writes them back deterministically.

pub mod codec;
pub mod document;
pub mod error;
pub mod file;
pub mod grammar;
pub mod io;
pub mod parser;
pub mod serializer;

pub use codec::{DecodeMode, decode, encode};
pub use document::{DEFAULT_HEADER, Document, Occurrence};
pub use error::{Error, Result};
pub use file::ConfigFile;
pub use grammar::validate_name;
