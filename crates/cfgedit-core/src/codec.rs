//! Base64 obfuscation of stored values
//!
//! Values are obfuscated, not encrypted: anyone with the file can decode them.

use base64::{Engine as _, engine::general_purpose};

use crate::error::{Error, Result};
use crate::grammar::ENCODED_PATTERN;

/// Encode a plaintext payload for storage.
pub fn encode(plaintext: &str) -> String {
    general_purpose::STANDARD.encode(plaintext.as_bytes())
}

/// Decode a stored payload back to plaintext.
///
/// Fails with [`Error::MalformedValue`] when the payload is outside the
/// base64 alphabet, has bad padding, or does not decode to UTF-8.
pub fn decode(encoded: &str) -> Result<String> {
    if !ENCODED_PATTERN.is_match(encoded) {
        return Err(Error::malformed(encoded, "not a base64 payload"));
    }
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| Error::malformed(encoded, e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| Error::malformed(encoded, "decoded bytes are not UTF-8"))
}

/// How query operations treat values that fail to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Log a warning and return the stored payload unchanged.
    #[default]
    Lenient,
    /// Propagate [`Error::MalformedValue`].
    Strict,
}

impl DecodeMode {
    /// Decode the payload stored under `name` according to this mode.
    pub fn decode(self, name: &str, encoded: &str) -> Result<String> {
        match (self, decode(encoded)) {
            (_, Ok(plaintext)) => Ok(plaintext),
            (Self::Strict, Err(e)) => Err(e),
            (Self::Lenient, Err(e)) => {
                tracing::warn!(variable = name, error = %e, "Unencoded value found in config");
                Ok(encoded.to_string())
            }
        }
    }
}
