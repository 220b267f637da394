use thiserror::Error;

use crate::jwk::JwkError;

/// Errors raised while decoding a DID document or one of its parts.
///
/// Decoding is fail-fast: the first error aborts the whole document.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// The `@context` member is neither a string nor an array.
    #[error("invalid @context format: {0}")]
    InvalidContext(String),
    /// A verification relationship entry is neither an identified object nor a string.
    #[error("verification entry is neither a string nor a verification method: {raw_snippet}")]
    UnrecognizedEntry { raw_snippet: String },
    /// Embedded key material was rejected by the key codec.
    #[error("failed to parse publicKeyJwk: {0}")]
    InvalidKeyMaterial(#[from] JwkError),
    /// The document does not have the required shape.
    #[error("invalid DID document: {0}")]
    InvalidDocument(String),
}

const SNIPPET_MAX_CHARS: usize = 128;

/// Shortened rendering of a JSON value for error messages.
pub(crate) fn snippet(value: &serde_json::Value) -> String {
    let raw = value.to_string();
    match raw.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", &raw[..cut]),
        None => raw,
    }
}
