use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{didcore::Document, errors::DecodeError};

/// Body returned by a universal resolver for a resolved identifier.
///
/// Only the nested document is read. Resolution and document metadata are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionEnvelope {
    #[serde(default)]
    pub did_document: Option<Value>,
}

impl ResolutionEnvelope {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decodes the nested DID document. A missing or null document is an error.
    pub fn into_document(self) -> Result<Document, DecodeError> {
        match self.did_document {
            Some(document) => Document::decode(document),
            None => Err(DecodeError::InvalidDocument("resolution result has no didDocument".to_string())),
        }
    }
}
