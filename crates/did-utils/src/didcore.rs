use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{
    errors::{snippet, DecodeError},
    jwk::{Jwk, JwkSet},
    ldmodel::Context,
};

/// Verification method type whose keys are returned by [`Document::extract_public_keys`].
pub const JSON_WEB_KEY_2020: &str = "JsonWebKey2020";

// === Structure of a did document ===

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Document {
    // The @context property defines the vocabulary used in the JSON-LD document.
    // It is either a single URI or an ordered list of URIs and embedded definitions.
    #[serde(rename = "@context", skip_serializing_if = "Context::is_empty")]
    pub context: Context,

    // === Identifier ===

    // Identifier property is mandatory in a did document and never empty.
    // see https://www.w3.org/TR/did-core/#dfn-id
    pub id: String,

    // See https://www.w3.org/TR/did-core/#dfn-controller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,

    // === Verification Methods ===
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub verification_method: Vec<VerificationEntry>,

    // === Verification Relationships ===
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authentication: Vec<VerificationEntry>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assertion_method: Vec<VerificationEntry>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_agreement: Vec<VerificationEntry>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capability_invocation: Vec<VerificationEntry>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capability_delegation: Vec<VerificationEntry>,

    // === Dynamic Properties ===
    // Members this model does not know about (e.g. `service`), written back as found.
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, Value>,
}

// See https://www.w3.org/TR/did-core/#verification-methods
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct VerificationMethod {
    #[serde(rename = "@context", skip_serializing_if = "Context::is_empty")]
    pub context: Context,

    pub id: String,

    #[serde(rename = "type")]
    pub key_type: String,

    pub controller: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_jwk: Option<Jwk>,

    // === Additional properties ===
    // Other verification material (`publicKeyMultibase`, ...) is kept verbatim.
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, Value>,
}

/// An element of `verificationMethod` or of a verification relationship.
///
/// See https://www.w3.org/TR/did-core/#referring-to-verification-methods
#[derive(Deserialize, PartialEq, Debug, Clone)]
#[serde(try_from = "Value")]
pub enum VerificationEntry {
    /// A verification method embedded in place.
    Key(Box<VerificationMethod>),
    /// A DID URL pointing to a method defined elsewhere. Not dereferenced here.
    Reference(String),
}

impl Document {
    /// Parses a DID document from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Self::decode(serde_json::from_str(json)?)
    }

    /// Parses a DID document from its JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode(serde_json::from_slice(bytes)?)
    }

    /// Decodes a DID document from a JSON value.
    ///
    /// The first malformed member aborts decoding; no partial document is returned.
    pub fn decode(value: Value) -> Result<Self, DecodeError> {
        let mut members = match value {
            Value::Object(members) => members,
            other => {
                return Err(DecodeError::InvalidDocument(format!(
                    "expected a JSON object, found {}",
                    snippet(&other)
                )))
            }
        };

        let id = match take_string(&mut members, "id")? {
            Some(id) if !id.is_empty() => id,
            _ => return Err(DecodeError::InvalidDocument("missing or empty `id`".to_string())),
        };

        let context = match members.remove("@context") {
            None | Some(Value::Null) => Context::new(),
            Some(value) => Context::decode(value)?,
        };

        let controller = take_string(&mut members, "controller")?.filter(|controller| !controller.is_empty());

        Ok(Self {
            context,
            id,
            controller,
            verification_method: take_entries(&mut members, "verificationMethod")?,
            authentication: take_entries(&mut members, "authentication")?,
            assertion_method: take_entries(&mut members, "assertionMethod")?,
            key_agreement: take_entries(&mut members, "keyAgreement")?,
            capability_invocation: take_entries(&mut members, "capabilityInvocation")?,
            capability_delegation: take_entries(&mut members, "capabilityDelegation")?,
            additional_properties: members.into_iter().collect(),
        })
    }

    /// Encodes the document back to JSON, leaving out empty relationships and controller.
    pub fn encode(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Collects the embedded public keys of every `JsonWebKey2020` verification method.
    ///
    /// Each key is re-validated through the key codec and tagged with its method `id`
    /// as `kid`. Methods whose key fails validation are skipped.
    pub fn extract_public_keys(&self) -> JwkSet {
        let mut keys = JwkSet::new();

        for method in self.verification_method.iter().filter_map(VerificationEntry::as_key) {
            if method.key_type != JSON_WEB_KEY_2020 {
                continue;
            }

            let Some(jwk) = &method.public_key_jwk else {
                tracing::warn!("{} has no publicKeyJwk", method.id);
                continue;
            };

            match jwk.to_vec().and_then(|bytes| Jwk::from_slice(&bytes)) {
                Ok(key) => keys.add_key(key.with_key_id(&method.id)),
                Err(err) => tracing::warn!("{} is not a valid JWK: {err}", method.id),
            }
        }

        keys
    }
}

impl VerificationMethod {
    /// Decodes a verification method, parsing `publicKeyJwk` through the key codec.
    ///
    /// Missing `id`, `type` or `controller` decode as empty strings; callers that need
    /// an identified method check `id` themselves.
    pub fn decode(value: Value) -> Result<Self, DecodeError> {
        let mut members = match value {
            Value::Object(members) => members,
            other => {
                return Err(DecodeError::InvalidDocument(format!(
                    "verification method must be an object, found {}",
                    snippet(&other)
                )))
            }
        };

        let context = match members.remove("@context") {
            None | Some(Value::Null) => Context::new(),
            Some(value) => Context::decode(value)?,
        };

        let public_key_jwk = match members.remove("publicKeyJwk") {
            None | Some(Value::Null) => None,
            Some(value) => Some(Jwk::from_value(value)?),
        };

        Ok(Self {
            context,
            id: take_string(&mut members, "id")?.unwrap_or_default(),
            key_type: take_string(&mut members, "type")?.unwrap_or_default(),
            controller: take_string(&mut members, "controller")?.unwrap_or_default(),
            public_key_jwk,
            additional_properties: members.into_iter().collect(),
        })
    }
}

impl VerificationEntry {
    /// Decodes an entry, trying the embedded-method shape before the reference shape.
    ///
    /// An object is only taken as a method when it carries a non-empty `id`.
    pub fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(_) => {
                let raw_snippet = snippet(&value);
                match VerificationMethod::decode(value) {
                    Ok(method) if !method.id.is_empty() => Ok(Self::Key(Box::new(method))),
                    Err(err @ DecodeError::InvalidKeyMaterial(_)) => Err(err),
                    _ => Err(DecodeError::UnrecognizedEntry { raw_snippet }),
                }
            }
            Value::String(reference) => Ok(Self::Reference(reference)),
            other => Err(DecodeError::UnrecognizedEntry {
                raw_snippet: snippet(&other),
            }),
        }
    }

    /// Returns the embedded method, if any.
    pub fn as_key(&self) -> Option<&VerificationMethod> {
        match self {
            Self::Key(method) => Some(method),
            Self::Reference(_) => None,
        }
    }

    /// Returns the referenced DID URL, if any.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Key(_) => None,
            Self::Reference(reference) => Some(reference),
        }
    }
}

impl Serialize for VerificationEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Key(method) => method.serialize(serializer),
            Self::Reference(reference) => serializer.serialize_str(reference),
        }
    }
}

impl From<VerificationMethod> for VerificationEntry {
    fn from(method: VerificationMethod) -> Self {
        Self::Key(Box::new(method))
    }
}

impl TryFrom<Value> for Document {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl TryFrom<Value> for VerificationMethod {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl TryFrom<Value> for VerificationEntry {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

fn take_string(members: &mut Map<String, Value>, name: &str) -> Result<Option<String>, DecodeError> {
    match members.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(DecodeError::InvalidDocument(format!(
            "`{name}` must be a string, found {}",
            snippet(&other)
        ))),
    }
}

fn take_entries(members: &mut Map<String, Value>, name: &str) -> Result<Vec<VerificationEntry>, DecodeError> {
    match members.remove(name) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(entries)) => entries.into_iter().map(VerificationEntry::decode).collect(),
        Some(other) => Err(DecodeError::InvalidDocument(format!(
            "`{name}` must be an array, found {}",
            snippet(&other)
        ))),
    }
}
