//! Provides Linked Data models for representing DIDs and related data.

use serde::{ser::SerializeSeq, Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::{snippet, DecodeError};

/// Represents the JSON-LD context.
///
/// The `@context` property defines the vocabulary used in the JSON-LD document.
/// It may be written as a single string or as an array mixing strings and objects;
/// entries are kept in document order.
///
/// A context made of exactly one string is written back as that bare string,
/// every other shape (including an empty context) is written as an array.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct Context(Vec<ContextEntry>);

/// A single `@context` entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContextEntry {
    /// A context URI.
    String(String),
    /// An embedded context definition.
    Map(Map<String, Value>),
    /// Any other JSON value, carried through unchanged.
    Other(Value),
}

/// Classification of a [`ContextEntry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContextKind {
    String,
    Map,
    Other,
}

/// View over one entry, as yielded by [`Context::iter`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContextItem<'a> {
    pub index: usize,
    pub kind: ContextKind,
    pub string: Option<&'a str>,
    pub map: Option<&'a Map<String, Value>>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a `@context` value.
    pub fn decode(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(uri) => Ok(Self(vec![ContextEntry::String(uri)])),
            Value::Array(entries) => Ok(entries.into_iter().map(ContextEntry::from).collect()),
            other => Err(DecodeError::InvalidContext(snippet(&other))),
        }
    }

    /// Encodes the context, collapsing a lone string entry to a bare string.
    pub fn encode(&self) -> Value {
        match self.single_string() {
            Some(uri) => Value::String(uri.to_owned()),
            None => Value::Array(self.0.iter().map(ContextEntry::to_value).collect()),
        }
    }

    /// Iterates over the entries without exposing their representation.
    pub fn iter(&self) -> impl Iterator<Item = ContextItem<'_>> + '_ {
        self.0.iter().enumerate().map(|(index, entry)| match entry {
            ContextEntry::String(uri) => ContextItem {
                index,
                kind: ContextKind::String,
                string: Some(uri),
                map: None,
            },
            ContextEntry::Map(map) => ContextItem {
                index,
                kind: ContextKind::Map,
                string: None,
                map: Some(map),
            },
            ContextEntry::Other(_) => ContextItem {
                index,
                kind: ContextKind::Other,
                string: None,
                map: None,
            },
        })
    }

    pub fn entries(&self) -> &[ContextEntry] {
        &self.0
    }

    pub fn push(&mut self, entry: impl Into<ContextEntry>) {
        self.0.push(entry.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn single_string(&self) -> Option<&str> {
        match self.0.as_slice() {
            [ContextEntry::String(uri)] => Some(uri),
            _ => None,
        }
    }
}

impl ContextEntry {
    fn to_value(&self) -> Value {
        match self {
            ContextEntry::String(uri) => Value::String(uri.clone()),
            ContextEntry::Map(map) => Value::Object(map.clone()),
            ContextEntry::Other(value) => value.clone(),
        }
    }
}

impl From<Value> for ContextEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::String(uri) => ContextEntry::String(uri),
            Value::Object(map) => ContextEntry::Map(map),
            other => ContextEntry::Other(other),
        }
    }
}

impl From<&str> for ContextEntry {
    fn from(uri: &str) -> Self {
        ContextEntry::String(uri.to_owned())
    }
}

impl From<String> for ContextEntry {
    fn from(uri: String) -> Self {
        ContextEntry::String(uri)
    }
}

impl<E: Into<ContextEntry>> FromIterator<E> for Context {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<Value> for Context {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl Serialize for Context {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(uri) = self.single_string() {
            return serializer.serialize_str(uri);
        }

        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for entry in &self.0 {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_string_is_written_as_scalar() {
        let context = Context::decode(json!("https://www.w3.org/ns/did/v1")).unwrap();
        assert_eq!(context.len(), 1);
        assert_eq!(context.encode(), json!("https://www.w3.org/ns/did/v1"));

        // a one-element array is the same context
        let context = Context::decode(json!(["https://www.w3.org/ns/did/v1"])).unwrap();
        assert_eq!(context.encode(), json!("https://www.w3.org/ns/did/v1"));
        assert_eq!(serde_json::to_value(&context).unwrap(), json!("https://www.w3.org/ns/did/v1"));
    }

    #[test]
    fn other_shapes_are_written_as_arrays() {
        assert_eq!(Context::new().encode(), json!([]));

        let mixed = json!(["https://www.w3.org/ns/did/v1", {"@vocab": "https://www.iana.org/assignments/jose#"}]);
        let context = Context::decode(mixed.clone()).unwrap();
        assert_eq!(context.encode(), mixed);
        assert_eq!(serde_json::to_value(&context).unwrap(), mixed);

        let lone_map = json!([{"@vocab": "https://www.iana.org/assignments/jose#"}]);
        assert_eq!(Context::decode(lone_map.clone()).unwrap().encode(), lone_map);
    }

    #[test]
    fn decoding_encoded_context_recovers_entries() {
        let contexts = [
            json!("https://www.w3.org/ns/did/v1"),
            json!(["https://www.w3.org/ns/did/v1", "https://w3id.org/security/suites/jws-2020/v1"]),
            json!([{"@base": "did:example:123"}, "https://www.w3.org/ns/did/v1"]),
        ];

        for raw in contexts {
            let context = Context::decode(raw).unwrap();
            assert_eq!(Context::decode(context.encode()).unwrap(), context);
        }
    }

    #[test]
    fn rejects_non_string_non_array() {
        assert!(matches!(Context::decode(json!(42)), Err(DecodeError::InvalidContext(_))));
        assert!(matches!(Context::decode(json!({"@vocab": "x"})), Err(DecodeError::InvalidContext(_))));
        assert!(serde_json::from_str::<Context>("true").is_err());
    }

    #[test]
    fn iteration_classifies_entries() {
        let context = Context::decode(json!(["https://www.w3.org/ns/did/v1", {"@vocab": "x"}, 7])).unwrap();

        let kinds: Vec<_> = context.iter().map(|item| (item.index, item.kind)).collect();
        assert_eq!(
            kinds,
            vec![(0, ContextKind::String), (1, ContextKind::Map), (2, ContextKind::Other)]
        );

        let first = context.iter().next().unwrap();
        assert_eq!(first.string, Some("https://www.w3.org/ns/did/v1"));
        assert!(first.map.is_none());

        // iteration restarts from the stored entries
        assert_eq!(context.iter().count(), 3);
        assert_eq!(context.iter().filter(|item| item.kind == ContextKind::Map).count(), 1);
    }

    #[test]
    fn unknown_entries_are_carried_through() {
        let raw = json!(["https://www.w3.org/ns/did/v1", 7, null]);
        let context = Context::decode(raw.clone()).unwrap();

        assert_eq!(context.entries()[1], ContextEntry::Other(json!(7)));
        assert_eq!(context.encode(), raw);
    }
}
