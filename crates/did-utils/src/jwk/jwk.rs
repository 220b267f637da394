use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{JwkError, Key, Parameters};

/// A JSON Web Key.
///
/// This type is defined in [RFC7517 Section 4].
///
/// [RFC7517 Section 4]: https://datatracker.ietf.org/doc/html/rfc7517#section-4
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// The key material.
    #[serde(flatten)]
    pub key: Key,

    /// The key parameters.
    #[serde(flatten)]
    pub prm: Parameters,
}

impl Jwk {
    /// Parses a single JSON Web Key from its JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, JwkError> {
        let jwk: Jwk = serde_json::from_slice(bytes)?;
        jwk.key.validate()?;
        Ok(jwk)
    }

    /// Parses a single JSON Web Key from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, JwkError> {
        let jwk: Jwk = serde_json::from_value(value)?;
        jwk.key.validate()?;
        Ok(jwk)
    }

    /// Serializes the key to its JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, JwkError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Returns the `kid` parameter, if any.
    pub fn key_id(&self) -> Option<&str> {
        self.prm.kid.as_deref()
    }

    /// Returns this key tagged with the given `kid`.
    pub fn with_key_id(mut self, kid: impl Into<String>) -> Self {
        self.prm.kid = Some(kid.into());
        self
    }
}

/// A set of JSON Web Keys.
///
/// This type is defined in [RFC7517 Section 5].
///
/// [RFC7517 Section 5]: https://datatracker.ietf.org/doc/html/rfc7517#section-5
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwkSet {
    /// The keys in the set.
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses either a `{"keys": [...]}` set or a lone key, which yields a set of one.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, JwkError> {
        let value: Value = serde_json::from_slice(bytes)?;

        let keys = match value {
            Value::Object(mut map) if map.contains_key("keys") && !map.contains_key("kty") => {
                let entries: Vec<Value> = serde_json::from_value(map.remove("keys").unwrap_or_default())?;
                entries.into_iter().map(Jwk::from_value).collect::<Result<Vec<_>, _>>()?
            }
            value => vec![Jwk::from_value(value)?],
        };

        Ok(Self { keys })
    }

    /// Adds a key to the set.
    pub fn add_key(&mut self, key: Jwk) {
        self.keys.push(key);
    }

    /// Looks a key up by its `kid`.
    pub fn get(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.key_id() == Some(kid))
    }

    /// Returns the first key of the set.
    pub fn first(&self) -> Option<&Jwk> {
        self.keys.first()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Jwk> {
        self.keys.iter()
    }
}

impl<'a> IntoIterator for &'a JwkSet {
    type Item = &'a Jwk;
    type IntoIter = std::slice::Iter<'a, Jwk>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwk::{EcCurves, OkpCurves};

    const ED25519_JWK: &str = r#"{
        "kty": "OKP",
        "crv": "Ed25519",
        "x": "VCpo2LMLhn6iWku8MKvSLg2ZAoC-nlOyPVQaO3FxVeQ",
        "kid": "_Qq0UL2Fq651Q0Fjd6TvnYE-faHiOpRlPVQcY_-tA4A"
    }"#;

    const P256_JWK: &str = r#"{
        "kty": "EC",
        "crv": "P-256",
        "x": "o1nDLbagUJXe6NF657N3rM2J4SHNnIq9QZBxhywxauc",
        "y": "2Kwg0I7m7xqJ-S3h8CKXPZ6cDCRJmbSbUXBeJvyn7aQ"
    }"#;

    #[test]
    fn parses_okp_key() {
        let jwk = Jwk::from_slice(ED25519_JWK.as_bytes()).unwrap();

        let Key::Okp(okp) = &jwk.key else {
            panic!("expected an OKP key");
        };
        assert_eq!(okp.crv, OkpCurves::Ed25519);
        assert_eq!(okp.x.len(), 32);
        assert_eq!(jwk.key_id(), Some("_Qq0UL2Fq651Q0Fjd6TvnYE-faHiOpRlPVQcY_-tA4A"));
    }

    #[test]
    fn parses_ec_key() {
        let jwk = Jwk::from_slice(P256_JWK.as_bytes()).unwrap();

        let Key::Ec(ec) = &jwk.key else {
            panic!("expected an EC key");
        };
        assert_eq!(ec.crv, EcCurves::P256);
        assert!(ec.d.is_none());
        assert!(jwk.key_id().is_none());
    }

    #[test]
    fn serializes_back_to_the_same_members() {
        let jwk = Jwk::from_slice(P256_JWK.as_bytes()).unwrap();
        let value: Value = serde_json::from_slice(&jwk.to_vec().unwrap()).unwrap();
        let expected: Value = serde_json::from_str(P256_JWK).unwrap();

        assert_eq!(json_canon::to_string(&value).unwrap(), json_canon::to_string(&expected).unwrap());
    }

    #[test]
    fn rejects_unsupported_or_broken_keys() {
        // RSA is not supported
        assert!(Jwk::from_slice(br#"{"kty":"RSA","n":"AQAB","e":"AQAB"}"#).is_err());
        // missing y coordinate
        assert!(Jwk::from_slice(br#"{"kty":"EC","crv":"P-256","x":"o1nDLbagUJXe6NF657N3rM2J4SHNnIq9QZBxhywxauc"}"#).is_err());
        // unknown curve
        assert!(Jwk::from_slice(br#"{"kty":"OKP","crv":"Curve9","x":"AAAA"}"#).is_err());
        assert!(Jwk::from_slice(b"null").is_err());
    }

    #[test]
    fn rejects_wrong_key_length() {
        let err = Jwk::from_slice(br#"{"kty":"OKP","crv":"Ed25519","x":"AAAA"}"#).unwrap_err();
        assert!(matches!(
            err,
            JwkError::InvalidLength {
                param: "x",
                expected: 32,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn tags_key_with_identifier() {
        let jwk = Jwk::from_slice(P256_JWK.as_bytes()).unwrap().with_key_id("did:example:123#key-1");
        let reparsed = Jwk::from_slice(&jwk.to_vec().unwrap()).unwrap();

        assert_eq!(reparsed.key_id(), Some("did:example:123#key-1"));
    }

    #[test]
    fn parses_lone_key_as_set_of_one() {
        let set = JwkSet::from_slice(ED25519_JWK.as_bytes()).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get("_Qq0UL2Fq651Q0Fjd6TvnYE-faHiOpRlPVQcY_-tA4A").is_some());
    }

    #[test]
    fn parses_key_set() {
        let raw = format!(r#"{{"keys": [{ED25519_JWK}, {P256_JWK}]}}"#);
        let set = JwkSet::from_slice(raw.as_bytes()).unwrap();
        assert_eq!(set.len(), 2);

        let empty = JwkSet::from_slice(br#"{"keys": []}"#).unwrap();
        assert!(empty.is_empty());
    }
}
