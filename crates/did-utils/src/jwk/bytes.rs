use std::fmt;
use std::ops::Deref;

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

/// A byte sequence carried in JSON as an unpadded base64url string.
///
/// See [RFC7515 Section 2](https://datatracker.ietf.org/doc/html/rfc7515#section-2).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub(crate) Vec<u8>);

impl Bytes {
    /// Returns the raw bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the base64url (unpadded) form of the bytes.
    pub fn to_base64url(&self) -> String {
        Base64UrlUnpadded::encode_string(&self.0)
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bytes").field(&self.to_base64url()).finish()
    }
}

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64url())
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        Base64UrlUnpadded::decode_vec(&encoded)
            .map(Self)
            .map_err(|err| D::Error::custom(format!("invalid base64url value: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unpadded_base64url() {
        let bytes: Bytes = serde_json::from_str(r#""VCpo2LMLhn6iWku8MKvSLg2ZAoC-nlOyPVQaO3FxVeQ""#).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(
            serde_json::to_string(&bytes).unwrap(),
            r#""VCpo2LMLhn6iWku8MKvSLg2ZAoC-nlOyPVQaO3FxVeQ""#
        );
    }

    #[test]
    fn rejects_standard_base64_alphabet() {
        assert!(serde_json::from_str::<Bytes>(r#""ab+/""#).is_err());
        assert!(serde_json::from_str::<Bytes>("42").is_err());
    }
}
