use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::Bytes;

/// Private key material.
///
/// Behaves like [`Bytes`] on the wire, but is wiped from memory on drop
/// and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(Bytes);

impl Secret {
    /// Returns the raw secret bytes.
    pub fn expose(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<Vec<u8>> for Secret {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes(bytes))
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0 .0.zeroize();
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

#[cfg(test)]
mod tests {
    use crate::jwk::{Jwk, Key};

    // RFC 8037 Appendix A.1
    const ED25519_PRIVATE_JWK: &str = r#"{
        "kty": "OKP",
        "crv": "Ed25519",
        "d": "nWGxne_9WmC6hEr0kuwsxERJxWl7MmkZcDusAxyuf2A",
        "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo"
    }"#;

    #[test]
    fn private_key_is_exposed_but_not_printed() {
        let jwk = Jwk::from_slice(ED25519_PRIVATE_JWK.as_bytes()).unwrap();
        let Key::Okp(okp) = &jwk.key else {
            panic!("expected an OKP key");
        };

        let secret = okp.d.as_ref().unwrap();
        assert_eq!(secret.expose().len(), 32);
        assert_eq!(secret.expose()[0], 0x9d);
        assert_eq!(format!("{secret:?}"), "Secret(***)");
        assert!(!format!("{jwk:?}").contains("nWGxne"));
    }
}
