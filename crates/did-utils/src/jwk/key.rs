use serde::{Deserialize, Serialize};

use super::{Bytes, Ec, JwkError, Okp};

/// A key type that can be contained in a JWK.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", tag = "kty")]
#[non_exhaustive]
pub enum Key {
    /// An elliptic-curve key.
    Ec(Ec),

    /// A CFRG-curve key.
    Okp(Okp),
}

impl Key {
    /// Returns the registered `kty` value of this key.
    pub fn kty(&self) -> &'static str {
        match self {
            Key::Ec(_) => "EC",
            Key::Okp(_) => "OKP",
        }
    }

    /// Checks that the public key material matches the lengths its curve requires.
    pub fn validate(&self) -> Result<(), JwkError> {
        match self {
            Key::Ec(ec) => {
                let expected = ec.crv.coordinate_length();
                check_length("x", ec.crv.name(), expected, &ec.x)?;
                check_length("y", ec.crv.name(), expected, &ec.y)
            }
            Key::Okp(okp) => check_length("x", okp.crv.name(), okp.crv.key_length(), &okp.x),
        }
    }
}

fn check_length(param: &'static str, crv: &'static str, expected: usize, value: &Bytes) -> Result<(), JwkError> {
    if value.len() != expected {
        return Err(JwkError::InvalidLength {
            param,
            crv,
            expected,
            actual: value.len(),
        });
    }

    Ok(())
}

impl From<Ec> for Key {
    #[inline(always)]
    fn from(key: Ec) -> Self {
        Self::Ec(key)
    }
}

impl From<Okp> for Key {
    #[inline(always)]
    fn from(key: Okp) -> Self {
        Self::Okp(key)
    }
}
