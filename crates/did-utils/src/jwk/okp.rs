use serde::{Deserialize, Serialize};

use super::{Bytes, Secret};

/// A CFRG-curve key (Octet Key Pair), as defined in
/// [RFC8037](https://datatracker.ietf.org/doc/html/rfc8037).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Okp {
    /// The CFRG curve.
    pub crv: OkpCurves,

    /// The public key.
    pub x: Bytes,

    /// The private key.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<Secret>,
}

/// The CFRG curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OkpCurves {
    /// Ed25519 signature algorithm key pairs
    Ed25519,

    /// Ed448 signature algorithm key pairs
    Ed448,

    /// X25519 function key pairs
    X25519,

    /// X448 function key pairs
    X448,
}

impl OkpCurves {
    /// Registered curve name, as it appears in the `crv` member.
    pub fn name(&self) -> &'static str {
        match self {
            OkpCurves::Ed25519 => "Ed25519",
            OkpCurves::Ed448 => "Ed448",
            OkpCurves::X25519 => "X25519",
            OkpCurves::X448 => "X448",
        }
    }

    /// Length in bytes of the public key.
    pub fn key_length(&self) -> usize {
        match self {
            OkpCurves::Ed25519 | OkpCurves::X25519 => 32,
            OkpCurves::Ed448 => 57,
            OkpCurves::X448 => 56,
        }
    }
}
