use serde::{Deserialize, Serialize};

use super::{Bytes, Secret};

/// An elliptic-curve key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ec {
    /// The elliptic curve identifier.
    pub crv: EcCurves,

    /// The public x coordinate.
    pub x: Bytes,

    /// The public y coordinate.
    pub y: Bytes,

    /// The private key.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<Secret>,
}

/// The elliptic curve.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EcCurves {
    /// P-256
    #[serde(rename = "P-256")]
    P256,

    /// P-384
    #[serde(rename = "P-384")]
    P384,

    /// P-521
    #[serde(rename = "P-521")]
    P521,

    /// P-256K
    #[serde(rename = "secp256k1")]
    P256K,
}

impl EcCurves {
    /// Registered curve name, as it appears in the `crv` member.
    pub fn name(&self) -> &'static str {
        match self {
            EcCurves::P256 => "P-256",
            EcCurves::P384 => "P-384",
            EcCurves::P521 => "P-521",
            EcCurves::P256K => "secp256k1",
        }
    }

    /// Length in bytes of each public coordinate.
    pub fn coordinate_length(&self) -> usize {
        match self {
            EcCurves::P256 | EcCurves::P256K => 32,
            EcCurves::P384 => 48,
            EcCurves::P521 => 66,
        }
    }
}
