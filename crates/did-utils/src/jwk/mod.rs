//! This module provides types and utilities for handling JSON Web Keys (JWKs).
//!
//! It is the key codec used by the DID document model: verification methods hand the raw
//! `publicKeyJwk` member to [`Jwk::from_value`], and `did:jwk` resolution hands the decoded
//! identifier bytes to [`JwkSet::from_slice`].
//!
//! Elliptic-curve (`EC`) and Octet Key Pair (`OKP`) keys are supported.

mod bytes;
mod ec;
mod error;
mod jwk;
mod key;
mod okp;
mod prm;
mod secret;

// Re-exports
pub use bytes::Bytes;
pub use ec::{Ec, EcCurves};
pub use error::JwkError;
pub use jwk::{Jwk, JwkSet};
pub use key::Key;
pub use okp::{Okp, OkpCurves};
pub use prm::{Class, Operations, Parameters};
pub use secret::Secret;
