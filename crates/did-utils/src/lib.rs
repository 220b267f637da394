//! Decentralized Identifier (DID) documents and their resolution.
//!
//! - [`didcore`] models DID documents and extracts their public keys.
//! - [`ldmodel`] holds the JSON-LD `@context` model.
//! - [`jwk`] parses and validates JSON Web Keys.
//! - [`methods`] resolves DIDs, locally for `did:jwk` and through a universal resolver otherwise.

pub mod didcore;
pub mod errors;
pub mod jwk;
pub mod ldmodel;
pub mod methods;

pub use errors::DecodeError;
