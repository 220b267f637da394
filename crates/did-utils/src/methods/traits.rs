//! Trait definitions for DID methods.

use async_trait::async_trait;

use crate::{didcore::Document, methods::errors::ResolutionError};

/// Abstract contract for DID methods.
pub trait DIDMethod: DIDResolver {
    /// Returns the DIDMethod's registered name, prefixed with `did:`,
    /// e.g. did:jwk, did:web, etc.
    fn name() -> String;
}

/// Abstract contract for DID resolution.
///
/// Implementations hold no shared mutable state, so one resolver can serve
/// concurrent calls. Dropping the returned future cancels any request in flight.
///
/// [See DID Resolution Specification](https://w3c.github.io/did-resolution)
#[async_trait]
pub trait DIDResolver {
    /// Resolves a DID address into its corresponding DID document.
    async fn resolve(&self, did: &str) -> Result<Document, ResolutionError>;
}
