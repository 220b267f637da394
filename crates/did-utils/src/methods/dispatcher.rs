use async_trait::async_trait;
use tracing::debug;

use crate::{
    didcore::Document,
    methods::{
        config::ResolverConfig,
        errors::ResolutionError,
        jwk::{DidJwk, DID_JWK_PREFIX},
        traits::DIDResolver,
        universal::{HttpClient, HyperClient, UniversalResolver},
    },
};

/// Entry point for resolving any DID.
///
/// `did:jwk` identifiers are expanded locally. Every other identifier is handed
/// to the configured universal resolver.
pub struct Resolver<C = HyperClient> {
    did_jwk: DidJwk,
    universal: UniversalResolver<C>,
}

impl Resolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_client(config, HyperClient::new())
    }

    /// Creates a resolver configured from the `DID_RESOLVER` environment variable.
    pub fn from_env() -> Self {
        Self::new(&ResolverConfig::from_env())
    }
}

impl<C: HttpClient> Resolver<C> {
    pub fn with_client(config: &ResolverConfig, client: C) -> Self {
        Self {
            did_jwk: DidJwk::new(),
            universal: UniversalResolver::with_client(config, client),
        }
    }
}

#[async_trait]
impl<C: HttpClient> DIDResolver for Resolver<C> {
    async fn resolve(&self, did: &str) -> Result<Document, ResolutionError> {
        if did.is_empty() {
            return Err(ResolutionError::EmptyIdentifier);
        }

        if did.starts_with(DID_JWK_PREFIX) {
            debug!("resolving {did} locally");
            return self.did_jwk.expand(did);
        }

        debug!("delegating {did} to universal resolver");
        self.universal.resolve(did).await
    }
}
