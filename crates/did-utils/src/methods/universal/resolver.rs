use async_trait::async_trait;
use hyper::Uri;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;

use super::{HttpClient, HyperClient, ResolutionEnvelope};
use crate::{
    didcore::Document,
    methods::{
        config::ResolverConfig,
        errors::{ResolutionError, TransportError},
        traits::DIDResolver,
    },
};

const IDENTIFIERS_PATH: &str = "1.0/identifiers";

// Characters escaped when a DID is placed in a single path segment. `:` stays literal.
const DID_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Resolver delegating to a universal resolver over HTTP.
///
/// Any DID is accepted and forwarded unchanged to
/// `GET <base>/1.0/identifiers/<did>`. The `didDocument` member of the response
/// is decoded into a [`Document`].
pub struct UniversalResolver<C = HyperClient> {
    base_url: String,
    client: C,
}

impl UniversalResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_client(config, HyperClient::new())
    }
}

impl<C: HttpClient> UniversalResolver<C> {
    /// Creates a resolver sending its requests through `client`.
    pub fn with_client(config: &ResolverConfig, client: C) -> Self {
        Self {
            base_url: config.resolver_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// URL at which `did` is looked up.
    pub fn identifier_url(&self, did: &str) -> String {
        format!("{}/{IDENTIFIERS_PATH}/{}", self.base_url, utf8_percent_encode(did, DID_SEGMENT))
    }

    async fn fetch(&self, did: &str) -> Result<hyper::body::Bytes, TransportError> {
        let uri: Uri = self.identifier_url(did).parse()?;
        debug!("requesting {uri} from universal resolver");

        self.client.get(uri).await
    }
}

#[async_trait]
impl<C: HttpClient> DIDResolver for UniversalResolver<C> {
    async fn resolve(&self, did: &str) -> Result<Document, ResolutionError> {
        let body = self.fetch(did).await?;
        let envelope = ResolutionEnvelope::from_slice(&body)?;

        Ok(envelope.into_document()?)
    }
}
