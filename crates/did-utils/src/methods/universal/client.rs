use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::{body::Bytes, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::{
    client::legacy::{
        connect::{Connect, HttpConnector},
        Client,
    },
    rt::TokioExecutor,
};

use crate::methods::errors::TransportError;

/// Minimal HTTP transport used to reach a remote resolver.
///
/// Only a 2xx response yields a body. Any other status is reported as
/// [`TransportError::NonSuccessResponse`] and its body is discarded unread, so a
/// resolver answering 404 with a `{"didDocument": null}` envelope surfaces as a
/// transport failure rather than a malformed envelope.
///
/// Implementations add no timeout of their own. Dropping the returned future
/// aborts the request.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues a GET request and returns the body of a successful response.
    async fn get(&self, uri: Uri) -> Result<Bytes, TransportError>;
}

/// [`HttpClient`] backed by a pooled hyper client.
#[derive(Clone, Debug)]
pub struct HyperClient<C = HttpsConnector<HttpConnector>>
where
    C: Connect + Send + Sync + Clone + 'static,
{
    client: Client<C, Full<Bytes>>,
}

impl HyperClient {
    /// Creates a client speaking both HTTP and HTTPS.
    pub fn new() -> Self {
        HyperClient {
            client: Client::builder(TokioExecutor::new()).build::<_, Full<Bytes>>(HttpsConnector::new()),
        }
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HyperClient<HttpConnector> {
    /// Creates a plain-HTTP client.
    pub fn http() -> Self {
        HyperClient {
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }
}

#[async_trait]
impl<C> HttpClient for HyperClient<C>
where
    C: Connect + Send + Sync + Clone + 'static,
{
    async fn get(&self, uri: Uri) -> Result<Bytes, TransportError> {
        let res = self.client.get(uri).await?;

        if !res.status().is_success() {
            return Err(TransportError::NonSuccessResponse(res.status()));
        }

        let body = BodyExt::collect(res.into_body()).await?;

        Ok(body.to_bytes())
    }
}
