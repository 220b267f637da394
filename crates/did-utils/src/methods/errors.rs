use hyper::StatusCode;
use thiserror::Error;

use crate::{errors::DecodeError, jwk::JwkError};

/// Errors returned by DID resolution.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("DID cannot be empty")]
    EmptyIdentifier,
    #[error("DID method not supported: {0}")]
    MethodNotSupported(String),
    #[error("failed to base64url-decode JWK: {0}")]
    InvalidEncoding(base64ct::Error),
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(#[from] JwkError),
    #[error("transport failure: {0}")]
    TransportFailure(#[from] TransportError),
    #[error("malformed resolution result: {0}")]
    MalformedEnvelope(#[from] DecodeError),
}

/// Errors raised while talking to a remote resolver.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportError {
    #[error("invalid resolver URL: {0}")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),
    #[error("HTTP request failed: {0}")]
    Request(#[from] hyper_util::client::legacy::Error),
    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),
    #[error("Non-success server response: {0}")]
    NonSuccessResponse(StatusCode),
}
