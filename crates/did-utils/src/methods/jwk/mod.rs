mod resolver;

pub use resolver::{DidJwk, DID_CONTEXT, JWS_2020_CONTEXT};
pub(crate) use resolver::DID_JWK_PREFIX;
