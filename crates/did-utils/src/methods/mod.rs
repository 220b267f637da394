//! DID resolution.
//!
//! [`did:jwk`] identifiers are expanded locally by [`DidJwk`]. Any other method is
//! delegated to a [universal resolver] instance by [`UniversalResolver`].
//! [`Resolver`] chooses between the two.
//!
//! [`did:jwk`]: https://github.com/quartzjer/did-jwk/blob/main/spec.md
//! [universal resolver]: https://github.com/decentralized-identity/universal-resolver
//!
//! # Examples
//!
//! ### Resolving through the dispatcher
//!
//! ```
//! use did_utils::methods::{DIDResolver, Resolver, ResolverConfig};
//!
//! # async fn resolve_any_did() {
//!     let resolver = Resolver::new(&ResolverConfig::new("http://localhost:8080"));
//!     let did = "did:jwk:eyJrdHkiOiJPS1AiLCJjcnYiOiJFZDI1NTE5IiwieCI6IlZDcG8yTE1MaG42aVdrdThNS3ZTTGcyWkFvQy1ubE95UFZRYU8zRnhWZVEifQ";
//!     let diddoc = resolver.resolve(did).await;
//! # }
//! ```
//!
//! ### Expanding a did:jwk without a runtime
//!
//! ```
//! use did_utils::methods::DidJwk;
//!
//! let did = "did:jwk:eyJrdHkiOiJPS1AiLCJjcnYiOiJFZDI1NTE5IiwieCI6IlZDcG8yTE1MaG42aVdrdThNS3ZTTGcyWkFvQy1ubE95UFZRYU8zRnhWZVEifQ";
//! let diddoc = DidJwk::new().expand(did).unwrap();
//! assert_eq!(diddoc.extract_public_keys().len(), 1);
//! ```

mod config;
mod dispatcher;
mod errors;
mod jwk;
mod traits;
mod universal;
mod web;

// Re-exports
pub use config::{ResolverConfig, DID_RESOLVER_ENV};
pub use dispatcher::Resolver;
pub use errors::{ResolutionError, TransportError};
pub use jwk::{DidJwk, DID_CONTEXT, JWS_2020_CONTEXT};
pub use traits::{DIDMethod, DIDResolver};
pub use universal::{HttpClient, HyperClient, ResolutionEnvelope, UniversalResolver};
pub use web::to_did_web;
