//! Delegated resolution through a [universal resolver] instance.
//!
//! [universal resolver]: https://github.com/decentralized-identity/universal-resolver

mod client;
mod envelope;
mod resolver;

pub use client::{HttpClient, HyperClient};
pub use envelope::ResolutionEnvelope;
pub use resolver::UniversalResolver;
