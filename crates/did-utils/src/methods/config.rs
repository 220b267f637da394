/// Environment variable holding the base URL of the universal resolver.
pub const DID_RESOLVER_ENV: &str = "DID_RESOLVER";

/// Resolver settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Base URL of the universal resolver, without a trailing `/`.
    /// Left empty, every delegated lookup fails with a transport error.
    pub resolver_base_url: String,
}

impl ResolverConfig {
    pub fn new(resolver_base_url: impl Into<String>) -> Self {
        let resolver_base_url: String = resolver_base_url.into();

        Self {
            resolver_base_url: resolver_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads the base URL from `DID_RESOLVER`, defaulting to an empty string.
    pub fn from_env() -> Self {
        Self::new(std::env::var(DID_RESOLVER_ENV).unwrap_or_default())
    }
}
