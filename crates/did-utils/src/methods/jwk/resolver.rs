use async_trait::async_trait;
use base64ct::{Base64UrlUnpadded, Encoding};
use tracing::debug;

use crate::{
    didcore::{Document, VerificationEntry, VerificationMethod, JSON_WEB_KEY_2020},
    jwk::{JwkError, JwkSet},
    ldmodel::Context,
    methods::{
        errors::ResolutionError,
        traits::{DIDMethod, DIDResolver},
    },
};

pub const DID_CONTEXT: &str = "https://www.w3.org/ns/did/v1";
pub const JWS_2020_CONTEXT: &str = "https://w3id.org/security/suites/jws-2020/v1";

pub(crate) const DID_JWK_PREFIX: &str = "did:jwk:";

/// Resolver for the `did:jwk` method.
///
/// The method-specific identifier is the base64url (unpadded) encoding of a
/// JSON Web Key, so resolution never leaves the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct DidJwk;

impl DidJwk {
    pub fn new() -> Self {
        Self
    }

    /// Expands a `did:jwk` address into its DID document.
    ///
    /// The document carries a single verification method `<did>#0` of type
    /// `JsonWebKey2020`, referenced from the authentication, assertionMethod
    /// and capabilityInvocation relationships.
    pub fn expand(&self, did: &str) -> Result<Document, ResolutionError> {
        let encoded = did
            .strip_prefix(DID_JWK_PREFIX)
            .ok_or_else(|| ResolutionError::MethodNotSupported(did.to_string()))?;

        let bytes = Base64UrlUnpadded::decode_vec(encoded).map_err(ResolutionError::InvalidEncoding)?;
        let keys = JwkSet::from_slice(&bytes)?;
        let jwk = keys.first().cloned().ok_or(JwkError::EmptySet)?;

        debug!("expanded {did} into a {} key", jwk.key.kty());

        let method_id = format!("{did}#0");
        let method = VerificationMethod {
            id: method_id.clone(),
            key_type: JSON_WEB_KEY_2020.to_string(),
            controller: did.to_string(),
            public_key_jwk: Some(jwk),
            ..Default::default()
        };

        let reference = || vec![VerificationEntry::Reference(method_id.clone())];

        Ok(Document {
            context: Context::from_iter([DID_CONTEXT, JWS_2020_CONTEXT]),
            id: did.to_string(),
            controller: None,
            verification_method: vec![method.into()],
            authentication: reference(),
            assertion_method: reference(),
            key_agreement: vec![],
            capability_invocation: reference(),
            capability_delegation: vec![],
            additional_properties: Default::default(),
        })
    }
}

impl DIDMethod for DidJwk {
    fn name() -> String {
        "did:jwk".to_string()
    }
}

#[async_trait]
impl DIDResolver for DidJwk {
    async fn resolve(&self, did: &str) -> Result<Document, ResolutionError> {
        self.expand(did)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwk::{Key, OkpCurves};
    use serde_json::json;

    const ED25519_JWK: &str = r#"{"kty":"OKP","crv":"Ed25519","x":"VCpo2LMLhn6iWku8MKvSLg2ZAoC-nlOyPVQaO3FxVeQ"}"#;

    fn did_jwk(jwk: &str) -> String {
        format!("did:jwk:{}", Base64UrlUnpadded::encode_string(jwk.as_bytes()))
    }

    #[test]
    fn test_expand_ed25519_key() {
        let did = did_jwk(ED25519_JWK);
        let diddoc = DidJwk::new().expand(&did).unwrap();

        assert_eq!(diddoc.id, did);
        assert!(diddoc.controller.is_none());
        assert_eq!(diddoc.context.encode(), json!([DID_CONTEXT, JWS_2020_CONTEXT]));

        let method = diddoc.verification_method[0].as_key().unwrap();
        assert_eq!(method.id, format!("{did}#0"));
        assert_eq!(method.key_type, JSON_WEB_KEY_2020);
        assert_eq!(method.controller, did);

        let jwk = method.public_key_jwk.as_ref().unwrap();
        assert!(matches!(&jwk.key, Key::Okp(okp) if okp.crv == OkpCurves::Ed25519));

        for relationship in [&diddoc.authentication, &diddoc.assertion_method, &diddoc.capability_invocation] {
            assert_eq!(relationship.len(), 1);
            assert_eq!(relationship[0].as_reference(), Some(method.id.as_str()));
        }
        assert!(diddoc.key_agreement.is_empty());
        assert!(diddoc.capability_delegation.is_empty());
    }

    #[test]
    fn test_expanded_document_encodes_as_expected() {
        let did = did_jwk(ED25519_JWK);
        let diddoc = DidJwk::new().expand(&did).unwrap();

        let expected = json!({
            "@context": [DID_CONTEXT, JWS_2020_CONTEXT],
            "id": did,
            "verificationMethod": [{
                "id": format!("{did}#0"),
                "type": "JsonWebKey2020",
                "controller": did,
                "publicKeyJwk": serde_json::from_str::<serde_json::Value>(ED25519_JWK).unwrap(),
            }],
            "authentication": [format!("{did}#0")],
            "assertionMethod": [format!("{did}#0")],
            "capabilityInvocation": [format!("{did}#0")],
        });

        assert_eq!(diddoc.encode().unwrap(), expected);
    }

    #[test]
    fn test_expand_accepts_single_key_set() {
        let did = did_jwk(&format!(r#"{{"keys":[{ED25519_JWK}]}}"#));
        let diddoc = DidJwk::new().expand(&did).unwrap();
        assert_eq!(diddoc.extract_public_keys().len(), 1);
    }

    #[test]
    fn test_expand_uses_first_key_of_set() {
        let p256 = r#"{"kty":"EC","crv":"P-256","x":"o1nDLbagUJXe6NF657N3rM2J4SHNnIq9QZBxhywxauc","y":"2Kwg0I7m7xqJ-S3h8CKXPZ6cDCRJmbSbUXBeJvyn7aQ"}"#;
        let did = did_jwk(&format!(r#"{{"keys":[{p256},{ED25519_JWK}]}}"#));

        let diddoc = DidJwk::new().expand(&did).unwrap();
        let method = diddoc.verification_method[0].as_key().unwrap();
        assert_eq!(diddoc.verification_method.len(), 1);
        assert_eq!(method.public_key_jwk.as_ref().unwrap().key.kty(), "EC");
    }

    #[test]
    fn test_expand_rejects_bad_encoding() {
        let err = DidJwk::new().expand("did:jwk:not*base64").unwrap_err();
        assert!(matches!(err, ResolutionError::InvalidEncoding(_)));
    }

    #[test]
    fn test_expand_rejects_bad_key_material() {
        for payload in ["{\"kty\":\"RSA\"}", "not json", "{\"keys\":[]}", ""] {
            let err = DidJwk::new().expand(&did_jwk(payload)).unwrap_err();
            assert!(
                matches!(err, ResolutionError::InvalidKeyMaterial(_)),
                "unexpected error for {payload:?}: {err}"
            );
        }
    }

    #[test]
    fn test_expand_rejects_other_methods() {
        let err = DidJwk::new().expand("did:web:example.org").unwrap_err();
        assert!(matches!(err, ResolutionError::MethodNotSupported(_)));
    }

    #[tokio::test]
    async fn test_resolve_through_trait() {
        let did = did_jwk(ED25519_JWK);
        let diddoc = DIDResolver::resolve(&DidJwk::new(), &did).await.unwrap();
        assert_eq!(diddoc.id, did);
        assert_eq!(DidJwk::name(), "did:jwk");
    }
}
