use thiserror::Error;

/// The set of errors that can occur while parsing or serializing JSON Web Keys.
#[derive(Error, Debug)]
pub enum JwkError {
    /// The input is not a JSON Web Key of a supported type.
    #[error("malformed JSON Web Key: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A key parameter does not have the length required by its curve.
    #[error("invalid `{param}` for curve {crv}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        param: &'static str,
        crv: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A key set holds no keys.
    #[error("no keys found in JSON Web Key set")]
    EmptySet,
}
