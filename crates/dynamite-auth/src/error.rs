//! Signing and credential errors.

/// Errors raised while resolving credentials or signing a request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No provider in the chain could produce credentials.
    #[error("no credentials available: {0}")]
    MissingCredentials(String),

    /// The request URI has no host to sign.
    #[error("request URI has no host")]
    MissingHost,

    /// A computed header value is not a valid HTTP header.
    #[error("invalid header value for {0}")]
    InvalidHeaderValue(&'static str),

    /// The `Authorization` header is missing from the request.
    #[error("missing Authorization header")]
    MissingAuthHeader,

    /// The `Authorization` header could not be parsed.
    #[error("invalid Authorization header format")]
    InvalidAuthHeader,

    /// The signing algorithm is not `AWS4-HMAC-SHA256`.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A header named in `SignedHeaders` is missing from the request.
    #[error("missing signed header: {0}")]
    MissingHeader(String),

    /// The computed signature does not match the provided one.
    #[error("signature does not match")]
    SignatureDoesNotMatch,
}
