//! Client error types.
//!
//! [`DynamoDbError`] is what every operation returns. It separates failures
//! reported by the service ([`ServiceError`]) from failures that happened
//! before a service answer was available ([`ClientError`]).

use std::time::Duration;

use dynamite_auth::AuthError;
use dynamite_model::{ServiceError, ServiceErrorCode};

/// Result alias for client operations.
pub type Result<T, E = DynamoDbError> = std::result::Result<T, E>;

/// A failure on the client side of the wire.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No credentials could be resolved.
    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    /// The request could not be signed.
    #[error("failed to sign request: {0}")]
    Signing(#[source] AuthError),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No response within the configured request timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The input could not be encoded as JSON.
    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body did not match the expected output shape.
    #[error("failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The body checksum disagrees with `x-amz-crc32`.
    #[error("CRC32 mismatch: header {expected}, body {actual}")]
    Crc32Mismatch {
        /// Value of the `x-amz-crc32` header.
        expected: u32,
        /// Checksum computed over the received body.
        actual: u32,
    },

    /// The blocking client could not start its runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl ClientError {
    /// Wrap any transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// Transport failures, timeouts and corrupted bodies may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Timeout(_) | Self::Crc32Mismatch { .. }
        )
    }
}

impl From<AuthError> for ClientError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials(reason) => Self::MissingCredentials(reason),
            other => Self::Signing(other),
        }
    }
}

/// Error returned by every DynamoDB operation.
#[derive(Debug, thiserror::Error)]
pub enum DynamoDbError {
    /// The service answered with an error.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The client failed before a service answer was available.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl DynamoDbError {
    /// The service error code, if the service produced this error.
    #[must_use]
    pub fn code(&self) -> Option<&ServiceErrorCode> {
        match self {
            Self::Service(e) => Some(&e.code),
            Self::Client(_) => None,
        }
    }

    /// The service request id, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Service(e) => e.request_id.as_deref(),
            Self::Client(_) => None,
        }
    }

    /// Whether the service throttled the request.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        self.code().is_some_and(ServiceErrorCode::is_throttling)
    }

    /// Whether the same request may succeed if sent again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Service(e) => e.is_retryable(),
            Self::Client(e) => e.is_retryable(),
        }
    }
}

impl From<AuthError> for DynamoDbError {
    fn from(err: AuthError) -> Self {
        Self::Client(err.into())
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;

    use super::*;

    #[test]
    fn test_should_expose_service_code() {
        let err: DynamoDbError = ServiceError::new(
            ServiceErrorCode::ResourceNotFoundException,
            "no table",
            StatusCode::BAD_REQUEST,
        )
        .into();
        assert_eq!(
            err.code(),
            Some(&ServiceErrorCode::ResourceNotFoundException)
        );
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("no table"));
    }

    #[test]
    fn test_should_retry_throttling_and_transport_failures() {
        let throttled: DynamoDbError = ServiceError::new(
            ServiceErrorCode::ProvisionedThroughputExceededException,
            "slow down",
            StatusCode::BAD_REQUEST,
        )
        .into();
        assert!(throttled.is_throttling());
        assert!(throttled.is_retryable());

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let transport: DynamoDbError = ClientError::transport(io).into();
        assert!(transport.is_retryable());
        assert_eq!(transport.code(), None);
    }

    #[test]
    fn test_should_not_retry_configuration_errors() {
        let err: DynamoDbError = ClientError::InvalidConfig("bad".to_owned()).into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_should_map_missing_credentials_from_auth_error() {
        let err: ClientError = AuthError::MissingCredentials("none".to_owned()).into();
        assert!(matches!(err, ClientError::MissingCredentials(_)));
        let err: ClientError = AuthError::MissingHost.into();
        assert!(matches!(err, ClientError::Signing(_)));
    }
}
