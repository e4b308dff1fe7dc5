//! DynamoDB service error types.
//!
//! Errors come back as JSON bodies with a `__type` field holding either a
//! short code (`ResourceNotFoundException`) or a namespace-qualified one
//! (`com.amazonaws.dynamodb.v20120810#ResourceNotFoundException`), plus a
//! `message` (or `Message`) field.

use std::fmt;

use serde::Deserialize;

/// Header carrying the request id assigned by the service.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Header some front ends use to report the error type when the body is empty.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

wire_enum! {
    /// Well-known DynamoDB error codes.
    #[non_exhaustive]
    pub enum ServiceErrorCode {
        ConditionalCheckFailedException = "ConditionalCheckFailedException",
        ProvisionedThroughputExceededException = "ProvisionedThroughputExceededException",
        ResourceNotFoundException = "ResourceNotFoundException",
        ResourceInUseException = "ResourceInUseException",
        ItemCollectionSizeLimitExceededException = "ItemCollectionSizeLimitExceededException",
        LimitExceededException = "LimitExceededException",
        InternalServerError = "InternalServerError",
        BackupInUseException = "BackupInUseException",
        BackupNotFoundException = "BackupNotFoundException",
        ContinuousBackupsUnavailableException = "ContinuousBackupsUnavailableException",
        GlobalTableAlreadyExistsException = "GlobalTableAlreadyExistsException",
        GlobalTableNotFoundException = "GlobalTableNotFoundException",
        IndexNotFoundException = "IndexNotFoundException",
        InvalidRestoreTimeException = "InvalidRestoreTimeException",
        PointInTimeRecoveryUnavailableException = "PointInTimeRecoveryUnavailableException",
        ReplicaAlreadyExistsException = "ReplicaAlreadyExistsException",
        ReplicaNotFoundException = "ReplicaNotFoundException",
        TableAlreadyExistsException = "TableAlreadyExistsException",
        TableInUseException = "TableInUseException",
        TableNotFoundException = "TableNotFoundException",
        // Protocol-level codes any action can return.
        ValidationException = "ValidationException",
        SerializationException = "SerializationException",
        AccessDeniedException = "AccessDeniedException",
        UnrecognizedClientException = "UnrecognizedClientException",
        ThrottlingException = "ThrottlingException",
        RequestLimitExceeded = "RequestLimitExceeded",
        MissingAuthenticationTokenException = "MissingAuthenticationTokenException",
        IncompleteSignatureException = "IncompleteSignatureException",
        InvalidSignatureException = "InvalidSignatureException",
        ExpiredTokenException = "ExpiredTokenException",
        TransactionConflictException = "TransactionConflictException",
    }
}

impl ServiceErrorCode {
    /// Parse an error type that may carry a `namespace#` prefix or a
    /// `:`-separated suffix (as sent in `x-amzn-ErrorType`).
    ///
    /// ```
    /// use dynamite_model::ServiceErrorCode;
    ///
    /// assert_eq!(
    ///     ServiceErrorCode::from_error_type("com.amazonaws.dynamodb.v20120810#TableNotFoundException"),
    ///     ServiceErrorCode::TableNotFoundException,
    /// );
    /// ```
    #[must_use]
    pub fn from_error_type(error_type: &str) -> Self {
        let code = error_type.rsplit('#').next().unwrap_or(error_type);
        let code = code.split(':').next().unwrap_or(code).trim();
        Self::from_wire(code)
    }

    /// Returns `true` for codes the service uses to signal throttling.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        matches!(
            self,
            Self::ProvisionedThroughputExceededException
                | Self::ThrottlingException
                | Self::RequestLimitExceeded
        )
    }

    /// Returns `true` if a request failing with this code may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.is_throttling()
            || matches!(
                self,
                Self::InternalServerError | Self::TransactionConflictException
            )
    }
}

/// An error reported by the DynamoDB service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// The error code.
    pub code: ServiceErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: http::StatusCode,
    /// The `x-amzn-RequestId` of the failed request, if present.
    pub request_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl ServiceError {
    /// Create a new `ServiceError` with a message and status.
    #[must_use]
    pub fn new(
        code: ServiceErrorCode,
        message: impl Into<String>,
        status: http::StatusCode,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            status,
            request_id: None,
        }
    }

    /// Set the request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Decode an error response.
    ///
    /// The JSON body wins when it names an error type. Otherwise the
    /// `x-amzn-ErrorType` header is used, and as a last resort the status
    /// code decides between `InternalServerError` and an `Unknown` code.
    #[must_use]
    pub fn from_response(
        status: http::StatusCode,
        headers: &http::HeaderMap,
        body: &[u8],
    ) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body).ok();
        let (body_type, message) = match parsed {
            Some(b) => (b.error_type, b.message),
            None => (None, None),
        };

        let header_type = headers
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let code = match body_type.or(header_type) {
            Some(t) => ServiceErrorCode::from_error_type(&t),
            None if status.is_server_error() => ServiceErrorCode::InternalServerError,
            None => ServiceErrorCode::Unknown(format!("HTTP {}", status.as_u16())),
        };

        let message = message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_owned()
        });

        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Self {
            code,
            message,
            status,
            request_id,
        }
    }

    /// Returns `true` if the request may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.code.is_retryable() || self.status.is_server_error()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.status.as_u16(), self.message)?;
        if let Some(id) = &self.request_id {
            write!(f, " [request id: {id}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use http::{HeaderMap, HeaderValue, StatusCode};

    use super::*;

    #[test]
    fn test_should_parse_qualified_error_type() {
        let code = ServiceErrorCode::from_error_type(
            "com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException",
        );
        assert_eq!(code, ServiceErrorCode::ConditionalCheckFailedException);

        let code = ServiceErrorCode::from_error_type("com.amazon.coral.validate#ValidationException");
        assert_eq!(code, ServiceErrorCode::ValidationException);
    }

    #[test]
    fn test_should_strip_header_suffix_from_error_type() {
        let code = ServiceErrorCode::from_error_type(
            "ResourceNotFoundException:http://internal.amazon.com/coral/",
        );
        assert_eq!(code, ServiceErrorCode::ResourceNotFoundException);
    }

    #[test]
    fn test_should_keep_unrecognized_codes() {
        let code = ServiceErrorCode::from_error_type("ns#BrandNewException");
        assert_eq!(code, ServiceErrorCode::Unknown("BrandNewException".to_owned()));
        assert!(!code.is_retryable());
    }

    #[test]
    fn test_should_classify_throttling() {
        assert!(ServiceErrorCode::ProvisionedThroughputExceededException.is_throttling());
        assert!(ServiceErrorCode::ThrottlingException.is_throttling());
        assert!(ServiceErrorCode::RequestLimitExceeded.is_retryable());
        assert!(ServiceErrorCode::InternalServerError.is_retryable());
        assert!(!ServiceErrorCode::ConditionalCheckFailedException.is_retryable());
        assert!(!ServiceErrorCode::ValidationException.is_throttling());
    }

    #[test]
    fn test_should_decode_lowercase_message() {
        let body = br#"{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"Requested resource not found"}"#;
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("REQ123"));

        let err = ServiceError::from_response(StatusCode::BAD_REQUEST, &headers, body);
        assert_eq!(err.code, ServiceErrorCode::ResourceNotFoundException);
        assert_eq!(err.message, "Requested resource not found");
        assert_eq!(err.request_id.as_deref(), Some("REQ123"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_should_decode_capitalized_message() {
        let body = br#"{"__type":"com.amazon.coral.validate#ValidationException","Message":"bad key"}"#;
        let err = ServiceError::from_response(StatusCode::BAD_REQUEST, &HeaderMap::new(), body);
        assert_eq!(err.code, ServiceErrorCode::ValidationException);
        assert_eq!(err.message, "bad key");
    }

    #[test]
    fn test_should_fall_back_to_error_type_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-amzn-errortype",
            HeaderValue::from_static("ThrottlingException:http://internal.amazon.com/coral/"),
        );
        let err = ServiceError::from_response(StatusCode::BAD_REQUEST, &headers, b"");
        assert_eq!(err.code, ServiceErrorCode::ThrottlingException);
        assert_eq!(err.message, "Bad Request");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_should_treat_bare_5xx_as_internal_error() {
        let err = ServiceError::from_response(
            StatusCode::SERVICE_UNAVAILABLE,
            &HeaderMap::new(),
            b"<html>oops</html>",
        );
        assert_eq!(err.code, ServiceErrorCode::InternalServerError);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_should_display_code_status_and_request_id() {
        let err = ServiceError::new(
            ServiceErrorCode::TableNotFoundException,
            "no such table",
            StatusCode::BAD_REQUEST,
        )
        .with_request_id("abc");
        assert_eq!(
            err.to_string(),
            "TableNotFoundException (400): no such table [request id: abc]"
        );
    }
}
