//! The HTTP seam.
//!
//! [`DynamoDbClient`](crate::DynamoDbClient) hands a fully built and signed
//! request to an [`HttpTransport`] and gets the buffered response back.
//! Tests plug in an in-memory transport; production uses [`ReqwestTransport`].

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Sends one request and buffers the whole response.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Send `request`.
    ///
    /// Any HTTP status is a successful send; only failures to obtain a
    /// response are errors.
    async fn send(&self, request: http::Request<Bytes>)
    -> Result<http::Response<Bytes>, ClientError>;
}

/// [`HttpTransport`] over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    request_timeout: std::time::Duration,
}

impl ReqwestTransport {
    /// Build a connection pool with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("http client: {e}")))?;
        Ok(Self {
            client,
            request_timeout: config.request_timeout,
        })
    }

    /// Use an existing `reqwest::Client`, for callers that share a pool.
    #[must_use]
    pub fn from_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            request_timeout: config.request_timeout,
        }
    }

    fn map_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.request_timeout)
        } else {
            ClientError::transport(err)
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, ClientError> {
        let request = reqwest::Request::try_from(request).map_err(ClientError::transport)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| self.map_error(e))?;

        let mut out = http::Response::new(body);
        *out.status_mut() = status;
        *out.headers_mut() = headers;
        Ok(out)
    }
}
