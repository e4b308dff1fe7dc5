//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use dynamite_auth::{Credentials, StaticCredentialsProvider};
use parking_lot::Mutex;

use crate::client::{CONTENT_TYPE_JSON, DynamoDbClient, X_AMZ_CRC32};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::retry::RetryPolicy;
use crate::transport::HttpTransport;

/// What the mock saw of one request.
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub(crate) uri: http::Uri,
    pub(crate) headers: http::HeaderMap,
    pub(crate) body: Bytes,
}

impl Recorded {
    pub(crate) fn header(&self, name: &str) -> &str {
        self.headers.get(name).unwrap().to_str().unwrap()
    }

    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Debug)]
pub(crate) enum Reply {
    Response(http::Response<Bytes>),
    ConnectionReset,
}

/// Replays queued replies and records every request it receives.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<Recorded>>,
}

impl MockTransport {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::default(),
        })
    }

    pub(crate) fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, ClientError> {
        self.requests.lock().push(Recorded {
            uri: request.uri().clone(),
            headers: request.headers().clone(),
            body: request.body().clone(),
        });
        match self.replies.lock().pop_front() {
            Some(Reply::Response(r)) => Ok(r),
            Some(Reply::ConnectionReset) | None => Err(ClientError::transport(
                std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset"),
            )),
        }
    }
}

/// Never answers; counts how often it was asked.
#[derive(Debug, Default)]
pub(crate) struct HangingTransport {
    calls: AtomicUsize,
}

impl HangingTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for HangingTransport {
    async fn send(
        &self,
        _request: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        futures::future::pending().await
    }
}

/// Formatted `tracing` output of the current thread.
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Route this thread's events at `DEBUG` and above into the buffer
    /// until the guard drops.
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || logs.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A JSON reply with a correct `x-amz-crc32`.
pub(crate) fn ok(body: &str) -> Reply {
    reply(http::StatusCode::OK, body, &[])
}

pub(crate) fn reply(status: http::StatusCode, body: &str, headers: &[(&str, &str)]) -> Reply {
    let mut builder = http::Response::builder()
        .status(status)
        .header("content-type", CONTENT_TYPE_JSON)
        .header(X_AMZ_CRC32, crc32fast::hash(body.as_bytes()).to_string())
        .header("x-amzn-requestid", "REQ-1");
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    Reply::Response(builder.body(Bytes::from(body.to_owned())).unwrap())
}

pub(crate) fn error(status: http::StatusCode, error_type: &str, message: &str) -> Reply {
    reply(
        status,
        &format!(r#"{{"__type":"com.amazonaws.dynamodb.v20120810#{error_type}","message":"{message}"}}"#),
        &[],
    )
}

pub(crate) fn client(transport: Arc<MockTransport>) -> DynamoDbClient {
    let config = ClientConfig::new("us-east-1")
        .with_endpoint("http://localhost:8000")
        .unwrap()
        .with_retry_policy(RetryPolicy::new(
            3,
            Duration::from_millis(1),
            Duration::from_millis(2),
        ));
    DynamoDbClient::builder(config)
        .credentials(StaticCredentialsProvider::new(Credentials::new(
            "AKID", "secret",
        )))
        .transport(transport)
        .build()
        .unwrap()
}
