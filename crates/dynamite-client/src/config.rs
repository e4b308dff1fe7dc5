//! Client configuration.
//!
//! Like the rest of the workspace, configuration can be driven entirely by
//! environment variables through [`ClientConfig::from_env`].

use std::fmt;
use std::time::Duration;

use http::Uri;

use crate::error::ClientError;
use crate::retry::RetryPolicy;

/// Service name used in the endpoint host and the SigV4 credential scope.
pub const SERVICE_NAME: &str = "dynamodb";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// AWS region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Region used when none is configured.
    pub const DEFAULT: &str = "us-east-1";

    /// Wrap a region name such as `eu-west-1`.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// The region name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Regions in the `aws-cn` partition live under `amazonaws.com.cn`.
    #[must_use]
    pub fn dns_suffix(&self) -> &'static str {
        if self.0.starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Region {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Scheme applied to endpoints given as a bare host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plain HTTP, for local endpoints.
    Http,
    /// TLS.
    #[default]
    Https,
}

impl Protocol {
    /// The URI scheme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Everything a [`DynamoDbClient`](crate::DynamoDbClient) needs besides credentials.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Signing region, and the region of the default endpoint.
    pub region: Region,
    /// Endpoint override as given by the caller (bare host or URL).
    pub endpoint: Option<String>,
    /// Scheme for the default endpoint and for bare-host overrides.
    pub protocol: Protocol,
    /// Retry limits and backoff.
    pub retry: RetryPolicy,
    /// TCP and TLS connect timeout.
    pub connect_timeout: Duration,
    /// Upper bound for one attempt, from send to fully-read body.
    pub request_timeout: Duration,
    /// Sent as `User-Agent`.
    pub user_agent: String,
    /// Verify `x-amz-crc32` on every response.
    pub validate_crc32: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: Region::default(),
            endpoint: None,
            protocol: Protocol::default(),
            retry: RetryPolicy::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: concat!("dynamite/", env!("CARGO_PKG_VERSION")).to_owned(),
            validate_crc32: true,
        }
    }
}

impl ClientConfig {
    /// Defaults for `region`.
    #[must_use]
    pub fn new(region: impl Into<Region>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Effect |
    /// |----------|--------|
    /// | `AWS_REGION`, `AWS_DEFAULT_REGION` | region |
    /// | `DYNAMODB_ENDPOINT`, `AWS_ENDPOINT_URL_DYNAMODB` | endpoint override |
    /// | `DYNAMODB_MAX_RETRIES` | retry limit |
    /// | `DYNAMODB_VALIDATE_CRC32` | `true`/`1` or `false`/`0`; anything else is an error |
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] for an unparsable retry count,
    /// CRC32 flag or endpoint.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let first = |names: &[&str]| {
            names
                .iter()
                .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
        };

        let mut config = Self::default();
        if let Some(v) = first(&["AWS_REGION", "AWS_DEFAULT_REGION"]) {
            config.region = Region::new(v.trim());
        }
        if let Some(v) = first(&["DYNAMODB_ENDPOINT", "AWS_ENDPOINT_URL_DYNAMODB"]) {
            config = config.with_endpoint(v)?;
        }
        if let Some(v) = first(&["DYNAMODB_MAX_RETRIES"]) {
            config.retry.max_retries = v.trim().parse().map_err(|_| {
                ClientError::InvalidConfig(format!("DYNAMODB_MAX_RETRIES is not a number: {v}"))
            })?;
        }
        if let Some(v) = first(&["DYNAMODB_VALIDATE_CRC32"]) {
            config.validate_crc32 = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => {
                    return Err(ClientError::InvalidConfig(format!(
                        "DYNAMODB_VALIDATE_CRC32 must be true, false, 1 or 0: {v}"
                    )));
                }
            };
        }
        Ok(config)
    }

    /// Set the region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<Region>) -> Self {
        self.region = region.into();
        self
    }

    /// Override the endpoint with a bare host or a full `http(s)://` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the value is not a usable endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let endpoint = endpoint.into();
        parse_endpoint(&endpoint, self.protocol)?;
        self.endpoint = Some(endpoint);
        Ok(self)
    }

    /// Set the scheme used for bare-host endpoints.
    #[must_use]
    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the retry limit, keeping the backoff.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.retry.max_retries = max_retries;
        self
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the per-attempt timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable or disable `x-amz-crc32` validation.
    #[must_use]
    pub fn with_crc32_validation(mut self, enabled: bool) -> Self {
        self.validate_crc32 = enabled;
        self
    }

    /// The URI requests are posted to.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the override (or the region)
    /// does not form a valid URI.
    pub fn resolve_endpoint(&self) -> Result<Uri, ClientError> {
        match &self.endpoint {
            Some(endpoint) => parse_endpoint(endpoint, self.protocol),
            None => parse_endpoint(
                &format!(
                    "{SERVICE_NAME}.{}.{}",
                    self.region,
                    self.region.dns_suffix()
                ),
                self.protocol,
            ),
        }
    }
}

/// Normalize an endpoint to `scheme://authority/`.
fn parse_endpoint(raw: &str, protocol: Protocol) -> Result<Uri, ClientError> {
    let invalid = |reason: &str| ClientError::InvalidConfig(format!("endpoint {raw:?}: {reason}"));

    let raw = raw.trim();
    if raw.is_empty() {
        return Err(invalid("empty"));
    }
    let with_scheme = if raw.contains("://") {
        raw.to_owned()
    } else {
        format!("{}://{raw}", protocol.as_str())
    };
    let uri: Uri = with_scheme.parse().map_err(|_| invalid("not a valid URI"))?;

    let scheme = uri.scheme().ok_or_else(|| invalid("missing scheme"))?;
    if !matches!(scheme.as_str(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    let authority = uri.authority().ok_or_else(|| invalid("missing host"))?;
    if authority.host().is_empty() {
        return Err(invalid("missing host"));
    }
    if !matches!(uri.path(), "" | "/") || uri.query().is_some() {
        return Err(invalid("must not contain a path or query"));
    }

    Uri::builder()
        .scheme(scheme.clone())
        .authority(authority.clone())
        .path_and_query("/")
        .build()
        .map_err(|_| invalid("not a valid URI"))
}
