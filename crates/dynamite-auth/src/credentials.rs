//! Credentials and the providers that resolve them.
//!
//! A [`CredentialsProvider`] is consulted once per request attempt, so
//! providers that rotate keys are picked up without rebuilding the client.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::AuthError;

/// Environment variable holding the access key id.
pub const ACCESS_KEY_ID_ENV: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const SECRET_ACCESS_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";
/// Environment variable holding an optional session token.
pub const SESSION_TOKEN_ENV: &str = "AWS_SESSION_TOKEN";

/// An access key pair plus an optional session token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The access key id. Appears in the credential scope.
    pub access_key_id: String,
    /// The secret key. Never leaves the process.
    pub secret_access_key: String,
    /// Temporary-credential token sent as `x-amz-security-token`.
    pub session_token: Option<String>,
}

impl Credentials {
    /// Long-term credentials without a session token.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "** redacted **"),
            )
            .finish()
    }
}

/// Resolves the credentials used to sign a request.
pub trait CredentialsProvider: Send + Sync + fmt::Debug {
    /// Return the credentials to sign with.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] if none are available.
    fn provide_credentials(&self) -> Result<Credentials, AuthError>;
}

/// Always returns the same credentials.
#[derive(Debug, Clone)]
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    /// Wrap a fixed set of credentials.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}

/// Reads `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentCredentialsProvider;

impl EnvironmentCredentialsProvider {
    /// Create a provider over the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials, AuthError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let access_key_id = non_empty(ACCESS_KEY_ID_ENV)
            .ok_or_else(|| AuthError::MissingCredentials(format!("{ACCESS_KEY_ID_ENV} not set")))?;
        let secret_access_key = non_empty(SECRET_ACCESS_KEY_ENV).ok_or_else(|| {
            AuthError::MissingCredentials(format!("{SECRET_ACCESS_KEY_ENV} not set"))
        })?;

        Ok(Credentials {
            access_key_id,
            secret_access_key,
            session_token: non_empty(SESSION_TOKEN_ENV),
        })
    }
}

impl CredentialsProvider for EnvironmentCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        Self::resolve(|name| std::env::var(name).ok())
    }
}

/// Tries each provider in order and returns the first success.
#[derive(Debug, Clone, Default)]
pub struct ChainCredentialsProvider {
    providers: Vec<Arc<dyn CredentialsProvider>>,
}

impl ChainCredentialsProvider {
    /// An empty chain. Always fails until a provider is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default chain: the process environment only.
    #[must_use]
    pub fn default_chain() -> Self {
        Self::new().with_provider(EnvironmentCredentialsProvider)
    }

    /// Append a provider to the end of the chain.
    #[must_use]
    pub fn with_provider(mut self, provider: impl CredentialsProvider + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }
}

impl CredentialsProvider for ChainCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, AuthError> {
        let mut reasons = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.provide_credentials() {
                Ok(credentials) => return Ok(credentials),
                Err(e) => {
                    debug!(provider = ?provider, error = %e, "credentials provider skipped");
                    reasons.push(e.to_string());
                }
            }
        }
        if reasons.is_empty() {
            reasons.push("no providers configured".to_owned());
        }
        Err(AuthError::MissingCredentials(reasons.join("; ")))
    }
}
