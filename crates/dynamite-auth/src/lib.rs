//! Credentials and AWS Signature Version 4 signing for the Dynamite client.
//!
//! - [`credentials`]: the [`Credentials`] value and the providers that resolve it
//! - [`canonical`]: canonical request construction
//! - [`sigv4`]: request signing plus a verifier for test servers
//! - [`error`]: [`AuthError`]

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod sigv4;

pub use credentials::{
    ChainCredentialsProvider, Credentials, CredentialsProvider, EnvironmentCredentialsProvider,
    StaticCredentialsProvider,
};
pub use error::AuthError;
pub use sigv4::{SigningParams, hash_payload, sign_request, verify_request};
