//! Async and blocking DynamoDB client.
//!
//! ```no_run
//! use dynamite_client::{ClientConfig, DynamoDb, DynamoDbClient};
//! use dynamite_client::model::input::ListTablesInput;
//!
//! # async fn run() -> dynamite_client::Result<()> {
//! let client = DynamoDbClient::builder(ClientConfig::new("eu-west-1")).build()?;
//! let page = client.list_tables(ListTablesInput::new().with_limit(10)).await?;
//! for name in page.table_names {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! - [`client`]: the [`DynamoDb`] trait and [`DynamoDbClient`]
//! - [`blocking`]: [`BlockingClient`]
//! - [`paginate`]: page streams for `ListTables`, `Query` and `Scan`
//! - [`config`], [`transport`], [`retry`], [`error`]: the runtime pieces

pub mod blocking;
pub mod client;
pub mod config;
pub mod error;
pub mod paginate;
pub mod retry;
pub mod transport;

#[cfg(test)]
mod testing;

pub use blocking::BlockingClient;
pub use client::{ClientBuilder, DynamoDb, DynamoDbClient, ResponseMetadata};
pub use config::{ClientConfig, Protocol, Region};
pub use error::{ClientError, DynamoDbError, Result};
pub use paginate::{list_tables_stream, query_stream, scan_stream};
pub use retry::RetryPolicy;
pub use transport::{HttpTransport, ReqwestTransport};

/// Credentials and signing, re-exported for convenience.
pub use dynamite_auth as auth;
/// Wire model, re-exported for convenience.
pub use dynamite_model as model;
