//! Integration tests for the dynamite client.
//!
//! Most tests run the async and blocking clients over real HTTP against
//! [`StubServer`], an in-process stand-in that checks SigV4 signatures.
//! Tests against a live endpoint are marked `#[ignore]`; run them with:
//!
//! ```text
//! DYNAMODB_ENDPOINT=http://localhost:8000 cargo test -p dynamite-integration -- --ignored
//! ```

use std::sync::Once;
use std::time::Duration;

use dynamite_client::auth::{Credentials, StaticCredentialsProvider};
use dynamite_client::model::input::CreateTableInput;
use dynamite_client::model::types::{AttributeDefinition, KeySchemaElement, ScalarAttributeType};
use dynamite_client::model::{AttributeValue, Item};
use dynamite_client::{BlockingClient, ClientConfig, DynamoDb, DynamoDbClient, RetryPolicy};

pub mod stub;

pub use stub::{ACCESS_KEY, SECRET_KEY, StubServer};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Client configuration pointing at `server`, with short retry delays.
#[must_use]
pub fn stub_config(server: &StubServer) -> ClientConfig {
    ClientConfig::new("us-east-1")
        .with_endpoint(server.endpoint())
        .unwrap_or_else(|e| panic!("bad stub endpoint {}: {e}", server.endpoint()))
        .with_retry_policy(RetryPolicy::new(
            3,
            Duration::from_millis(1),
            Duration::from_millis(5),
        ))
        .with_request_timeout(Duration::from_secs(5))
}

/// An async client signed with the stub's credentials.
#[must_use]
pub fn stub_client(server: &StubServer) -> DynamoDbClient {
    stub_client_with(server, ACCESS_KEY, SECRET_KEY)
}

/// An async client signed with arbitrary credentials.
#[must_use]
pub fn stub_client_with(server: &StubServer, access_key: &str, secret_key: &str) -> DynamoDbClient {
    init_tracing();
    DynamoDbClient::new(
        stub_config(server),
        StaticCredentialsProvider::new(Credentials::new(access_key, secret_key)),
    )
    .unwrap_or_else(|e| panic!("failed to build stub client: {e}"))
}

/// A blocking client signed with the stub's credentials.
#[must_use]
pub fn stub_blocking_client(server: &StubServer) -> BlockingClient {
    BlockingClient::new(stub_client(server))
        .unwrap_or_else(|e| panic!("failed to build blocking client: {e}"))
}

/// `CreateTable` input for an on-demand table keyed by a string `pk`.
#[must_use]
pub fn simple_table(name: &str) -> CreateTableInput {
    CreateTableInput::on_demand(
        vec![AttributeDefinition::new("pk", ScalarAttributeType::S)],
        name,
        vec![KeySchemaElement::hash("pk")],
    )
}

/// Create a `pk`-keyed table, panicking on failure.
pub async fn create_simple_table(client: &DynamoDbClient, name: &str) {
    client
        .create_table(simple_table(name))
        .await
        .unwrap_or_else(|e| panic!("failed to create table {name}: {e}"));
}

/// An item with the given `pk` and a numeric `n` attribute.
#[must_use]
pub fn test_item(pk: &str, n: i64) -> Item {
    Item::from([
        ("pk".to_owned(), AttributeValue::from(pk)),
        ("n".to_owned(), AttributeValue::number(n)),
    ])
}

mod test_blocking;
mod test_client;
mod test_error;
mod test_live;
