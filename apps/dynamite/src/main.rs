//! Dynamite: a small DynamoDB command-line tool.
//!
//! ```text
//! dynamite --endpoint http://localhost:8000 list-tables
//! dynamite get-item users '{"id":{"S":"42"}}'
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | `us-east-1` | Signing region |
//! | `DYNAMODB_ENDPOINT` | *(regional endpoint)* | Endpoint override |
//! | `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` | *(required)* | Credentials |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use dynamite_client::{ClientConfig, DynamoDbClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Initialize the tracing subscriber on stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Environment first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("invalid client configuration")?;
    if let Some(region) = &cli.region {
        config = config.with_region(region.as_str());
    }
    if let Some(endpoint) = &cli.endpoint {
        config = config
            .with_endpoint(endpoint.as_str())
            .with_context(|| format!("invalid endpoint {endpoint}"))?;
    }
    if let Some(max_retries) = cli.max_retries {
        config = config.with_max_retries(max_retries);
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = build_config(&cli)?;
    let client = DynamoDbClient::builder(config)
        .build()
        .context("failed to create DynamoDB client")?;
    debug!(endpoint = %client.endpoint(), "client ready");

    let output = commands::run(&client, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
