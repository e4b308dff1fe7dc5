//! Command-line arguments.

use clap::{Parser, Subcommand};

/// Talk to DynamoDB from the shell.
///
/// Credentials come from `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and
/// `AWS_SESSION_TOKEN`. Keys and items are given in attribute-value JSON,
/// e.g. `{"id": {"S": "42"}}`.
#[derive(Debug, Parser)]
#[command(name = "dynamite", version, about)]
pub struct Cli {
    /// Region to sign for and to derive the default endpoint from.
    #[arg(long, global = true, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Endpoint override: a bare host or an http(s) URL.
    #[arg(long, global = true, env = "DYNAMODB_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Retries after the first attempt.
    #[arg(long, global = true)]
    pub max_retries: Option<u32>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// One DynamoDB action.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every table name in the region.
    ListTables,
    /// Print a table description.
    DescribeTable {
        /// Table name.
        name: String,
    },
    /// Fetch one item by primary key.
    GetItem {
        table: String,
        /// Primary key as attribute-value JSON.
        key: String,
        /// Use a strongly consistent read.
        #[arg(long)]
        consistent: bool,
    },
    /// Create or replace an item.
    PutItem {
        table: String,
        /// Item as attribute-value JSON.
        item: String,
    },
    /// Delete one item by primary key and print the old item, if any.
    DeleteItem {
        table: String,
        /// Primary key as attribute-value JSON.
        key: String,
    },
    /// Scan a table, following pagination.
    Scan {
        table: String,
        /// Stop after this many items.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete a table.
    DeleteTable {
        /// Table name.
        name: String,
    },
    /// Print the account's provisioned capacity limits.
    DescribeLimits,
}
