//! Command execution.
//!
//! Every command resolves to a JSON value that `main` pretty-prints.

use anyhow::{Context, Result, bail};
use dynamite_client::model::input::{
    DeleteItemInput, DeleteTableInput, DescribeLimitsInput, DescribeTableInput, GetItemInput,
    ListTablesInput, PutItemInput, ScanInput,
};
use dynamite_client::model::types::ReturnValue;
use dynamite_client::model::Item;
use dynamite_client::{DynamoDb, list_tables_stream, scan_stream};
use futures::TryStreamExt;
use serde_json::{Value, json};

use crate::cli::Command;

/// Parse a `{"name": {"S": "..."}, ...}` map.
fn parse_item(raw: &str, what: &str) -> Result<Item> {
    let item: Item = serde_json::from_str(raw)
        .with_context(|| format!("{what} is not attribute-value JSON: {raw}"))?;
    if item.is_empty() {
        bail!("{what} must name at least one attribute");
    }
    Ok(item)
}

/// Run `command` against `client`.
pub async fn run<C: DynamoDb + ?Sized>(client: &C, command: Command) -> Result<Value> {
    let value = match command {
        Command::ListTables => {
            let pages: Vec<_> = list_tables_stream(client, ListTablesInput::new())
                .try_collect()
                .await?;
            let names: Vec<String> = pages.into_iter().flat_map(|p| p.table_names).collect();
            json!({ "TableNames": names })
        }
        Command::DescribeTable { name } => {
            let out = client.describe_table(DescribeTableInput::new(name)).await?;
            serde_json::to_value(out)?
        }
        Command::GetItem {
            table,
            key,
            consistent,
        } => {
            let key = parse_item(&key, "key")?;
            let out = client
                .get_item(GetItemInput::new(table, key).with_consistent_read(consistent))
                .await?;
            match out.item {
                Some(item) => json!({ "Item": item }),
                None => json!({}),
            }
        }
        Command::PutItem { table, item } => {
            let item = parse_item(&item, "item")?;
            let out = client.put_item(PutItemInput::new(table, item)).await?;
            serde_json::to_value(out)?
        }
        Command::DeleteItem { table, key } => {
            let key = parse_item(&key, "key")?;
            let input = DeleteItemInput::new(table, key).with_return_values(ReturnValue::AllOld);
            let out = client.delete_item(input).await?;
            serde_json::to_value(out)?
        }
        Command::Scan { table, limit } => {
            let mut items: Vec<Item> = Vec::new();
            let mut pages = Box::pin(scan_stream(client, ScanInput::new(table)));
            while let Some(page) = pages.try_next().await? {
                items.extend(page.items);
                if limit.is_some_and(|l| items.len() >= l) {
                    break;
                }
            }
            if let Some(limit) = limit {
                items.truncate(limit);
            }
            json!({ "Count": items.len(), "Items": items })
        }
        Command::DeleteTable { name } => {
            let out = client.delete_table(DeleteTableInput::new(name)).await?;
            serde_json::to_value(out)?
        }
        Command::DescribeLimits => {
            let out = client.describe_limits(DescribeLimitsInput {}).await?;
            serde_json::to_value(out)?
        }
    };
    Ok(value)
}
