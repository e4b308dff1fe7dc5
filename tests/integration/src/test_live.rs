//! Smoke tests against a live endpoint (DynamoDB or DynamoDB Local).
//!
//! Configuration and credentials come from the environment, as for
//! [`DynamoDbClient::from_env`](dynamite_client::DynamoDbClient::from_env).

#[cfg(test)]
mod tests {
    use dynamite_client::model::input::{
        DeleteTableInput, DescribeTableInput, GetItemInput, ListTablesInput, PutItemInput,
    };
    use dynamite_client::model::{AttributeValue, Key};
    use dynamite_client::{DynamoDb, DynamoDbClient, list_tables_stream};
    use futures::TryStreamExt;

    use crate::{init_tracing, simple_table, test_item};

    fn live_client() -> DynamoDbClient {
        init_tracing();
        DynamoDbClient::from_env().unwrap_or_else(|e| panic!("failed to configure client: {e}"))
    }

    #[tokio::test]
    #[ignore = "requires a live endpoint"]
    async fn test_should_list_tables_live() {
        let client = live_client();
        let pages: Vec<_> = list_tables_stream(&client, ListTablesInput::new())
            .try_collect()
            .await
            .expect("list tables");
        assert!(!pages.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires a live endpoint"]
    async fn test_should_round_trip_item_live() {
        let client = live_client();
        let name = format!("dynamite-it-{}", std::process::id());

        client
            .create_table(simple_table(&name))
            .await
            .unwrap_or_else(|e| panic!("failed to create table {name}: {e}"));

        // DynamoDB Local is ACTIVE immediately; the real service needs a moment.
        for _ in 0..30 {
            let desc = client
                .describe_table(DescribeTableInput::new(&name))
                .await
                .expect("describe table");
            if desc.table.is_some_and(|t| t.is_active()) {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_secs(1)).await;
        }

        client
            .put_item(PutItemInput::new(&name, test_item("live", 1)))
            .await
            .expect("put item");
        let key = Key::from([("pk".to_owned(), AttributeValue::from("live"))]);
        let got = client
            .get_item(GetItemInput::new(&name, key).with_consistent_read(true))
            .await
            .expect("get item");

        let _ = client.delete_table(DeleteTableInput::new(&name)).await;
        assert_eq!(got.item, Some(test_item("live", 1)));
    }
}
