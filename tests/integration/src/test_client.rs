//! Async client tests over HTTP against the stub server.

#[cfg(test)]
mod tests {
    use dynamite_client::model::input::{
        DeleteItemInput, DeleteTableInput, DescribeLimitsInput, DescribeTableInput, GetItemInput,
        ListTablesInput, PutItemInput, ScanInput, TagResourceInput, UntagResourceInput,
    };
    use dynamite_client::model::types::{ReturnValue, TableStatus, Tag};
    use dynamite_client::model::{AttributeValue, DynamoDbOperation, Key};
    use dynamite_client::{DynamoDb, list_tables_stream, scan_stream};
    use futures::TryStreamExt;
    use http::StatusCode;

    use crate::{StubServer, create_simple_table, stub_client, test_item};

    fn key(pk: &str) -> Key {
        Key::from([("pk".to_owned(), AttributeValue::from(pk))])
    }

    #[tokio::test]
    async fn test_should_create_and_describe_table() {
        let server = StubServer::start();
        let client = stub_client(&server);

        let created = client
            .create_table(crate::simple_table("users"))
            .await
            .expect("create table");
        let desc = created.table_description.expect("table description");
        assert_eq!(desc.table_name.as_deref(), Some("users"));
        assert_eq!(desc.key_schema.len(), 1);

        let described = client
            .describe_table(DescribeTableInput::new("users"))
            .await
            .expect("describe table");
        let table = described.table.expect("table");
        assert!(table.is_active());
        assert_eq!(table.item_count, Some(0));

        assert_eq!(server.targets(), vec!["CreateTable", "DescribeTable"]);
        assert_eq!(server.rejected_signatures(), 0);
    }

    #[tokio::test]
    async fn test_should_record_response_metadata() {
        let server = StubServer::start();
        let client = stub_client(&server);

        client
            .describe_limits(DescribeLimitsInput::default())
            .await
            .expect("describe limits");

        let meta = client.last_response_metadata().expect("metadata");
        assert_eq!(meta.operation, DynamoDbOperation::DescribeLimits);
        assert_eq!(meta.status, StatusCode::OK);
        assert_eq!(meta.request_id.as_deref(), Some("STUB-0001"));
        assert!(meta.crc32.is_some());
    }

    #[tokio::test]
    async fn test_should_put_get_and_delete_item() {
        let server = StubServer::start();
        let client = stub_client(&server);
        create_simple_table(&client, "items").await;

        let first = client
            .put_item(PutItemInput::new("items", test_item("a", 1)))
            .await
            .expect("first put");
        assert!(first.attributes.is_empty());

        let replaced = client
            .put_item(
                PutItemInput::new("items", test_item("a", 2))
                    .with_return_values(ReturnValue::AllOld),
            )
            .await
            .expect("second put");
        assert_eq!(replaced.attributes.get("n"), Some(&AttributeValue::number(1)));

        let got = client
            .get_item(GetItemInput::new("items", key("a")).with_consistent_read(true))
            .await
            .expect("get item");
        assert_eq!(got.item, Some(test_item("a", 2)));

        let deleted = client
            .delete_item(
                DeleteItemInput::new("items", key("a")).with_return_values(ReturnValue::AllOld),
            )
            .await
            .expect("delete item");
        assert_eq!(deleted.attributes, test_item("a", 2));

        let gone = client
            .get_item(GetItemInput::new("items", key("a")))
            .await
            .expect("get after delete");
        assert!(gone.item.is_none());
    }

    #[tokio::test]
    async fn test_should_follow_list_tables_cursor() {
        let server = StubServer::start();
        let client = stub_client(&server);
        for name in ["t1", "t2", "t3", "t4", "t5"] {
            create_simple_table(&client, name).await;
        }

        let pages: Vec<_> = list_tables_stream(&client, ListTablesInput::new().with_limit(2))
            .try_collect()
            .await
            .expect("list tables");
        assert_eq!(pages.len(), 3);

        let names: Vec<String> = pages.into_iter().flat_map(|p| p.table_names).collect();
        assert_eq!(names, vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[tokio::test]
    async fn test_should_scan_every_page() {
        let server = StubServer::start();
        let client = stub_client(&server);
        create_simple_table(&client, "scan").await;
        for i in 0..7 {
            client
                .put_item(PutItemInput::new("scan", test_item(&format!("k{i}"), i)))
                .await
                .expect("put item");
        }

        let pages: Vec<_> = scan_stream(&client, ScanInput::new("scan").with_limit(3))
            .try_collect()
            .await
            .expect("scan");
        assert_eq!(pages.iter().map(|p| p.count).collect::<Vec<_>>(), vec![3, 3, 1]);
        assert!(pages.last().expect("last page").last_evaluated_key.is_empty());

        let total: usize = pages.iter().map(|p| p.items.len()).sum();
        assert_eq!(total, 7);
    }

    #[tokio::test]
    async fn test_should_accept_empty_bodies_for_tagging() {
        let server = StubServer::start();
        let client = stub_client(&server);
        let arn = "arn:aws:dynamodb:us-east-1:000000000000:table/tags";

        client
            .tag_resource(TagResourceInput::new(arn, vec![Tag::new("env", "test")]))
            .await
            .expect("tag resource");
        client
            .untag_resource(UntagResourceInput::new(arn, vec!["env".to_owned()]))
            .await
            .expect("untag resource");

        assert_eq!(server.targets(), vec!["TagResource", "UntagResource"]);
    }

    #[tokio::test]
    async fn test_should_retry_through_throttling() {
        let server = StubServer::start();
        let client = stub_client(&server);
        server.throttle_next(2);

        let limits = client
            .describe_limits(DescribeLimitsInput::default())
            .await
            .expect("describe limits after retries");
        assert_eq!(limits.account_max_read_capacity_units, Some(80_000));
        assert_eq!(server.targets().len(), 3);
    }

    #[tokio::test]
    async fn test_should_delete_table() {
        let server = StubServer::start();
        let client = stub_client(&server);
        create_simple_table(&client, "doomed").await;

        let out = client
            .delete_table(DeleteTableInput::new("doomed"))
            .await
            .expect("delete table");
        let desc = out.table_description.expect("table description");
        assert_eq!(desc.table_status, Some(TableStatus::Deleting));

        let listed = client
            .list_tables(ListTablesInput::new())
            .await
            .expect("list tables");
        assert!(listed.table_names.is_empty());
    }
}
