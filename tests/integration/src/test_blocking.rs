//! Blocking client tests over HTTP against the stub server.

#[cfg(test)]
mod tests {
    use dynamite_client::model::input::{DescribeTableInput, GetItemInput, PutItemInput};
    use dynamite_client::model::{AttributeValue, Key, ServiceErrorCode};

    use crate::{StubServer, simple_table, stub_blocking_client, test_item};

    #[test]
    fn test_should_drive_item_lifecycle_without_async_caller() {
        let server = StubServer::start();
        let client = stub_blocking_client(&server);

        client.create_table(simple_table("blocking")).expect("create table");
        client
            .put_item(PutItemInput::new("blocking", test_item("a", 7)))
            .expect("put item");

        let key = Key::from([("pk".to_owned(), AttributeValue::from("a"))]);
        let got = client
            .get_item(GetItemInput::new("blocking", key))
            .expect("get item");
        assert_eq!(got.item, Some(test_item("a", 7)));

        let meta = client.last_response_metadata().expect("metadata");
        assert!(meta.request_id.is_some());
    }

    #[test]
    fn test_should_list_all_tables_across_pages() {
        let server = StubServer::start();
        let client = stub_blocking_client(&server);
        for i in 0..3 {
            client
                .create_table(simple_table(&format!("b{i}")))
                .expect("create table");
        }

        assert_eq!(client.list_all_tables().expect("list"), vec!["b0", "b1", "b2"]);
    }

    #[test]
    fn test_should_return_service_errors() {
        let server = StubServer::start();
        let client = stub_blocking_client(&server);

        let err = client
            .describe_table(DescribeTableInput::new("missing"))
            .expect_err("missing table");
        assert_eq!(err.code(), Some(&ServiceErrorCode::ResourceNotFoundException));
    }
}
