//! Error mapping over HTTP: service errors, signature rejects, transport
//! failures.

#[cfg(test)]
mod tests {
    use dynamite_client::model::ServiceErrorCode;
    use dynamite_client::model::input::{DescribeLimitsInput, DescribeTableInput, PutItemInput};
    use dynamite_client::model::{AttributeValue, Item};
    use dynamite_client::{ClientError, DynamoDb, DynamoDbError};

    use crate::{StubServer, create_simple_table, simple_table, stub_client, stub_client_with};

    #[tokio::test]
    async fn test_should_map_missing_table_to_resource_not_found() {
        let server = StubServer::start();
        let client = stub_client(&server);

        let err = client
            .describe_table(DescribeTableInput::new("nope"))
            .await
            .expect_err("describe missing table");

        assert_eq!(err.code(), Some(&ServiceErrorCode::ResourceNotFoundException));
        assert!(err.request_id().is_some_and(|id| id.starts_with("STUB-")));
        assert!(err.to_string().contains("nope"));
        // Not retryable, so exactly one attempt.
        assert_eq!(server.targets().len(), 1);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_table() {
        let server = StubServer::start();
        let client = stub_client(&server);
        create_simple_table(&client, "dup").await;

        let err = client
            .create_table(simple_table("dup"))
            .await
            .expect_err("second create");
        assert_eq!(err.code(), Some(&ServiceErrorCode::ResourceInUseException));
    }

    #[tokio::test]
    async fn test_should_report_validation_error_for_missing_key() {
        let server = StubServer::start();
        let client = stub_client(&server);
        create_simple_table(&client, "keys").await;

        let item = Item::from([("other".to_owned(), AttributeValue::from("x"))]);
        let err = client
            .put_item(PutItemInput::new("keys", item))
            .await
            .expect_err("put without key");
        assert_eq!(err.code(), Some(&ServiceErrorCode::ValidationException));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_should_surface_bad_signature() {
        let server = StubServer::start();
        let client = stub_client_with(&server, crate::ACCESS_KEY, "wrong-secret");

        let err = client
            .describe_limits(DescribeLimitsInput::default())
            .await
            .expect_err("bad secret");

        assert_eq!(err.code(), Some(&ServiceErrorCode::InvalidSignatureException));
        assert_eq!(server.rejected_signatures(), 1);
        assert!(server.targets().is_empty());
    }

    #[tokio::test]
    async fn test_should_give_up_when_throttling_persists() {
        let server = StubServer::start();
        let client = stub_client(&server);
        server.throttle_next(10);

        let err = client
            .describe_limits(DescribeLimitsInput::default())
            .await
            .expect_err("throttled");

        assert!(err.is_throttling());
        assert_eq!(
            err.code(),
            Some(&ServiceErrorCode::ProvisionedThroughputExceededException)
        );
        // One attempt plus three retries.
        assert_eq!(server.targets().len(), 4);
    }

    #[tokio::test]
    async fn test_should_fail_with_transport_error_when_nothing_listens() {
        let server = StubServer::start();
        let client = stub_client(&server);
        drop(server);

        let err = client
            .describe_limits(DescribeLimitsInput::default())
            .await
            .expect_err("connection refused");

        assert!(matches!(err, DynamoDbError::Client(ClientError::Transport(_))));
        assert!(err.code().is_none());
        assert!(err.is_retryable());
    }
}
