//! Page streams.
//!
//! Each function follows the operation's continuation cursor until the
//! service stops returning one. Pages are yielded as they arrive; an error
//! ends the stream after being yielded.

use dynamite_model::input::{ListTablesInput, QueryInput, ScanInput};
use dynamite_model::output::{ListTablesOutput, QueryOutput, ScanOutput};
use futures::Stream;
use futures::stream;

use crate::client::DynamoDb;
use crate::error::Result;

/// Pages of `ListTables`, following `LastEvaluatedTableName`.
pub fn list_tables_stream<C>(
    client: &C,
    input: ListTablesInput,
) -> impl Stream<Item = Result<ListTablesOutput>> + '_
where
    C: DynamoDb + ?Sized,
{
    stream::try_unfold(Some(input), move |next| async move {
        let Some(input) = next else {
            return Ok(None);
        };
        let page = client.list_tables(input.clone()).await?;
        let next = page
            .last_evaluated_table_name
            .clone()
            .filter(|name| !name.is_empty())
            .map(|name| input.with_exclusive_start_table_name(name));
        Ok(Some((page, next)))
    })
}

/// Pages of `Query`, following `LastEvaluatedKey`.
pub fn query_stream<C>(
    client: &C,
    input: QueryInput,
) -> impl Stream<Item = Result<QueryOutput>> + '_
where
    C: DynamoDb + ?Sized,
{
    stream::try_unfold(Some(input), move |next| async move {
        let Some(input) = next else {
            return Ok(None);
        };
        let page = client.query(input.clone()).await?;
        let next = (!page.last_evaluated_key.is_empty())
            .then(|| input.with_exclusive_start_key(page.last_evaluated_key.clone()));
        Ok(Some((page, next)))
    })
}

/// Pages of `Scan`, following `LastEvaluatedKey`.
pub fn scan_stream<C>(client: &C, input: ScanInput) -> impl Stream<Item = Result<ScanOutput>> + '_
where
    C: DynamoDb + ?Sized,
{
    stream::try_unfold(Some(input), move |next| async move {
        let Some(input) = next else {
            return Ok(None);
        };
        let page = client.scan(input.clone()).await?;
        let next = (!page.last_evaluated_key.is_empty())
            .then(|| input.with_exclusive_start_key(page.last_evaluated_key.clone()));
        Ok(Some((page, next)))
    })
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;

    use super::*;
    use crate::testing::{MockTransport, client, ok};

    #[tokio::test]
    async fn test_should_follow_table_name_cursor() {
        let transport = MockTransport::new([
            ok(r#"{"TableNames":["a","b"],"LastEvaluatedTableName":"b"}"#),
            ok(r#"{"TableNames":["c"]}"#),
        ]);
        let dynamo = client(transport.clone());

        let pages: Vec<_> = list_tables_stream(&dynamo, ListTablesInput::new().with_limit(2))
            .try_collect()
            .await
            .unwrap();
        let names: Vec<_> = pages.into_iter().flat_map(|p| p.table_names).collect();
        assert_eq!(names, vec!["a", "b", "c"]);

        let second = transport.requests()[1].json();
        assert_eq!(second["ExclusiveStartTableName"], "b");
        assert_eq!(second["Limit"], 2);
    }

    #[tokio::test]
    async fn test_should_follow_last_evaluated_key_in_query() {
        let transport = MockTransport::new([
            ok(r#"{"Items":[{"pk":{"S":"1"}}],"Count":1,"ScannedCount":1,"LastEvaluatedKey":{"pk":{"S":"1"}}}"#),
            ok(r#"{"Items":[],"Count":0,"ScannedCount":0,"LastEvaluatedKey":{}}"#),
        ]);
        let dynamo = client(transport.clone());

        let pages: Vec<_> = query_stream(
            &dynamo,
            QueryInput::new("t").with_key_condition_expression("pk = :pk"),
        )
        .try_collect()
        .await
        .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(
            transport.requests()[1].json()["ExclusiveStartKey"],
            serde_json::json!({"pk": {"S": "1"}})
        );
    }

    #[tokio::test]
    async fn test_should_stop_scan_after_error() {
        let transport = MockTransport::new([ok(
            r#"{"Items":[],"Count":0,"ScannedCount":0,"LastEvaluatedKey":{"pk":{"S":"9"}}}"#,
        )]);
        let dynamo = client(transport);
        let mut stream = Box::pin(scan_stream(&dynamo, ScanInput::new("t")));

        assert!(stream.try_next().await.unwrap().is_some());
        // The mock runs dry, so every retry of the second page fails.
        assert!(stream.try_next().await.is_err());
        assert!(stream.try_next().await.unwrap().is_none());
    }
}
