//! Blocking facade over [`DynamoDbClient`].
//!
//! Each call runs the async operation to completion on a tokio runtime owned
//! (or shared) by the [`BlockingClient`]. Calling it from inside an async
//! context panics, as `Runtime::block_on` does; use [`DynamoDbClient`] there.

use std::sync::Arc;

use dynamite_model::input::{
    BatchGetItemInput, BatchWriteItemInput, CreateBackupInput, CreateGlobalTableInput,
    CreateTableInput, DeleteBackupInput, DeleteItemInput, DeleteTableInput, DescribeBackupInput,
    DescribeContinuousBackupsInput, DescribeGlobalTableInput, DescribeGlobalTableSettingsInput,
    DescribeLimitsInput, DescribeTableInput, DescribeTimeToLiveInput, GetItemInput,
    ListBackupsInput, ListGlobalTablesInput, ListTablesInput, ListTagsOfResourceInput,
    PutItemInput, QueryInput, RestoreTableFromBackupInput, RestoreTableToPointInTimeInput,
    ScanInput, TagResourceInput, UntagResourceInput, UpdateContinuousBackupsInput,
    UpdateGlobalTableInput, UpdateGlobalTableSettingsInput, UpdateItemInput, UpdateTableInput,
    UpdateTimeToLiveInput,
};
use dynamite_model::output::{
    BatchGetItemOutput, BatchWriteItemOutput, CreateBackupOutput, CreateGlobalTableOutput,
    CreateTableOutput, DeleteBackupOutput, DeleteItemOutput, DeleteTableOutput,
    DescribeBackupOutput, DescribeContinuousBackupsOutput, DescribeGlobalTableOutput,
    DescribeGlobalTableSettingsOutput, DescribeLimitsOutput, DescribeTableOutput,
    DescribeTimeToLiveOutput, GetItemOutput, ListBackupsOutput, ListGlobalTablesOutput,
    ListTablesOutput, ListTagsOfResourceOutput, PutItemOutput, QueryOutput,
    RestoreTableFromBackupOutput, RestoreTableToPointInTimeOutput, ScanOutput, TagResourceOutput,
    UntagResourceOutput, UpdateContinuousBackupsOutput, UpdateGlobalTableOutput,
    UpdateGlobalTableSettingsOutput, UpdateItemOutput, UpdateTableOutput, UpdateTimeToLiveOutput,
};
use tokio::runtime::Runtime;

use crate::client::{DynamoDb, DynamoDbClient, ResponseMetadata};
use crate::error::{ClientError, Result};

/// Synchronous DynamoDB client.
#[derive(Debug, Clone)]
pub struct BlockingClient {
    client: DynamoDbClient,
    runtime: Arc<Runtime>,
}

impl BlockingClient {
    /// Wrap `client` with a new multi-thread runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Runtime`] if the runtime cannot start.
    pub fn new(client: DynamoDbClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("dynamite-blocking")
            .build()
            .map_err(ClientError::Runtime)?;
        Ok(Self::with_runtime(client, Arc::new(runtime)))
    }

    /// Wrap `client`, driving calls on an existing runtime.
    #[must_use]
    pub fn with_runtime(client: DynamoDbClient, runtime: Arc<Runtime>) -> Self {
        Self { client, runtime }
    }

    /// Configuration and credentials from the environment.
    ///
    /// # Errors
    ///
    /// See [`DynamoDbClient::from_env`] and [`BlockingClient::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(DynamoDbClient::from_env()?)
    }

    /// The wrapped async client.
    #[must_use]
    pub fn async_client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// See [`DynamoDbClient::last_response_metadata`].
    #[must_use]
    pub fn last_response_metadata(&self) -> Option<ResponseMetadata> {
        self.client.last_response_metadata()
    }

    /// Every table name, following `LastEvaluatedTableName` to the end.
    ///
    /// # Errors
    ///
    /// Returns the first failing page's error.
    pub fn list_all_tables(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut input = ListTablesInput::new();
        loop {
            let page = self.list_tables(input.clone())?;
            names.extend(page.table_names);
            match page.last_evaluated_table_name {
                Some(last) if !last.is_empty() => {
                    input = input.with_exclusive_start_table_name(last);
                }
                _ => return Ok(names),
            }
        }
    }
}

macro_rules! blocking {
    ($($method:ident($input:ty) -> $output:ty;)+) => {
        impl BlockingClient {
            $(
                #[doc = concat!("Blocking form of [`DynamoDb::", stringify!($method), "`].")]
                ///
                /// # Errors
                ///
                /// Same as the async operation.
                pub fn $method(&self, input: $input) -> Result<$output> {
                    self.runtime.block_on(self.client.$method(input))
                }
            )+
        }
    };
}

blocking! {
    get_item(GetItemInput) -> GetItemOutput;
    put_item(PutItemInput) -> PutItemOutput;
    update_item(UpdateItemInput) -> UpdateItemOutput;
    delete_item(DeleteItemInput) -> DeleteItemOutput;
    batch_get_item(BatchGetItemInput) -> BatchGetItemOutput;
    batch_write_item(BatchWriteItemInput) -> BatchWriteItemOutput;
    query(QueryInput) -> QueryOutput;
    scan(ScanInput) -> ScanOutput;
    create_table(CreateTableInput) -> CreateTableOutput;
    describe_table(DescribeTableInput) -> DescribeTableOutput;
    update_table(UpdateTableInput) -> UpdateTableOutput;
    delete_table(DeleteTableInput) -> DeleteTableOutput;
    list_tables(ListTablesInput) -> ListTablesOutput;
    describe_limits(DescribeLimitsInput) -> DescribeLimitsOutput;
    create_backup(CreateBackupInput) -> CreateBackupOutput;
    describe_backup(DescribeBackupInput) -> DescribeBackupOutput;
    delete_backup(DeleteBackupInput) -> DeleteBackupOutput;
    list_backups(ListBackupsInput) -> ListBackupsOutput;
    restore_table_from_backup(RestoreTableFromBackupInput) -> RestoreTableFromBackupOutput;
    restore_table_to_point_in_time(RestoreTableToPointInTimeInput) -> RestoreTableToPointInTimeOutput;
    describe_continuous_backups(DescribeContinuousBackupsInput) -> DescribeContinuousBackupsOutput;
    update_continuous_backups(UpdateContinuousBackupsInput) -> UpdateContinuousBackupsOutput;
    create_global_table(CreateGlobalTableInput) -> CreateGlobalTableOutput;
    describe_global_table(DescribeGlobalTableInput) -> DescribeGlobalTableOutput;
    update_global_table(UpdateGlobalTableInput) -> UpdateGlobalTableOutput;
    list_global_tables(ListGlobalTablesInput) -> ListGlobalTablesOutput;
    describe_global_table_settings(DescribeGlobalTableSettingsInput) -> DescribeGlobalTableSettingsOutput;
    update_global_table_settings(UpdateGlobalTableSettingsInput) -> UpdateGlobalTableSettingsOutput;
    describe_time_to_live(DescribeTimeToLiveInput) -> DescribeTimeToLiveOutput;
    update_time_to_live(UpdateTimeToLiveInput) -> UpdateTimeToLiveOutput;
    tag_resource(TagResourceInput) -> TagResourceOutput;
    untag_resource(UntagResourceInput) -> UntagResourceOutput;
    list_tags_of_resource(ListTagsOfResourceInput) -> ListTagsOfResourceOutput;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockTransport, client, ok};

    #[test]
    fn test_should_run_operations_without_an_async_caller() {
        let transport = MockTransport::new([
            ok(r#"{"TableNames":["a"],"LastEvaluatedTableName":"a"}"#),
            ok(r#"{"TableNames":["b"]}"#),
        ]);
        let runtime = Arc::new(
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap(),
        );
        let blocking = BlockingClient::with_runtime(client(transport.clone()), runtime);

        assert_eq!(blocking.list_all_tables().unwrap(), vec!["a", "b"]);
        assert_eq!(transport.requests().len(), 2);
        assert!(blocking.last_response_metadata().is_some());
    }
}
