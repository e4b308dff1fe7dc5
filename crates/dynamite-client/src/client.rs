//! The async client.
//!
//! [`DynamoDb`] is the operation surface. [`DynamoDbClient`] implements it
//! over the `awsJson1_0` protocol: every call is a signed `POST /` whose
//! `X-Amz-Target` names the operation and whose body is the JSON-encoded input.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use dynamite_auth::{ChainCredentialsProvider, CredentialsProvider, SigningParams, sign_request};
use dynamite_model::error::REQUEST_ID_HEADER;
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
use dynamite_model::{DynamoDbOperation, ServiceError};
use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, StatusCode, Uri};
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ClientConfig, SERVICE_NAME};
use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Content type of every request and successful response body.
pub const CONTENT_TYPE_JSON: &str = "application/x-amz-json-1.0";

/// Header naming the operation.
pub const X_AMZ_TARGET: &str = "x-amz-target";

/// CRC32 of the response body, as a decimal `u32`.
pub const X_AMZ_CRC32: &str = "x-amz-crc32";

/// Every DynamoDB operation.
///
/// Each method takes the operation's input by value and resolves to its
/// output. The service errors an operation is documented to raise are listed
/// by [`DynamoDbOperation::declared_errors`]; any operation may also fail
/// with a [`ClientError`] or an undeclared [`ServiceError`].
#[async_trait]
pub trait DynamoDb: Send + Sync {
    /// Return the attributes of the item with the given primary key.
    ///
    /// `item` is `None` when no such item exists. Reads are eventually
    /// consistent unless `consistent_read` is set.
    async fn get_item(&self, input: GetItemInput) -> Result<GetItemOutput>;

    /// Create an item, or replace an existing item with the same primary key.
    ///
    /// A `condition_expression` makes the write conditional; when it fails the
    /// call returns `ConditionalCheckFailedException`.
    async fn put_item(&self, input: PutItemInput) -> Result<PutItemOutput>;

    /// Edit attributes of an item, creating it if it does not exist.
    async fn update_item(&self, input: UpdateItemInput) -> Result<UpdateItemOutput>;

    /// Delete a single item by primary key. Deleting a missing item succeeds.
    async fn delete_item(&self, input: DeleteItemInput) -> Result<DeleteItemOutput>;

    /// Read up to 100 items across tables in one call.
    ///
    /// Keys the service could not process come back in `unprocessed_keys`;
    /// resubmit them, ideally with backoff.
    async fn batch_get_item(&self, input: BatchGetItemInput) -> Result<BatchGetItemOutput>;

    /// Put or delete up to 25 items across tables in one call.
    ///
    /// Individual writes are not conditional and the batch is not atomic.
    /// Leftovers come back in `unprocessed_items`.
    async fn batch_write_item(&self, input: BatchWriteItemInput) -> Result<BatchWriteItemOutput>;

    /// Find items by partition key, optionally narrowed by sort key.
    ///
    /// One call returns at most 1 MB. Use
    /// [`query_stream`](crate::paginate::query_stream) to follow
    /// `last_evaluated_key`.
    async fn query(&self, input: QueryInput) -> Result<QueryOutput>;

    /// Read every item in a table or index, one page at a time.
    async fn scan(&self, input: ScanInput) -> Result<ScanOutput>;

    /// Create a table. The table is `CREATING` until it turns `ACTIVE`.
    async fn create_table(&self, input: CreateTableInput) -> Result<CreateTableOutput>;

    /// Return the table's schema, status, throughput and indexes.
    async fn describe_table(&self, input: DescribeTableInput) -> Result<DescribeTableOutput>;

    /// Change throughput, billing mode, streams or global secondary indexes.
    async fn update_table(&self, input: UpdateTableInput) -> Result<UpdateTableOutput>;

    /// Delete a table and all of its items.
    async fn delete_table(&self, input: DeleteTableInput) -> Result<DeleteTableOutput>;

    /// One page of table names owned by the caller in the region.
    async fn list_tables(&self, input: ListTablesInput) -> Result<ListTablesOutput>;

    /// Account and per-table provisioned capacity limits for the region.
    async fn describe_limits(&self, input: DescribeLimitsInput) -> Result<DescribeLimitsOutput>;

    /// Create an on-demand backup of a table.
    async fn create_backup(&self, input: CreateBackupInput) -> Result<CreateBackupOutput>;

    /// Status and details of one backup.
    async fn describe_backup(&self, input: DescribeBackupInput) -> Result<DescribeBackupOutput>;

    /// Delete an on-demand backup.
    async fn delete_backup(&self, input: DeleteBackupInput) -> Result<DeleteBackupOutput>;

    /// List backups, optionally filtered by table, type and creation time.
    async fn list_backups(&self, input: ListBackupsInput) -> Result<ListBackupsOutput>;

    /// Restore a backup into a new table.
    async fn restore_table_from_backup(
        &self,
        input: RestoreTableFromBackupInput,
    ) -> Result<RestoreTableFromBackupOutput>;

    /// Restore a table into a new table as of a point in time within the last 35 days.
    async fn restore_table_to_point_in_time(
        &self,
        input: RestoreTableToPointInTimeInput,
    ) -> Result<RestoreTableToPointInTimeOutput>;

    /// Continuous backup and point-in-time recovery status of a table.
    async fn describe_continuous_backups(
        &self,
        input: DescribeContinuousBackupsInput,
    ) -> Result<DescribeContinuousBackupsOutput>;

    /// Turn point-in-time recovery on or off.
    async fn update_continuous_backups(
        &self,
        input: UpdateContinuousBackupsInput,
    ) -> Result<UpdateContinuousBackupsOutput>;

    /// Join same-named, empty, stream-enabled tables in several regions into a global table.
    async fn create_global_table(
        &self,
        input: CreateGlobalTableInput,
    ) -> Result<CreateGlobalTableOutput>;

    /// Replicas and status of a global table.
    async fn describe_global_table(
        &self,
        input: DescribeGlobalTableInput,
    ) -> Result<DescribeGlobalTableOutput>;

    /// Add or remove replicas.
    async fn update_global_table(
        &self,
        input: UpdateGlobalTableInput,
    ) -> Result<UpdateGlobalTableOutput>;

    /// One page of global tables, optionally restricted to a region.
    async fn list_global_tables(
        &self,
        input: ListGlobalTablesInput,
    ) -> Result<ListGlobalTablesOutput>;

    /// Per-replica capacity and auto scaling settings.
    async fn describe_global_table_settings(
        &self,
        input: DescribeGlobalTableSettingsInput,
    ) -> Result<DescribeGlobalTableSettingsOutput>;

    /// Change capacity and auto scaling settings of a global table.
    async fn update_global_table_settings(
        &self,
        input: UpdateGlobalTableSettingsInput,
    ) -> Result<UpdateGlobalTableSettingsOutput>;

    /// Current TTL status and attribute of a table.
    async fn describe_time_to_live(
        &self,
        input: DescribeTimeToLiveInput,
    ) -> Result<DescribeTimeToLiveOutput>;

    /// Enable or disable expiry on a table attribute.
    ///
    /// Changes take up to an hour to propagate; repeating the same change
    /// within that window fails with `ValidationException`.
    async fn update_time_to_live(
        &self,
        input: UpdateTimeToLiveInput,
    ) -> Result<UpdateTimeToLiveOutput>;

    /// Attach up to 50 tags to a table or backup ARN.
    async fn tag_resource(&self, input: TagResourceInput) -> Result<TagResourceOutput>;

    /// Remove tags by key.
    async fn untag_resource(&self, input: UntagResourceInput) -> Result<UntagResourceOutput>;

    /// One page of tags on a resource.
    async fn list_tags_of_resource(
        &self,
        input: ListTagsOfResourceInput,
    ) -> Result<ListTagsOfResourceOutput>;
}

/// What the most recent response said about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// The operation that produced the response.
    pub operation: DynamoDbOperation,
    /// HTTP status.
    pub status: StatusCode,
    /// `x-amzn-RequestId`. Quote it when contacting support.
    pub request_id: Option<String>,
    /// `x-amz-crc32` as sent by the service.
    pub crc32: Option<u32>,
}

impl ResponseMetadata {
    fn from_headers(operation: DynamoDbOperation, status: StatusCode, headers: &HeaderMap) -> Self {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        Self {
            operation,
            status,
            request_id: header(REQUEST_ID_HEADER).map(str::to_owned),
            crc32: header(X_AMZ_CRC32).and_then(|v| v.trim().parse().ok()),
        }
    }
}

/// Builds a [`DynamoDbClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    config: ClientConfig,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    /// Sign with `provider` instead of the default environment chain.
    #[must_use]
    pub fn credentials(mut self, provider: impl CredentialsProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self
    }

    /// Send through `transport` instead of a fresh [`ReqwestTransport`].
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Resolve the endpoint and create the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] if the endpoint is invalid or
    /// the default transport cannot be built.
    pub fn build(self) -> Result<DynamoDbClient> {
        let endpoint = self.config.resolve_endpoint()?;
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };
        let credentials = self
            .credentials
            .unwrap_or_else(|| Arc::new(ChainCredentialsProvider::default_chain()));

        debug!(endpoint = %endpoint, region = %self.config.region, "dynamodb client created");
        Ok(DynamoDbClient {
            inner: Arc::new(Inner {
                config: self.config,
                endpoint,
                transport,
                credentials,
                last_metadata: Mutex::new(None),
            }),
        })
    }
}

#[derive(Debug)]
struct Inner {
    config: ClientConfig,
    endpoint: Uri,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialsProvider>,
    last_metadata: Mutex<Option<ResponseMetadata>>,
}

/// DynamoDB client over HTTP.
///
/// Cheap to clone; clones share the connection pool, the credentials
/// provider and the response metadata.
#[derive(Debug, Clone)]
pub struct DynamoDbClient {
    inner: Arc<Inner>,
}

impl DynamoDbClient {
    /// Start building a client for `config`.
    #[must_use]
    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder {
            config,
            credentials: None,
            transport: None,
        }
    }

    /// A client with explicit credentials and the default transport.
    ///
    /// # Errors
    ///
    /// See [`ClientBuilder::build`].
    pub fn new(
        config: ClientConfig,
        credentials: impl CredentialsProvider + 'static,
    ) -> Result<Self> {
        Self::builder(config).credentials(credentials).build()
    }

    /// Configuration and credentials both from the environment.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`] and [`ClientBuilder::build`].
    pub fn from_env() -> Result<Self> {
        Self::builder(ClientConfig::from_env()?).build()
    }

    /// The configuration the client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The resolved endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Uri {
        &self.inner.endpoint
    }

    /// Metadata of the most recent response, successful or not.
    #[must_use]
    pub fn last_response_metadata(&self) -> Option<ResponseMetadata> {
        self.inner.last_metadata.lock().clone()
    }

    /// Send `input` as `operation`, retrying per the configured policy.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt.
    pub async fn invoke<I, O>(&self, operation: DynamoDbOperation, input: &I) -> Result<O>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let body = Bytes::from(serde_json::to_vec(input).map_err(ClientError::Serialize)?);
        let policy = self.inner.config.retry;

        let mut retries = 0;
        loop {
            match self.attempt(operation, body.clone(), retries + 1).await {
                Ok(output) => return Ok(output),
                Err(e) if policy.should_retry(&e, retries) => {
                    let delay = policy.delay(retries);
                    warn!(
                        operation = %operation,
                        retry = retries + 1,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %e,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                    retries += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn attempt<O: DeserializeOwned>(
        &self,
        operation: DynamoDbOperation,
        body: Bytes,
        attempt: u32,
    ) -> Result<O> {
        let request = self.build_request(operation, body)?;
        let timeout = self.inner.config.request_timeout;
        let response = tokio::time::timeout(timeout, self.inner.transport.send(request))
            .await
            .map_err(|_| ClientError::Timeout(timeout))??;

        let (parts, body) = response.into_parts();
        let metadata = ResponseMetadata::from_headers(operation, parts.status, &parts.headers);
        debug!(
            operation = %operation,
            attempt,
            read = operation.is_idempotent_read(),
            status = parts.status.as_u16(),
            request_id = metadata.request_id.as_deref().unwrap_or("-"),
            bytes = body.len(),
            "received response"
        );
        let expected_crc = metadata.crc32;
        *self.inner.last_metadata.lock() = Some(metadata);

        if self.inner.config.validate_crc32 {
            if let Some(expected) = expected_crc {
                let actual = crc32fast::hash(&body);
                if actual != expected {
                    return Err(ClientError::Crc32Mismatch { expected, actual }.into());
                }
            }
        }

        if !parts.status.is_success() {
            let err = ServiceError::from_response(parts.status, &parts.headers, &body);
            if !operation.declares(&err.code) {
                debug!(operation = %operation, code = %err.code, "undeclared service error");
            }
            return Err(err.into());
        }

        let bytes: &[u8] = if body.is_empty() { b"{}" } else { &body };
        serde_json::from_slice(bytes).map_err(|e| ClientError::Deserialize(e).into())
    }

    fn build_request(
        &self,
        operation: DynamoDbOperation,
        body: Bytes,
    ) -> Result<http::Request<Bytes>> {
        let mut request = http::Request::post(self.inner.endpoint.clone())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(X_AMZ_TARGET, operation.target())
            .header(USER_AGENT, self.inner.config.user_agent.as_str())
            .body(body)
            .map_err(|e| ClientError::InvalidConfig(format!("request: {e}")))?;

        let credentials = self.inner.credentials.provide_credentials()?;
        sign_request(
            &mut request,
            &SigningParams {
                credentials: &credentials,
                region: self.inner.config.region.as_str(),
                service: SERVICE_NAME,
                time: Utc::now(),
            },
        )?;
        Ok(request)
    }
}

macro_rules! dispatch {
    ($($method:ident($input:ty) -> $output:ty = $op:ident;)+) => {
        #[async_trait]
        impl DynamoDb for DynamoDbClient {
            $(
                async fn $method(&self, input: $input) -> Result<$output> {
                    self.invoke(DynamoDbOperation::$op, &input).await
                }
            )+
        }
    };
}

dispatch! {
    get_item(GetItemInput) -> GetItemOutput = GetItem;
    put_item(PutItemInput) -> PutItemOutput = PutItem;
    update_item(UpdateItemInput) -> UpdateItemOutput = UpdateItem;
    delete_item(DeleteItemInput) -> DeleteItemOutput = DeleteItem;
    batch_get_item(BatchGetItemInput) -> BatchGetItemOutput = BatchGetItem;
    batch_write_item(BatchWriteItemInput) -> BatchWriteItemOutput = BatchWriteItem;
    query(QueryInput) -> QueryOutput = Query;
    scan(ScanInput) -> ScanOutput = Scan;
    create_table(CreateTableInput) -> CreateTableOutput = CreateTable;
    describe_table(DescribeTableInput) -> DescribeTableOutput = DescribeTable;
    update_table(UpdateTableInput) -> UpdateTableOutput = UpdateTable;
    delete_table(DeleteTableInput) -> DeleteTableOutput = DeleteTable;
    list_tables(ListTablesInput) -> ListTablesOutput = ListTables;
    describe_limits(DescribeLimitsInput) -> DescribeLimitsOutput = DescribeLimits;
    create_backup(CreateBackupInput) -> CreateBackupOutput = CreateBackup;
    describe_backup(DescribeBackupInput) -> DescribeBackupOutput = DescribeBackup;
    delete_backup(DeleteBackupInput) -> DeleteBackupOutput = DeleteBackup;
    list_backups(ListBackupsInput) -> ListBackupsOutput = ListBackups;
    restore_table_from_backup(RestoreTableFromBackupInput) -> RestoreTableFromBackupOutput = RestoreTableFromBackup;
    restore_table_to_point_in_time(RestoreTableToPointInTimeInput) -> RestoreTableToPointInTimeOutput = RestoreTableToPointInTime;
    describe_continuous_backups(DescribeContinuousBackupsInput) -> DescribeContinuousBackupsOutput = DescribeContinuousBackups;
    update_continuous_backups(UpdateContinuousBackupsInput) -> UpdateContinuousBackupsOutput = UpdateContinuousBackups;
    create_global_table(CreateGlobalTableInput) -> CreateGlobalTableOutput = CreateGlobalTable;
    describe_global_table(DescribeGlobalTableInput) -> DescribeGlobalTableOutput = DescribeGlobalTable;
    update_global_table(UpdateGlobalTableInput) -> UpdateGlobalTableOutput = UpdateGlobalTable;
    list_global_tables(ListGlobalTablesInput) -> ListGlobalTablesOutput = ListGlobalTables;
    describe_global_table_settings(DescribeGlobalTableSettingsInput) -> DescribeGlobalTableSettingsOutput = DescribeGlobalTableSettings;
    update_global_table_settings(UpdateGlobalTableSettingsInput) -> UpdateGlobalTableSettingsOutput = UpdateGlobalTableSettings;
    describe_time_to_live(DescribeTimeToLiveInput) -> DescribeTimeToLiveOutput = DescribeTimeToLive;
    update_time_to_live(UpdateTimeToLiveInput) -> UpdateTimeToLiveOutput = UpdateTimeToLive;
    tag_resource(TagResourceInput) -> TagResourceOutput = TagResource;
    untag_resource(UntagResourceInput) -> UntagResourceOutput = UntagResource;
    list_tags_of_resource(ListTagsOfResourceInput) -> ListTagsOfResourceOutput = ListTagsOfResource;
}
