//! DynamoDB operation enum.

use std::fmt;

use crate::error::ServiceErrorCode;

/// Prefix of the `X-Amz-Target` header for API version 2012-08-10.
pub const TARGET_PREFIX: &str = "DynamoDB_20120810.";

macro_rules! operations {
    ($( $(#[$meta:meta])* $variant:ident, )+) => {
        /// All DynamoDB operations this client can invoke.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DynamoDbOperation {
            $( $(#[$meta])* $variant, )+
        }

        impl DynamoDbOperation {
            /// Every operation, in declaration order.
            pub const ALL: &'static [DynamoDbOperation] = &[$(Self::$variant,)+];

            /// Returns the AWS operation name string.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            /// Parse an operation name string into a `DynamoDbOperation`.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

operations! {
    // Batch
    /// Read items from one or more tables by primary key.
    BatchGetItem,
    /// Put or delete items in one or more tables.
    BatchWriteItem,

    // Backups
    /// Create an on-demand backup of a table.
    CreateBackup,
    /// Delete an on-demand backup.
    DeleteBackup,
    /// Describe an on-demand backup.
    DescribeBackup,
    /// List on-demand backups.
    ListBackups,
    /// Restore a new table from an on-demand backup.
    RestoreTableFromBackup,
    /// Restore a new table to a point in time.
    RestoreTableToPointInTime,
    /// Describe continuous backups and point-in-time recovery.
    DescribeContinuousBackups,
    /// Enable or disable point-in-time recovery.
    UpdateContinuousBackups,

    // Global tables
    /// Create a global table from existing regional tables.
    CreateGlobalTable,
    /// Describe a global table.
    DescribeGlobalTable,
    /// Describe the settings of a global table.
    DescribeGlobalTableSettings,
    /// List global tables.
    ListGlobalTables,
    /// Add or remove replicas of a global table.
    UpdateGlobalTable,
    /// Update the settings of a global table.
    UpdateGlobalTableSettings,

    // Table management
    /// Create a new table.
    CreateTable,
    /// Delete a table.
    DeleteTable,
    /// Describe a table.
    DescribeTable,
    /// List table names.
    ListTables,
    /// Modify throughput, streams or indexes of a table.
    UpdateTable,
    /// Describe the account's provisioned capacity limits.
    DescribeLimits,

    // Item CRUD
    /// Get an item by primary key.
    GetItem,
    /// Put (insert or replace) an item.
    PutItem,
    /// Update an item.
    UpdateItem,
    /// Delete an item by primary key.
    DeleteItem,

    // Query & Scan
    /// Query items by key condition.
    Query,
    /// Scan all items in a table or index.
    Scan,

    // Time to live
    /// Describe the TTL settings of a table.
    DescribeTimeToLive,
    /// Enable or disable TTL on a table.
    UpdateTimeToLive,

    // Tagging
    /// List tags on a resource.
    ListTagsOfResource,
    /// Add tags to a resource.
    TagResource,
    /// Remove tags from a resource.
    UntagResource,
}

impl DynamoDbOperation {
    /// Returns the `X-Amz-Target` header value for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}{}", self.as_str())
    }

    /// Parse an `X-Amz-Target` header value.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        target
            .strip_prefix(TARGET_PREFIX)
            .and_then(Self::from_name)
    }

    /// Returns `true` for operations that only read state.
    #[must_use]
    pub fn is_idempotent_read(&self) -> bool {
        matches!(
            self,
            Self::BatchGetItem
                | Self::GetItem
                | Self::Query
                | Self::Scan
                | Self::DescribeBackup
                | Self::DescribeContinuousBackups
                | Self::DescribeGlobalTable
                | Self::DescribeGlobalTableSettings
                | Self::DescribeLimits
                | Self::DescribeTable
                | Self::DescribeTimeToLive
                | Self::ListBackups
                | Self::ListGlobalTables
                | Self::ListTables
                | Self::ListTagsOfResource
        )
    }

    /// Service error codes this operation is documented to raise.
    ///
    /// Protocol-level errors (validation, authentication, throttling of the
    /// control plane) can occur on any operation and are not listed.
    #[must_use]
    pub fn declared_errors(&self) -> &'static [ServiceErrorCode] {
        use ServiceErrorCode as E;

        match self {
            Self::BatchGetItem | Self::GetItem | Self::Query | Self::Scan => &[
                E::ProvisionedThroughputExceededException,
                E::ResourceNotFoundException,
                E::InternalServerError,
            ],
            Self::BatchWriteItem => &[
                E::ProvisionedThroughputExceededException,
                E::ResourceNotFoundException,
                E::ItemCollectionSizeLimitExceededException,
                E::InternalServerError,
            ],
            Self::PutItem | Self::UpdateItem | Self::DeleteItem => &[
                E::ConditionalCheckFailedException,
                E::ProvisionedThroughputExceededException,
                E::ResourceNotFoundException,
                E::ItemCollectionSizeLimitExceededException,
                E::InternalServerError,
            ],
            Self::CreateBackup => &[
                E::TableNotFoundException,
                E::TableInUseException,
                E::ContinuousBackupsUnavailableException,
                E::BackupInUseException,
                E::LimitExceededException,
                E::InternalServerError,
            ],
            Self::DeleteBackup => &[
                E::BackupNotFoundException,
                E::BackupInUseException,
                E::LimitExceededException,
                E::InternalServerError,
            ],
            Self::DescribeBackup => &[E::BackupNotFoundException, E::InternalServerError],
            Self::RestoreTableFromBackup => &[
                E::TableAlreadyExistsException,
                E::TableInUseException,
                E::BackupNotFoundException,
                E::BackupInUseException,
                E::LimitExceededException,
                E::InternalServerError,
            ],
            Self::RestoreTableToPointInTime => &[
                E::TableAlreadyExistsException,
                E::TableNotFoundException,
                E::TableInUseException,
                E::LimitExceededException,
                E::InvalidRestoreTimeException,
                E::PointInTimeRecoveryUnavailableException,
                E::InternalServerError,
            ],
            Self::DescribeContinuousBackups => {
                &[E::TableNotFoundException, E::InternalServerError]
            }
            Self::UpdateContinuousBackups => &[
                E::TableNotFoundException,
                E::ContinuousBackupsUnavailableException,
                E::InternalServerError,
            ],
            Self::CreateGlobalTable => &[
                E::LimitExceededException,
                E::InternalServerError,
                E::GlobalTableAlreadyExistsException,
                E::TableNotFoundException,
            ],
            Self::DescribeGlobalTable | Self::DescribeGlobalTableSettings => {
                &[E::InternalServerError, E::GlobalTableNotFoundException]
            }
            Self::UpdateGlobalTable => &[
                E::InternalServerError,
                E::GlobalTableNotFoundException,
                E::ReplicaAlreadyExistsException,
                E::ReplicaNotFoundException,
                E::TableNotFoundException,
            ],
            Self::UpdateGlobalTableSettings => &[
                E::GlobalTableNotFoundException,
                E::ReplicaNotFoundException,
                E::IndexNotFoundException,
                E::LimitExceededException,
                E::ResourceInUseException,
                E::InternalServerError,
            ],
            Self::CreateTable => &[
                E::ResourceInUseException,
                E::LimitExceededException,
                E::InternalServerError,
            ],
            Self::DeleteTable | Self::UpdateTable | Self::UpdateTimeToLive => &[
                E::ResourceInUseException,
                E::ResourceNotFoundException,
                E::LimitExceededException,
                E::InternalServerError,
            ],
            Self::DescribeTable | Self::DescribeTimeToLive | Self::ListTagsOfResource => {
                &[E::ResourceNotFoundException, E::InternalServerError]
            }
            Self::ListBackups
            | Self::ListGlobalTables
            | Self::ListTables
            | Self::DescribeLimits => &[E::InternalServerError],
            Self::TagResource | Self::UntagResource => &[
                E::LimitExceededException,
                E::ResourceNotFoundException,
                E::InternalServerError,
                E::ResourceInUseException,
            ],
        }
    }

    /// Returns `true` if `code` is in this operation's declared error set.
    #[must_use]
    pub fn declares(&self, code: &ServiceErrorCode) -> bool {
        self.declared_errors().contains(code)
    }
}

impl fmt::Display for DynamoDbOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_cover_every_wire_operation() {
        assert_eq!(DynamoDbOperation::ALL.len(), 33);
    }

    #[test]
    fn test_should_round_trip_every_operation_name() {
        for op in DynamoDbOperation::ALL {
            assert_eq!(DynamoDbOperation::from_name(op.as_str()), Some(*op));
            assert_eq!(DynamoDbOperation::from_target(&op.target()), Some(*op));
        }
        assert_eq!(DynamoDbOperation::from_name("TransactWriteItems"), None);
    }

    #[test]
    fn test_should_prefix_target_with_api_version() {
        assert_eq!(
            DynamoDbOperation::PutItem.target(),
            "DynamoDB_20120810.PutItem"
        );
        assert_eq!(DynamoDbOperation::from_target("DynamoDB_20111205.PutItem"), None);
    }

    #[test]
    fn test_should_declare_errors_per_operation() {
        assert!(DynamoDbOperation::PutItem.declares(&ServiceErrorCode::ConditionalCheckFailedException));
        assert!(!DynamoDbOperation::GetItem.declares(&ServiceErrorCode::ConditionalCheckFailedException));
        assert!(DynamoDbOperation::BatchWriteItem.declares(&ServiceErrorCode::ItemCollectionSizeLimitExceededException));
        assert!(DynamoDbOperation::RestoreTableToPointInTime.declares(&ServiceErrorCode::InvalidRestoreTimeException));
        assert!(DynamoDbOperation::UpdateGlobalTableSettings.declares(&ServiceErrorCode::IndexNotFoundException));
        assert_eq!(
            DynamoDbOperation::DescribeLimits.declared_errors(),
            &[ServiceErrorCode::InternalServerError]
        );
    }

    #[test]
    fn test_should_declare_internal_server_error_everywhere() {
        for op in DynamoDbOperation::ALL {
            assert!(op.declares(&ServiceErrorCode::InternalServerError), "{op}");
        }
    }

    #[test]
    fn test_should_flag_read_operations() {
        assert!(DynamoDbOperation::Query.is_idempotent_read());
        assert!(DynamoDbOperation::ListTagsOfResource.is_idempotent_read());
        assert!(!DynamoDbOperation::PutItem.is_idempotent_read());
        assert!(!DynamoDbOperation::RestoreTableFromBackup.is_idempotent_read());
    }
}
