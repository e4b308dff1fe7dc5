//! Backups, restores and continuous backups.

use serde::{Deserialize, Serialize};

use crate::types::{BackupTypeFilter, PointInTimeRecoverySpecification};

/// Input for `CreateBackup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBackupInput {
    pub table_name: String,
    pub backup_name: String,
}

impl CreateBackupInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, backup_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            backup_name: backup_name.into(),
        }
    }
}

/// Input for `DescribeBackup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupInput {
    pub backup_arn: String,
}

impl DescribeBackupInput {
    #[must_use]
    pub fn new(backup_arn: impl Into<String>) -> Self {
        Self {
            backup_arn: backup_arn.into(),
        }
    }
}

/// Input for `DeleteBackup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBackupInput {
    pub backup_arn: String,
}

impl DeleteBackupInput {
    #[must_use]
    pub fn new(backup_arn: impl Into<String>) -> Self {
        Self {
            backup_arn: backup_arn.into(),
        }
    }
}

/// Input for `ListBackups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBackupsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Inclusive lower bound on creation time, epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range_lower_bound: Option<f64>,
    /// Exclusive upper bound on creation time, epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range_upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_backup_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<BackupTypeFilter>,
}

impl ListBackupsInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_time_range(mut self, lower: f64, upper: f64) -> Self {
        self.time_range_lower_bound = Some(lower);
        self.time_range_upper_bound = Some(upper);
        self
    }

    #[must_use]
    pub fn with_exclusive_start_backup_arn(mut self, arn: impl Into<String>) -> Self {
        self.exclusive_start_backup_arn = Some(arn.into());
        self
    }

    #[must_use]
    pub fn with_backup_type(mut self, backup_type: BackupTypeFilter) -> Self {
        self.backup_type = Some(backup_type);
        self
    }
}

/// Input for `RestoreTableFromBackup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreTableFromBackupInput {
    pub target_table_name: String,
    pub backup_arn: String,
}

impl RestoreTableFromBackupInput {
    #[must_use]
    pub fn new(target_table_name: impl Into<String>, backup_arn: impl Into<String>) -> Self {
        Self {
            target_table_name: target_table_name.into(),
            backup_arn: backup_arn.into(),
        }
    }
}

/// Input for `RestoreTableToPointInTime`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreTableToPointInTimeInput {
    pub source_table_name: String,
    pub target_table_name: String,
    /// Restore to the latest restorable time instead of `restore_date_time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_date_time: Option<f64>,
}

impl RestoreTableToPointInTimeInput {
    /// Restore to the latest restorable time.
    #[must_use]
    pub fn latest(
        source_table_name: impl Into<String>,
        target_table_name: impl Into<String>,
    ) -> Self {
        Self {
            source_table_name: source_table_name.into(),
            target_table_name: target_table_name.into(),
            use_latest_restorable_time: Some(true),
            restore_date_time: None,
        }
    }

    /// Restore to `restore_date_time` (epoch seconds).
    #[must_use]
    pub fn at(
        source_table_name: impl Into<String>,
        target_table_name: impl Into<String>,
        restore_date_time: f64,
    ) -> Self {
        Self {
            source_table_name: source_table_name.into(),
            target_table_name: target_table_name.into(),
            use_latest_restorable_time: None,
            restore_date_time: Some(restore_date_time),
        }
    }
}

/// Input for `DescribeContinuousBackups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeContinuousBackupsInput {
    pub table_name: String,
}

impl DescribeContinuousBackupsInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// Input for `UpdateContinuousBackups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateContinuousBackupsInput {
    pub table_name: String,
    pub point_in_time_recovery_specification: PointInTimeRecoverySpecification,
}

impl UpdateContinuousBackupsInput {
    /// Enable or disable point-in-time recovery on a table.
    #[must_use]
    pub fn new(table_name: impl Into<String>, enabled: bool) -> Self {
        Self {
            table_name: table_name.into(),
            point_in_time_recovery_specification: PointInTimeRecoverySpecification {
                point_in_time_recovery_enabled: enabled,
            },
        }
    }
}
