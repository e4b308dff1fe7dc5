//! Global tables.

use serde::{Deserialize, Serialize};

use crate::types::{
    AutoScalingSettingsUpdate, GlobalTableGlobalSecondaryIndexSettingsUpdate, Replica,
    ReplicaSettingsUpdate, ReplicaUpdate,
};

/// Input for `CreateGlobalTable`.
///
/// Every region in the replication group must already hold an empty table
/// with the same name, key schema and streams enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGlobalTableInput {
    pub global_table_name: String,
    pub replication_group: Vec<Replica>,
}

impl CreateGlobalTableInput {
    #[must_use]
    pub fn new(
        global_table_name: impl Into<String>,
        regions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            global_table_name: global_table_name.into(),
            replication_group: regions.into_iter().map(Replica::new).collect(),
        }
    }
}

/// Input for `DescribeGlobalTable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGlobalTableInput {
    pub global_table_name: String,
}

impl DescribeGlobalTableInput {
    #[must_use]
    pub fn new(global_table_name: impl Into<String>) -> Self {
        Self {
            global_table_name: global_table_name.into(),
        }
    }
}

/// Input for `DescribeGlobalTableSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGlobalTableSettingsInput {
    pub global_table_name: String,
}

impl DescribeGlobalTableSettingsInput {
    #[must_use]
    pub fn new(global_table_name: impl Into<String>) -> Self {
        Self {
            global_table_name: global_table_name.into(),
        }
    }
}

/// Input for `ListGlobalTables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGlobalTablesInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_global_table_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    /// Only list global tables with a replica in this region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

impl ListGlobalTablesInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_region_name(mut self, region_name: impl Into<String>) -> Self {
        self.region_name = Some(region_name.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_exclusive_start_global_table_name(mut self, name: impl Into<String>) -> Self {
        self.exclusive_start_global_table_name = Some(name.into());
        self
    }
}

/// Input for `UpdateGlobalTable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGlobalTableInput {
    pub global_table_name: String,
    pub replica_updates: Vec<ReplicaUpdate>,
}

impl UpdateGlobalTableInput {
    #[must_use]
    pub fn new(global_table_name: impl Into<String>) -> Self {
        Self {
            global_table_name: global_table_name.into(),
            replica_updates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_replica_update(mut self, update: ReplicaUpdate) -> Self {
        self.replica_updates.push(update);
        self
    }
}

/// Input for `UpdateGlobalTableSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGlobalTableSettingsInput {
    pub global_table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_table_provisioned_write_capacity_units: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_table_provisioned_write_capacity_auto_scaling_settings_update:
        Option<AutoScalingSettingsUpdate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_table_global_secondary_index_settings_update:
        Vec<GlobalTableGlobalSecondaryIndexSettingsUpdate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replica_settings_update: Vec<ReplicaSettingsUpdate>,
}

impl UpdateGlobalTableSettingsInput {
    #[must_use]
    pub fn new(global_table_name: impl Into<String>) -> Self {
        Self {
            global_table_name: global_table_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_provisioned_write_capacity_units(mut self, units: i64) -> Self {
        self.global_table_provisioned_write_capacity_units = Some(units);
        self
    }

    #[must_use]
    pub fn with_write_auto_scaling(mut self, update: AutoScalingSettingsUpdate) -> Self {
        self.global_table_provisioned_write_capacity_auto_scaling_settings_update = Some(update);
        self
    }

    #[must_use]
    pub fn with_index_settings_update(
        mut self,
        update: GlobalTableGlobalSecondaryIndexSettingsUpdate,
    ) -> Self {
        self.global_table_global_secondary_index_settings_update
            .push(update);
        self
    }

    #[must_use]
    pub fn with_replica_settings_update(mut self, update: ReplicaSettingsUpdate) -> Self {
        self.replica_settings_update.push(update);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_create_global_table() {
        let input = CreateGlobalTableInput::new("users", ["us-east-1", "eu-west-1"]);
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"GlobalTableName":"users","ReplicationGroup":[{"RegionName":"us-east-1"},{"RegionName":"eu-west-1"}]}"#
        );
    }

    #[test]
    fn test_should_serialize_update_global_table_settings() {
        let input = UpdateGlobalTableSettingsInput::new("users")
            .with_provisioned_write_capacity_units(10)
            .with_replica_settings_update(ReplicaSettingsUpdate {
                region_name: "eu-west-1".to_owned(),
                replica_provisioned_read_capacity_units: Some(4),
                ..ReplicaSettingsUpdate::default()
            });
        let json: serde_json::Value = serde_json::to_value(&input).unwrap();
        assert_eq!(json["GlobalTableProvisionedWriteCapacityUnits"], 10);
        assert_eq!(
            json["ReplicaSettingsUpdate"][0]["ReplicaProvisionedReadCapacityUnits"],
            4
        );
        assert!(json.get("GlobalTableGlobalSecondaryIndexSettingsUpdate").is_none());
    }
}
