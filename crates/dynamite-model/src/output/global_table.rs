//! Global tables.

use serde::{Deserialize, Serialize};

use crate::types::{GlobalTable, GlobalTableDescription, ReplicaSettingsDescription};

/// Output for `CreateGlobalTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGlobalTableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_table_description: Option<GlobalTableDescription>,
}

/// Output for `DescribeGlobalTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGlobalTableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_table_description: Option<GlobalTableDescription>,
}

/// Output for `UpdateGlobalTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGlobalTableOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_table_description: Option<GlobalTableDescription>,
}

/// Output for `ListGlobalTables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGlobalTablesOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_tables: Vec<GlobalTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_global_table_name: Option<String>,
}

/// Output for `DescribeGlobalTableSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGlobalTableSettingsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replica_settings: Vec<ReplicaSettingsDescription>,
}

/// Output for `UpdateGlobalTableSettings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGlobalTableSettingsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replica_settings: Vec<ReplicaSettingsDescription>,
}
