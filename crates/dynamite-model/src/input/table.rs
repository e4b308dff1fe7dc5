//! Table lifecycle and account limits.

use serde::{Deserialize, Serialize};

use crate::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, GlobalSecondaryIndexUpdate,
    KeySchemaElement, LocalSecondaryIndex, ProvisionedThroughput, SSESpecification,
    StreamSpecification, Tag,
};

/// Input for `CreateTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    pub attribute_definitions: Vec<AttributeDefinition>,
    pub table_name: String,
    pub key_schema: Vec<KeySchemaElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<LocalSecondaryIndex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,
    /// Required unless `billing_mode` is `PAY_PER_REQUEST`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,
    #[serde(rename = "SSESpecification", skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<SSESpecification>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CreateTableInput {
    /// A provisioned-capacity table with the given key schema.
    #[must_use]
    pub fn new(
        attribute_definitions: Vec<AttributeDefinition>,
        table_name: impl Into<String>,
        key_schema: Vec<KeySchemaElement>,
        provisioned_throughput: ProvisionedThroughput,
    ) -> Self {
        Self {
            attribute_definitions,
            table_name: table_name.into(),
            key_schema,
            provisioned_throughput: Some(provisioned_throughput),
            ..Self::default()
        }
    }

    /// An on-demand table with the given key schema.
    #[must_use]
    pub fn on_demand(
        attribute_definitions: Vec<AttributeDefinition>,
        table_name: impl Into<String>,
        key_schema: Vec<KeySchemaElement>,
    ) -> Self {
        Self {
            attribute_definitions,
            table_name: table_name.into(),
            key_schema,
            billing_mode: Some(BillingMode::PayPerRequest),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_global_secondary_index(mut self, index: GlobalSecondaryIndex) -> Self {
        self.global_secondary_indexes.push(index);
        self
    }

    #[must_use]
    pub fn with_local_secondary_index(mut self, index: LocalSecondaryIndex) -> Self {
        self.local_secondary_indexes.push(index);
        self
    }

    #[must_use]
    pub fn with_stream_specification(mut self, spec: StreamSpecification) -> Self {
        self.stream_specification = Some(spec);
        self
    }

    #[must_use]
    pub fn with_sse_specification(mut self, spec: SSESpecification) -> Self {
        self.sse_specification = Some(spec);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

/// Input for `DescribeTable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableInput {
    pub table_name: String,
}

impl DescribeTableInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// Input for `UpdateTable`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableInput {
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_index_updates: Vec<GlobalSecondaryIndexUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,
    #[serde(rename = "SSESpecification", skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<SSESpecification>,
}

impl UpdateTableInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_provisioned_throughput(mut self, throughput: ProvisionedThroughput) -> Self {
        self.provisioned_throughput = Some(throughput);
        self
    }

    #[must_use]
    pub fn with_billing_mode(mut self, billing_mode: BillingMode) -> Self {
        self.billing_mode = Some(billing_mode);
        self
    }

    /// Attribute definitions are required when a new index introduces key attributes.
    #[must_use]
    pub fn with_attribute_definition(mut self, definition: AttributeDefinition) -> Self {
        self.attribute_definitions.push(definition);
        self
    }

    #[must_use]
    pub fn with_global_secondary_index_update(
        mut self,
        update: GlobalSecondaryIndexUpdate,
    ) -> Self {
        self.global_secondary_index_updates.push(update);
        self
    }

    #[must_use]
    pub fn with_stream_specification(mut self, spec: StreamSpecification) -> Self {
        self.stream_specification = Some(spec);
        self
    }

    #[must_use]
    pub fn with_sse_specification(mut self, spec: SSESpecification) -> Self {
        self.sse_specification = Some(spec);
        self
    }
}

/// Input for `DeleteTable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableInput {
    pub table_name: String,
}

impl DeleteTableInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// Input for `ListTables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTablesInput {
    /// Resume after this table name (the previous page's `LastEvaluatedTableName`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_table_name: Option<String>,
    /// Page size, 1 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ListTablesInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_exclusive_start_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.exclusive_start_table_name = Some(table_name.into());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for `DescribeLimits`. The operation takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribeLimitsInput {}
