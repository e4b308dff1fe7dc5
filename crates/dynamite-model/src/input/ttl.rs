//! Time to live.

use serde::{Deserialize, Serialize};

use crate::types::TimeToLiveSpecification;

/// Input for `DescribeTimeToLive`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTimeToLiveInput {
    pub table_name: String,
}

impl DescribeTimeToLiveInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// Input for `UpdateTimeToLive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTimeToLiveInput {
    pub table_name: String,
    pub time_to_live_specification: TimeToLiveSpecification,
}

impl UpdateTimeToLiveInput {
    /// Expire items by the epoch-seconds value in `attribute_name`.
    #[must_use]
    pub fn enable(table_name: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            time_to_live_specification: TimeToLiveSpecification {
                enabled: true,
                attribute_name: attribute_name.into(),
            },
        }
    }

    /// Stop expiring items. The service still wants the attribute name.
    #[must_use]
    pub fn disable(table_name: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            time_to_live_specification: TimeToLiveSpecification {
                enabled: false,
                attribute_name: attribute_name.into(),
            },
        }
    }
}
