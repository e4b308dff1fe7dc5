//! Batch operations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ConsumedCapacity, Item, ItemCollectionMetrics, KeysAndAttributes, WriteRequest};

/// Output for `BatchGetItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetItemOutput {
    /// Items read, grouped by table name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub responses: HashMap<String, Vec<Item>>,
    /// Keys the service did not get to; resend them in a new request.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unprocessed_keys: HashMap<String, KeysAndAttributes>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumed_capacity: Vec<ConsumedCapacity>,
}

impl BatchGetItemOutput {
    /// Returns `true` if every requested key was processed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unprocessed_keys.values().all(|k| k.keys.is_empty())
    }
}

/// Output for `BatchWriteItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteItemOutput {
    /// Writes the service did not get to; resend them in a new request.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unprocessed_items: HashMap<String, Vec<WriteRequest>>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub item_collection_metrics: HashMap<String, Vec<ItemCollectionMetrics>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumed_capacity: Vec<ConsumedCapacity>,
}

impl BatchWriteItemOutput {
    /// Returns `true` if every write was processed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unprocessed_items.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_report_unprocessed_keys() {
        let out: BatchGetItemOutput = serde_json::from_str(
            r#"{
                "Responses": {"users": [{"pk": {"S": "1"}}]},
                "UnprocessedKeys": {"users": {"Keys": [{"pk": {"S": "2"}}]}}
            }"#,
        )
        .unwrap();
        assert_eq!(out.responses["users"].len(), 1);
        assert!(!out.is_complete());
    }

    #[test]
    fn test_should_treat_empty_unprocessed_items_as_complete() {
        let out: BatchWriteItemOutput =
            serde_json::from_str(r#"{"UnprocessedItems":{}}"#).unwrap();
        assert!(out.is_complete());
    }
}
