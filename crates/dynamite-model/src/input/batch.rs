//! Batch operations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{
    KeysAndAttributes, ReturnConsumedCapacity, ReturnItemCollectionMetrics, WriteRequest,
};

/// Input for `BatchGetItem`. Up to 100 keys across all tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetItemInput {
    pub request_items: HashMap<String, KeysAndAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl BatchGetItemInput {
    #[must_use]
    pub fn new(request_items: HashMap<String, KeysAndAttributes>) -> Self {
        Self {
            request_items,
            return_consumed_capacity: None,
        }
    }

    /// Add (or replace) the keys to read from one table.
    #[must_use]
    pub fn with_table(mut self, table_name: impl Into<String>, keys: KeysAndAttributes) -> Self {
        self.request_items.insert(table_name.into(), keys);
        self
    }

    #[must_use]
    pub fn with_return_consumed_capacity(mut self, level: ReturnConsumedCapacity) -> Self {
        self.return_consumed_capacity = Some(level);
        self
    }
}

/// Input for `BatchWriteItem`. Up to 25 puts or deletes across all tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteItemInput {
    pub request_items: HashMap<String, Vec<WriteRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl BatchWriteItemInput {
    #[must_use]
    pub fn new(request_items: HashMap<String, Vec<WriteRequest>>) -> Self {
        Self {
            request_items,
            ..Self::default()
        }
    }

    /// Append one write for a table.
    #[must_use]
    pub fn with_write(mut self, table_name: impl Into<String>, request: WriteRequest) -> Self {
        self.request_items
            .entry(table_name.into())
            .or_default()
            .push(request);
        self
    }

    #[must_use]
    pub fn with_return_consumed_capacity(mut self, level: ReturnConsumedCapacity) -> Self {
        self.return_consumed_capacity = Some(level);
        self
    }

    #[must_use]
    pub fn with_return_item_collection_metrics(
        mut self,
        metrics: ReturnItemCollectionMetrics,
    ) -> Self {
        self.return_item_collection_metrics = Some(metrics);
        self
    }

    /// Total number of writes across every table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.request_items.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
