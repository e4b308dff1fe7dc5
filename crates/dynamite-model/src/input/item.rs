//! Single-item operations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::types::{
    AttributeValueUpdate, ConditionalOperator, ExpectedAttributeValue, Item, Key,
    ReturnConsumedCapacity, ReturnItemCollectionMetrics, ReturnValue,
};

/// Input for `GetItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemInput {
    pub table_name: String,
    pub key: Key,
    /// Legacy projection; prefer `projection_expression`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,
}

impl GetItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self {
            table_name: table_name.into(),
            key,
            ..Self::default()
        }
    }

    /// Read with strong consistency instead of eventual consistency.
    #[must_use]
    pub fn with_consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = Some(consistent_read);
        self
    }

    #[must_use]
    pub fn with_attributes_to_get(
        mut self,
        attributes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.attributes_to_get = attributes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.projection_expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn with_expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .insert(placeholder.into(), name.into());
        self
    }

    #[must_use]
    pub fn with_return_consumed_capacity(mut self, level: ReturnConsumedCapacity) -> Self {
        self.return_consumed_capacity = Some(level);
        self
    }
}

/// Input for `PutItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemInput {
    pub table_name: String,
    pub item: Item,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, ExpectedAttributeValue>,
    /// Only `NONE` and `ALL_OLD` are accepted by `PutItem`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

impl PutItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, item: Item) -> Self {
        Self {
            table_name: table_name.into(),
            item,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_return_values(mut self, return_values: ReturnValue) -> Self {
        self.return_values = Some(return_values);
        self
    }

    #[must_use]
    pub fn with_condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn with_expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .insert(placeholder.into(), name.into());
        self
    }

    #[must_use]
    pub fn with_expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.expression_attribute_values
            .insert(placeholder.into(), value.into());
        self
    }

    /// Legacy conditional put on one attribute.
    #[must_use]
    pub fn with_expected(
        mut self,
        attribute: impl Into<String>,
        expected: ExpectedAttributeValue,
    ) -> Self {
        self.expected.insert(attribute.into(), expected);
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
}

/// Input for `UpdateItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemInput {
    pub table_name: String,
    pub key: Key,
    /// Legacy per-attribute updates; prefer `update_expression`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attribute_updates: HashMap<String, AttributeValueUpdate>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, ExpectedAttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

impl UpdateItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self {
            table_name: table_name.into(),
            key,
            ..Self::default()
        }
    }

    /// Update with the legacy attribute-update map.
    #[must_use]
    pub fn with_attribute_updates(
        mut self,
        updates: HashMap<String, AttributeValueUpdate>,
    ) -> Self {
        self.attribute_updates = updates;
        self
    }

    #[must_use]
    pub fn with_update_expression(mut self, expression: impl Into<String>) -> Self {
        self.update_expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn with_condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn with_expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .insert(placeholder.into(), name.into());
        self
    }

    #[must_use]
    pub fn with_expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.expression_attribute_values
            .insert(placeholder.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_expected(
        mut self,
        attribute: impl Into<String>,
        expected: ExpectedAttributeValue,
    ) -> Self {
        self.expected.insert(attribute.into(), expected);
        self
    }

    #[must_use]
    pub fn with_return_values(mut self, return_values: ReturnValue) -> Self {
        self.return_values = Some(return_values);
        self
    }

    #[must_use]
    pub fn with_return_consumed_capacity(mut self, level: ReturnConsumedCapacity) -> Self {
        self.return_consumed_capacity = Some(level);
        self
    }
}

/// Input for `DeleteItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemInput {
    pub table_name: String,
    pub key: Key,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, ExpectedAttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

impl DeleteItemInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>, key: Key) -> Self {
        Self {
            table_name: table_name.into(),
            key,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_return_values(mut self, return_values: ReturnValue) -> Self {
        self.return_values = Some(return_values);
        self
    }

    #[must_use]
    pub fn with_condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn with_expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.expression_attribute_values
            .insert(placeholder.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_expected(
        mut self,
        attribute: impl Into<String>,
        expected: ExpectedAttributeValue,
    ) -> Self {
        self.expected.insert(attribute.into(), expected);
        self
    }

    #[must_use]
    pub fn with_expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .insert(placeholder.into(), name.into());
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
}
