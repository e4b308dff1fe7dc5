//! `Query` and `Scan`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::types::{Condition, ConditionalOperator, Key, ReturnConsumedCapacity, Select};

/// Input for `Query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryInput {
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
    /// Legacy key conditions; prefer `key_condition_expression`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub key_conditions: HashMap<String, Condition>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub query_filter: HashMap<String, Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    /// `false` returns results in descending sort-key order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_index_forward: Option<bool>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exclusive_start_key: Key,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_condition_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

impl QueryInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    #[must_use]
    pub fn with_key_condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.key_condition_expression = Some(expression.into());
        self
    }

    /// Legacy key condition on one key attribute.
    #[must_use]
    pub fn with_key_condition(
        mut self,
        attribute: impl Into<String>,
        condition: Condition,
    ) -> Self {
        self.key_conditions.insert(attribute.into(), condition);
        self
    }

    #[must_use]
    pub fn with_filter_expression(mut self, expression: impl Into<String>) -> Self {
        self.filter_expression = Some(expression.into());
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
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_scan_index_forward(mut self, forward: bool) -> Self {
        self.scan_index_forward = Some(forward);
        self
    }

    #[must_use]
    pub fn with_consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = Some(consistent_read);
        self
    }

    #[must_use]
    pub fn with_select(mut self, select: Select) -> Self {
        self.select = Some(select);
        self
    }

    #[must_use]
    pub fn with_exclusive_start_key(mut self, key: Key) -> Self {
        self.exclusive_start_key = key;
        self
    }
}

/// Input for `Scan`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanInput {
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    /// Legacy filter; prefer `filter_expression`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub scan_filter: HashMap<String, Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exclusive_start_key: Key,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
    /// Number of parallel scan workers; pair with `segment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_segments: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: HashMap<String, AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
}

impl ScanInput {
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
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
    pub fn with_scan_filter(mut self, scan_filter: HashMap<String, Condition>) -> Self {
        self.scan_filter = scan_filter;
        self
    }

    #[must_use]
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    #[must_use]
    pub fn with_filter_expression(mut self, expression: impl Into<String>) -> Self {
        self.filter_expression = Some(expression.into());
        self
    }

    #[must_use]
    pub fn with_projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.projection_expression = Some(expression.into());
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
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Scan one of `total_segments` disjoint slices of the table.
    #[must_use]
    pub fn with_segment(mut self, segment: i32, total_segments: i32) -> Self {
        self.segment = Some(segment);
        self.total_segments = Some(total_segments);
        self
    }

    #[must_use]
    pub fn with_consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = Some(consistent_read);
        self
    }

    #[must_use]
    pub fn with_exclusive_start_key(mut self, key: Key) -> Self {
        self.exclusive_start_key = key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_query_with_key_condition_expression() {
        let input = QueryInput::new("orders")
            .with_key_condition_expression("pk = :pk")
            .with_expression_attribute_value(":pk", "customer#7")
            .with_scan_index_forward(false)
            .with_limit(10);
        let json: serde_json::Value = serde_json::to_value(&input).unwrap();
        assert_eq!(json["KeyConditionExpression"], "pk = :pk");
        assert_eq!(json["ScanIndexForward"], false);
        assert_eq!(json["Limit"], 10);
        assert!(json.get("ExclusiveStartKey").is_none());
    }

    #[test]
    fn test_should_serialize_legacy_query_key_conditions() {
        let input = QueryInput::new("orders")
            .with_key_condition("pk", Condition::equal_to("customer#7"));
        let json: serde_json::Value = serde_json::to_value(&input).unwrap();
        assert_eq!(json["KeyConditions"]["pk"]["ComparisonOperator"], "EQ");
    }

    #[test]
    fn test_should_serialize_scan_with_legacy_filter() {
        let filter = HashMap::from([(
            "age".to_owned(),
            Condition::new(
                crate::types::ComparisonOperator::Gt,
                vec![AttributeValue::number(21)],
            ),
        )]);
        let input = ScanInput::new("users")
            .with_attributes_to_get(["name", "age"])
            .with_scan_filter(filter)
            .with_segment(0, 4);
        let json: serde_json::Value = serde_json::to_value(&input).unwrap();
        assert_eq!(json["AttributesToGet"], serde_json::json!(["name", "age"]));
        assert_eq!(json["ScanFilter"]["age"]["ComparisonOperator"], "GT");
        assert_eq!(json["Segment"], 0);
        assert_eq!(json["TotalSegments"], 4);
    }
}
