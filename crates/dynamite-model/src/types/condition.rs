//! Legacy condition parameters: `KeyConditions`, `QueryFilter`, `ScanFilter`,
//! `Expected` and `AttributeUpdates`.
//!
//! Expression strings (`ConditionExpression`, `FilterExpression`, ...) replace
//! these in new code, but the service still accepts them.

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;

wire_enum! {
    /// Comparison operator of a legacy `Condition`.
    pub enum ComparisonOperator {
        Eq = "EQ",
        Ne = "NE",
        In = "IN",
        Le = "LE",
        Lt = "LT",
        Ge = "GE",
        Gt = "GT",
        Between = "BETWEEN",
        NotNull = "NOT_NULL",
        Null = "NULL",
        Contains = "CONTAINS",
        NotContains = "NOT_CONTAINS",
        BeginsWith = "BEGINS_WITH",
    }
}

impl ComparisonOperator {
    /// Number of operands the service requires, or `None` for `IN` (one or more).
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::NotNull | Self::Null => Some(0),
            Self::Between => Some(2),
            Self::In | Self::Unknown(_) => None,
            _ => Some(1),
        }
    }
}

wire_enum! {
    /// How multiple legacy conditions combine.
    pub enum ConditionalOperator {
        And = "AND",
        Or = "OR",
    }
}

wire_enum! {
    /// Action applied to an attribute by a legacy `AttributeUpdates` entry.
    pub enum AttributeAction {
        Add = "ADD",
        Put = "PUT",
        Delete = "DELETE",
    }
}

/// A legacy filter or key condition on one attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_value_list: Vec<AttributeValue>,
    pub comparison_operator: ComparisonOperator,
}

impl Condition {
    #[must_use]
    pub fn new(operator: ComparisonOperator, values: Vec<AttributeValue>) -> Self {
        Self {
            attribute_value_list: values,
            comparison_operator: operator,
        }
    }

    /// `attribute = value`.
    #[must_use]
    pub fn equal_to(value: impl Into<AttributeValue>) -> Self {
        Self::new(ComparisonOperator::Eq, vec![value.into()])
    }

    /// `lower <= attribute <= upper`.
    #[must_use]
    pub fn between(lower: impl Into<AttributeValue>, upper: impl Into<AttributeValue>) -> Self {
        Self::new(ComparisonOperator::Between, vec![lower.into(), upper.into()])
    }

    /// `begins_with(attribute, prefix)`.
    #[must_use]
    pub fn begins_with(prefix: impl Into<AttributeValue>) -> Self {
        Self::new(ComparisonOperator::BeginsWith, vec![prefix.into()])
    }
}

/// A legacy expectation on an existing attribute for a conditional write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpectedAttributeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_value_list: Vec<AttributeValue>,
}

impl ExpectedAttributeValue {
    /// Expect the attribute to currently hold `value`.
    #[must_use]
    pub fn value(value: impl Into<AttributeValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Expect the attribute to exist (`true`) or be absent (`false`).
    #[must_use]
    pub fn exists(exists: bool) -> Self {
        Self {
            exists: Some(exists),
            ..Self::default()
        }
    }
}

/// A legacy attribute modification for `UpdateItem`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AttributeAction>,
}

impl AttributeValueUpdate {
    #[must_use]
    pub fn put(value: impl Into<AttributeValue>) -> Self {
        Self {
            value: Some(value.into()),
            action: Some(AttributeAction::Put),
        }
    }

    #[must_use]
    pub fn add(value: impl Into<AttributeValue>) -> Self {
        Self {
            value: Some(value.into()),
            action: Some(AttributeAction::Add),
        }
    }

    /// Remove the attribute entirely.
    #[must_use]
    pub fn delete() -> Self {
        Self {
            value: None,
            action: Some(AttributeAction::Delete),
        }
    }
}
