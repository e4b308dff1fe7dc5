//! Time to live.

use serde::{Deserialize, Serialize};

use crate::types::{TimeToLiveDescription, TimeToLiveSpecification};

/// Output for `DescribeTimeToLive`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTimeToLiveOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_description: Option<TimeToLiveDescription>,
}

/// Output for `UpdateTimeToLive`. Echoes the requested specification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTimeToLiveOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live_specification: Option<TimeToLiveSpecification>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeToLiveStatus;

    #[test]
    fn test_should_decode_ttl_description() {
        let out: DescribeTimeToLiveOutput = serde_json::from_str(
            r#"{"TimeToLiveDescription":{"TimeToLiveStatus":"ENABLING","AttributeName":"exp"}}"#,
        )
        .unwrap();
        let desc = out.time_to_live_description.unwrap();
        assert_eq!(desc.time_to_live_status, Some(TimeToLiveStatus::Enabling));
        assert_eq!(desc.attribute_name.as_deref(), Some("exp"));
    }
}
