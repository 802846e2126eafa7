//! Wire types owned by the experiment service.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperimentId(pub u32);

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ExperimentId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Details of one experiment as returned by `GET /api/v1/experiments/{id}`.
///
/// Only `id` and `state` are required; everything else defaults so that
/// trimmed-down payloads still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentDetails {
    pub id: ExperimentId,
    #[serde(default)]
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub resource_pool: String,
}

impl ExperimentDetails {
    /// Minimal record carrying only an id and a state.
    pub fn new<S: Into<String>>(id: u32, state: S) -> Self {
        Self {
            id: ExperimentId(id),
            name: String::new(),
            state: state.into(),
            archived: false,
            username: String::new(),
            start_time: String::new(),
            end_time: None,
            progress: None,
            description: None,
            labels: Vec::new(),
            resource_pool: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_record_decodes_with_defaults() {
        let record: ExperimentDetails =
            serde_json::from_str(r#"{"id":1,"state":"COMPLETED"}"#).unwrap();
        assert_eq!(record, ExperimentDetails::new(1, "COMPLETED"));
    }

    #[test]
    fn camel_case_fields_are_read() {
        let record: ExperimentDetails = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "cyclegan-bs-search",
                "state": "ACTIVE",
                "username": "shiyuan",
                "startTime": "2021-03-02T10:15:00Z",
                "resourcePool": "gpu-pool",
                "progress": 0.25,
                "labels": ["gan"],
                "unknownField": true
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, ExperimentId(7));
        assert_eq!(record.start_time, "2021-03-02T10:15:00Z");
        assert_eq!(record.resource_pool, "gpu-pool");
        assert_eq!(record.progress, Some(0.25));
        assert_eq!(record.labels, vec!["gan".to_string()]);
        assert!(record.end_time.is_none());
    }

    #[test]
    fn id_displays_as_plain_integer() {
        assert_eq!(ExperimentId(42).to_string(), "42");
    }
}
