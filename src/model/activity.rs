use super::{is_blank, FieldErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for activity feed entries.
    ActivityId,
    "activity"
);

/// One line of the building's activity feed. Read-only over HTTP; entries are appended by the
/// other actors and by seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: ActivityId,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Payload for appending to the feed. `timestamp` defaults to now.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActivityCreate {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ActivityCreate {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            timestamp: None,
        }
    }

    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.description) {
            errors.insert("description", "Description is required".to_string());
        }
        errors
    }
}
