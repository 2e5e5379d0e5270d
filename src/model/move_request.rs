use super::{is_blank, FieldErrors};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

resource_id!(
    /// Type-safe identifier for move requests.
    MoveRequestId,
    "move"
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveKind {
    #[default]
    MoveIn,
    MoveOut,
}

impl Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MoveKind::MoveIn => "Move-in",
            MoveKind::MoveOut => "Move-out",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveStatus {
    #[default]
    Pending,
    Approved,
    Completed,
}

/// A scheduled move in or out of a unit. Reserves the loading dock and elevator for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub id: MoveRequestId,
    #[serde(rename = "type")]
    pub kind: MoveKind,
    pub scheduled_date: NaiveDate,
    pub requester: String,
    pub status: MoveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a move request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveRequestCreate {
    #[serde(rename = "type")]
    pub kind: MoveKind,
    pub scheduled_date: NaiveDate,
    pub requester: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MoveStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MoveRequestCreate {
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.requester) {
            errors.insert("requester", "Requester is required".to_string());
        }
        errors
    }
}

/// Partial field set for a move request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MoveRequestUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MoveStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
