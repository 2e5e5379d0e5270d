use super::{is_blank, FieldErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;

resource_id!(
    /// Type-safe identifier for maintenance tickets.
    TicketId,
    "ticket"
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A maintenance ticket raised by a resident.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for MaintenanceTicket`](#impl-ActorEntity-for-MaintenanceTicket) for details on:
/// - Creation parameters ([`TicketCreate`])
/// - Update parameters ([`TicketUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTicket {
    pub id: TicketId,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new ticket. Only `description` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketCreate {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<String>,
}

impl TicketCreate {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
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

/// Partial field set for a ticket. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<String>,
}

impl TicketUpdate {
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Body of `PATCH /api/maintenance`: the target `id` next to the fields to change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketPatch {
    pub id: TicketId,
    #[serde(flatten)]
    pub update: TicketUpdate,
}

#[derive(Debug, Error)]
pub enum TicketPatchError {
    #[error("Ticket ID required")]
    MissingId,

    #[error("Invalid ticket update: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl TicketPatch {
    pub fn new(id: TicketId, update: TicketUpdate) -> Self {
        Self { id, update }
    }

    /// Reads a PATCH body. The `id` is looked up before the other fields are decoded, so a body
    /// without one is `MissingId` whatever else it carries. A numeric `id` is taken in its
    /// string form.
    pub fn parse(body: &[u8]) -> Result<Self, TicketPatchError> {
        if body.trim_ascii().is_empty() {
            return Err(TicketPatchError::MissingId);
        }
        let Value::Object(mut fields) = serde_json::from_slice::<Value>(body)? else {
            return Err(TicketPatchError::MissingId);
        };
        let id = match fields.remove("id") {
            Some(Value::String(id)) => TicketId::from(id),
            Some(Value::Number(n)) => TicketId::from(n.to_string()),
            _ => return Err(TicketPatchError::MissingId),
        };
        let update = serde_json::from_value(Value::Object(fields))?;
        Ok(Self { id, update })
    }
}
