use super::{is_blank, FieldErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for facility bookings.
    BookingId,
    "booking"
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// A reservation of a shared facility (gym, party room, guest suite) for a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityBooking {
    pub id: BookingId,
    pub facility: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub requester: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingCreate {
    pub facility: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub requester: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

impl BookingCreate {
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.facility) {
            errors.insert("facility", "Facility is required".to_string());
        }
        if is_blank(&self.requester) {
            errors.insert("requester", "Requester is required".to_string());
        }
        if self.ends_at <= self.starts_at {
            errors.insert("endsAt", "End time must be after start time".to_string());
        }
        errors
    }
}

/// Partial field set for a booking. Not exposed over HTTP; used by the manager workflow and
/// seeding through [`BookingClient`](crate::clients::BookingClient).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}
