//! Start-up seeding from a JSON file.
//!
//! ```json
//! {
//!   "resident": { "name": "Jane Doe", "unit": "4B" },
//!   "activity": [{ "description": "Pool reopens Monday" }],
//!   "tickets": [{ "description": "Lobby door sticks", "priority": "low" }],
//!   "bookings": [],
//!   "moveRequests": []
//! }
//! ```
//!
//! Every section is optional. Records go through the same `create` path as API requests, so
//! they are validated, get store-assigned IDs, and (for tickets, bookings and move requests)
//! add a line to the activity feed.

use crate::activity_actor::ActivityError;
use crate::booking_actor::BookingError;
use crate::lifecycle::FacilitySystem;
use crate::maintenance_actor::TicketError;
use crate::model::{ActivityCreate, BookingCreate, MoveRequestCreate, ResidentCreate, TicketCreate};
use crate::move_actor::MoveRequestError;
use crate::resident_actor::ResidentError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Resident(#[from] ResidentError),
    #[error(transparent)]
    Activity(#[from] ActivityError),
    #[error(transparent)]
    Ticket(#[from] TicketError),
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    MoveRequest(#[from] MoveRequestError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedData {
    #[serde(default)]
    pub resident: Option<ResidentCreate>,
    #[serde(default)]
    pub activity: Vec<ActivityCreate>,
    #[serde(default)]
    pub tickets: Vec<TicketCreate>,
    #[serde(default)]
    pub bookings: Vec<BookingCreate>,
    #[serde(default)]
    pub move_requests: Vec<MoveRequestCreate>,
}

/// Record counts loaded by [`SeedData::apply`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub resident: bool,
    pub activity: usize,
    pub tickets: usize,
    pub bookings: usize,
    pub move_requests: usize,
}

impl SeedData {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Creates every record in file order. Stops at the first rejected record; records created
    /// before it stay in the store.
    pub async fn apply(self, system: &FacilitySystem) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        if let Some(resident) = self.resident {
            system.resident_client.create_resident(resident).await?;
            summary.resident = true;
        }
        for item in self.activity {
            system.activity_client.create_item(item).await?;
            summary.activity += 1;
        }
        for ticket in self.tickets {
            system.ticket_client.create_ticket(ticket).await?;
            summary.tickets += 1;
        }
        for booking in self.bookings {
            system.booking_client.create_booking(booking).await?;
            summary.bookings += 1;
        }
        for request in self.move_requests {
            system.move_client.create_move_request(request).await?;
            summary.move_requests += 1;
        }

        info!(?summary, "Seed data loaded");
        Ok(summary)
    }
}
