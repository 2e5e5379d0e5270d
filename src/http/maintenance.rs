use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    Json,
};
use resource_actor::ActorClient;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::{ApiError, AppState};
use crate::maintenance_actor::TicketError;
use crate::model::{MaintenanceTicket, TicketCreate, TicketPatch, TicketPatchError};

/// `GET /api/maintenance` wraps the list in an object.
#[derive(Debug, Serialize, Deserialize)]
pub struct TicketList {
    pub tickets: Vec<MaintenanceTicket>,
}

pub async fn list_tickets(State(state): State<AppState>) -> Result<Json<TicketList>, ApiError> {
    let tickets = state.tickets.list().await.map_err(|e| {
        error!(error = %e, "Failed to list tickets");
        ApiError::Internal("Failed to fetch tickets")
    })?;
    Ok(Json(TicketList { tickets }))
}

pub async fn create_ticket(
    State(state): State<AppState>,
    payload: Result<Json<TicketCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<MaintenanceTicket>), ApiError> {
    let Json(params) = payload.map_err(|e| {
        warn!(error = %e, "Malformed ticket payload");
        ApiError::Internal("Failed to create ticket")
    })?;

    let ticket = state.tickets.create_ticket(params).await.map_err(|e| {
        warn!(error = %e, "Failed to create ticket");
        ApiError::Internal("Failed to create ticket")
    })?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// `PATCH /api/maintenance` with `{id, ...updates}`.
///
/// The body is read raw so a missing `id` answers 400 regardless of content type or what the
/// other fields hold.
pub async fn update_ticket(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MaintenanceTicket>, ApiError> {
    let body = body.map_err(|e| {
        warn!(error = %e, "Unreadable ticket update");
        ApiError::Internal("Failed to update ticket")
    })?;

    let TicketPatch { id, update } = TicketPatch::parse(&body).map_err(|e| match e {
        TicketPatchError::MissingId => ApiError::BadRequest("Ticket ID required"),
        TicketPatchError::Invalid(e) => {
            warn!(error = %e, "Malformed ticket update");
            ApiError::Internal("Failed to update ticket")
        }
    })?;

    match state.tickets.update_ticket(id.clone(), update).await {
        Ok(ticket) => {
            info!(ticket_id = %id, status = %ticket.status, "Ticket updated");
            Ok(Json(ticket))
        }
        Err(TicketError::NotFound(_)) => Err(ApiError::NotFound("Ticket not found")),
        Err(e) => {
            warn!(ticket_id = %id, error = %e, "Failed to update ticket");
            Err(ApiError::Internal("Failed to update ticket"))
        }
    }
}
