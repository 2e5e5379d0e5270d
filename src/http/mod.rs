//! # HTTP API
//!
//! Thin handlers that turn requests into client calls on the [`FacilitySystem`] and results into
//! JSON. No state is kept between requests; the actors own everything.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/api/activity` | 200, array |
//! | GET | `/api/bookings` | 200, array |
//! | POST | `/api/bookings` | 201, created record |
//! | GET | `/api/maintenance` | 200, `{tickets: [...]}` |
//! | POST | `/api/maintenance` | 201, created record |
//! | PATCH | `/api/maintenance` | 200, updated record |
//! | GET | `/api/move-requests` | 200, array |
//! | POST | `/api/move-requests` | 201, created record |
//! | GET | `/api/resident` | 200, object |
//!
//! Failures answer `{"error": "..."}`. The only 4xx paths are a PATCH without `id` (400) and a
//! PATCH for an unknown ticket (404); a malformed or invalid body is a 500 like any other
//! failure.

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::clients::{ActivityClient, BookingClient, MoveClient, ResidentClient, TicketClient};
use crate::lifecycle::FacilitySystem;

pub mod activity;
pub mod bookings;
pub mod error;
pub mod maintenance;
pub mod move_requests;
pub mod resident;

pub use error::ApiError;

/// Clients shared by every handler. Cloning is cheap (channel senders).
#[derive(Clone)]
pub struct AppState {
    pub tickets: TicketClient,
    pub bookings: BookingClient,
    pub moves: MoveClient,
    pub activity: ActivityClient,
    pub resident: ResidentClient,
}

impl AppState {
    pub fn from_system(system: &FacilitySystem) -> Self {
        Self {
            tickets: system.ticket_client.clone(),
            bookings: system.booking_client.clone(),
            moves: system.move_client.clone(),
            activity: system.activity_client.clone(),
            resident: system.resident_client.clone(),
        }
    }
}

pub fn router(state: AppState, cors_max_age: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(cors_max_age);

    Router::new()
        .route("/api/activity", get(activity::list_activity))
        .route(
            "/api/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/api/maintenance",
            get(maintenance::list_tickets)
                .post(maintenance::create_ticket)
                .patch(maintenance::update_ticket),
        )
        .route(
            "/api/move-requests",
            get(move_requests::list_move_requests).post(move_requests::create_move_request),
        )
        .route("/api/resident", get(resident::get_resident))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
