//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Compact format without the crate/module prefix (`with_target(false)`); actors tag their
//! lines with `entity_type` instead. Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Entity Operations**: Create, Get, List and Update, with the record ID
//! - **Client Calls**: one span per client method (`#[instrument]`)
//! - **HTTP**: one span per request from `tower_http::trace::TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads and HTTP request spans
//! RUST_LOG=debug,tower_http=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! `POST /api/maintenance` with `{"description": "Leaky faucet"}` at `RUST_LOG=info`:
//!
//! ```text
//! INFO Created entity_type="ActivityItem" id=activity_1 size=1
//! INFO Created entity_type="MaintenanceTicket" id=ticket_1 size=1
//! ```
//!
//! At `RUST_LOG=debug` the `Create` line shows the payload first:
//!
//! ```text
//! DEBUG create_ticket: Sending request params=TicketCreate { description: "Leaky faucet", status: None, priority: None, resident: None }
//! DEBUG Create entity_type="MaintenanceTicket" params=TicketCreate { description: "Leaky faucet", .. }
//! ```
//!
//! The activity line comes first because the ticket's `on_create` hook writes it before the
//! ticket is stored.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
