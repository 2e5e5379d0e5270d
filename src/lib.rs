//! # Facility Desk
//!
//! > **Backend and client helpers for a residential facility desk.**
//!
//! Residents view building activity, submit maintenance tickets, request move-ins and
//! move-outs, and book shared facilities; a facilities manager reviews and updates them.
//!
//! ## 🏗️ Design
//!
//! Every record family lives in its own actor (see the `resource-actor` crate). The actors are
//! the store: one task per collection, requests handled one at a time, records kept in
//! insertion order. Nothing is shared behind a lock and there are no globals; the
//! [`FacilitySystem`](lifecycle::FacilitySystem) is built once at start-up and its clients are
//! injected into the HTTP handlers through router state.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Store ([`maintenance_actor`], [`booking_actor`], [`move_actor`], [`activity_actor`], [`resident_actor`])
//! - **Role**: [`ActorEntity`](resource_actor::ActorEntity) implementations: validation on
//!   create, shallow-merge updates, and activity logging from `on_create`.
//! - **Data**: the records and payloads are in [`model`].
//!
//! ### 2. The Interface ([`clients`])
//! - **Role**: wrap the generic `ResourceClient` in per-resource clients with their own error
//!   types.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - **Role**: spin up and wire the actors, shut them down, set up tracing.
//! - **Key items**: [`FacilitySystem`](lifecycle::FacilitySystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 4. The API ([`http`], [`server`])
//! - **Role**: the nine JSON routes under `/api`, CORS, request tracing and graceful shutdown.
//! - **Supporting**: [`config`] (environment), [`seed`] (start-up data).
//!
//! ### 5. The Client Side ([`api_client`], [`hooks`])
//! - **Role**: a typed HTTP client and the state helpers a UI builds on: the fetch hook, search
//!   filter and form state.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! FACILITY_PORT=8080 FACILITY_SEED_FILE=seed.json cargo run
//! ```

pub mod activity_actor;
pub mod api_client;
pub mod booking_actor;
pub mod clients;
pub mod config;
pub mod hooks;
pub mod http;
pub mod lifecycle;
pub mod maintenance_actor;
pub mod model;
pub mod move_actor;
pub mod resident_actor;
pub mod seed;
pub mod server;
