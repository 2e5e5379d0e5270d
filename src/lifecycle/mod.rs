//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors that make up the facility store.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - instantiate all actors and their clients
//! 2. **Dependency Injection** - wire actors together via context injection
//! 3. **Graceful Shutdown** - drop the clients, then await every actor task
//! 4. **Observability Setup** - [`setup_tracing`]
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them through `run(context)`. The
//! maintenance, booking and move actors take an `ActivityClient` so their `on_create` hooks can
//! append to the feed:
//!
//! ```rust,ignore
//! impl ActorEntity for ActivityItem {
//!     type Context = ();
//! }
//!
//! impl ActorEntity for MaintenanceTicket {
//!     type Context = ActivityClient;
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - wait for all actor tasks to finish
//!
//! The dependency graph is acyclic (everything points at the activity feed), so channel closure
//! alone is enough to stop every actor.

pub mod facility_system;
pub mod tracing;

pub use self::facility_system::*;
pub use self::tracing::*;
