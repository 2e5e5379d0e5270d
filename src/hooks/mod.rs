//! # Client Hooks
//!
//! Client-side state helpers for a consumer of the API:
//!
//! - [`FetchHook`] - async loading state (`loading` / `error` / `data`) keyed by a dependency
//!   value, with late results suppressed after a newer fetch or teardown
//! - [`SearchFilter`] - free-text query and status filter over [`Searchable`] records
//! - [`FormState`] - field values with per-field errors and an on-demand validator
//!
//! The fetch functions are usually calls on [`FacilityApi`](crate::api_client::FacilityApi).

pub mod fetch;
pub mod filter;
pub mod form;

pub use fetch::{FetchHook, FetchState, View};
pub use filter::{SearchFilter, Searchable};
pub use form::{FormState, Validated};
