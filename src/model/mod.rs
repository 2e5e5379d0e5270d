//! Pure data structures (records and DTOs) managed by the resource actors.
//!
//! Every record serializes with `camelCase` field names. Create payloads reject unknown fields,
//! so a misspelled field fails the request instead of being silently dropped.

use std::collections::BTreeMap;

/// Field name → message. Produced by the `field_errors` checks on create payloads and shared
/// by the actors (which reject the create) and [`FormState`](crate::hooks::FormState).
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Declares a string identifier newtype rendered as `<prefix>_<n>`.
///
/// The store assigns IDs from a `u32` counter, but the wire form is an opaque string so that
/// lookups with any client-supplied value (`"nonexistent"`) reach the store and come back as
/// not-found rather than failing to parse.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<u32> for $name {
            fn from(n: u32) -> Self {
                Self(format!("{}_{}", $prefix, n))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub mod activity;
pub mod booking;
pub mod move_request;
pub mod resident;
pub mod ticket;

pub use activity::*;
pub use booking::*;
pub use move_request::*;
pub use resident::*;
pub use ticket::*;

/// Trimmed-empty check used by every `field_errors`.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// First message of a non-empty error map, as `"<field>: <message>"`.
pub(crate) fn first_error(errors: &FieldErrors) -> Option<String> {
    errors
        .iter()
        .next()
        .map(|(field, message)| format!("{field}: {message}"))
}
