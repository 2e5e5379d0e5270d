use super::{is_blank, FieldErrors};
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for resident profiles. Never sent over the wire.
    ResidentId,
    "resident"
);

/// The signed-in resident's profile. A singleton: the API serves the first stored profile, or
/// [`ResidentData::default`] when none was configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentData {
    #[serde(skip)]
    pub id: ResidentId,
    pub name: String,
    pub unit: String,
    pub initials: String,
}

impl Default for ResidentData {
    fn default() -> Self {
        Self {
            id: ResidentId::default(),
            name: "Resident".to_string(),
            unit: "Unassigned".to_string(),
            initials: "R".to_string(),
        }
    }
}

/// Payload for configuring the resident profile (seed file only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResidentCreate {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

impl ResidentCreate {
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if is_blank(&self.name) {
            errors.insert("name", "Name is required".to_string());
        }
        errors
    }
}

/// Uppercased first letters of the first and last word: "Jane van Doe" → "JD".
pub fn initials_for(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}
