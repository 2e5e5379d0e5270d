//! Free-text search plus a status filter over a list of records.

use crate::model::{
    BookingStatus, FacilityBooking, MaintenanceTicket, MoveRequest, MoveStatus, TicketStatus,
};

/// A record that can be matched by [`SearchFilter`].
pub trait Searchable {
    type Status: Copy + PartialEq;

    /// Text fields searched by the free-text query.
    fn search_text(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;
}

impl Searchable for MaintenanceTicket {
    type Status = TicketStatus;

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.description.as_str(), self.id.as_str()];
        fields.extend(self.resident.as_deref());
        fields
    }

    fn status(&self) -> TicketStatus {
        self.status
    }
}

impl Searchable for FacilityBooking {
    type Status = BookingStatus;

    fn search_text(&self) -> Vec<&str> {
        vec![self.facility.as_str(), self.requester.as_str()]
    }

    fn status(&self) -> BookingStatus {
        self.status
    }
}

impl Searchable for MoveRequest {
    type Status = MoveStatus;

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.requester.as_str()];
        fields.extend(self.notes.as_deref());
        fields
    }

    fn status(&self) -> MoveStatus {
        self.status
    }
}

/// Query text and status filter. `status == None` means all statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter<S> {
    query: String,
    status: Option<S>,
    initial_status: Option<S>,
}

impl<S: Copy + PartialEq> Default for SearchFilter<S> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<S: Copy + PartialEq> SearchFilter<S> {
    /// Empty query, starting with `status` selected. [`reset`](Self::reset) returns here.
    pub fn new(status: Option<S>) -> Self {
        Self {
            query: String::new(),
            status,
            initial_status: status,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> Option<S> {
        self.status
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_status(&mut self, status: Option<S>) {
        self.status = status;
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.status = self.initial_status;
    }

    /// True when the filter would hide anything.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.status.is_some()
    }

    /// Case-insensitive substring match on any search field, and an exact status match when a
    /// status is selected.
    pub fn matches<T: Searchable<Status = S>>(&self, item: &T) -> bool {
        if let Some(status) = self.status {
            if item.status() != status {
                return false;
            }
        }
        let needle = self.query.trim().to_lowercase();
        needle.is_empty()
            || item
                .search_text()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    /// The matching items, in their original order.
    pub fn apply<'a, T: Searchable<Status = S>>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}
