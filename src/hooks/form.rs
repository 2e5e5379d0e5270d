//! Form field state with per-field errors.
//!
//! Values live in a plain struct (usually a create payload such as
//! [`TicketCreate`](crate::model::TicketCreate)). Editing a field clears that field's error;
//! the validator runs only when [`FormState::validate`] is called.

use crate::model::{
    ActivityCreate, BookingCreate, FieldErrors, MoveRequestCreate, ResidentCreate, TicketCreate,
};

type Validator<V> = Box<dyn Fn(&V) -> FieldErrors + Send + Sync>;

pub struct FormState<V> {
    initial: V,
    values: V,
    errors: FieldErrors,
    validator: Validator<V>,
}

impl<V: Clone> FormState<V> {
    pub fn new(initial: V, validator: impl Fn(&V) -> FieldErrors + Send + Sync + 'static) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            validator: Box::new(validator),
        }
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Edits one field and clears its error. Other fields' errors stay until the next
    /// validation.
    pub fn set_field(&mut self, field: &'static str, edit: impl FnOnce(&mut V)) {
        edit(&mut self.values);
        self.errors.remove(field);
    }

    /// Runs the validator over the current values, replacing all errors. Returns `true` when
    /// the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = (self.validator)(&self.values);
        self.errors.is_empty()
    }

    /// Back to the initial values with no errors.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
    }

    /// Validates and, if valid, hands back a copy of the values to submit.
    pub fn submit(&mut self) -> Option<V> {
        self.validate().then(|| self.values.clone())
    }
}

impl<V: Clone + PartialEq> FormState<V> {
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }
}

/// Forms whose validator is the payload's own `field_errors`, matching the store's checks.
pub trait Validated: Clone + Default {
    fn field_errors(&self) -> FieldErrors;

    fn form() -> FormState<Self>
    where
        Self: Sized + 'static,
    {
        FormState::new(Self::default(), Self::field_errors)
    }
}

impl Validated for TicketCreate {
    fn field_errors(&self) -> FieldErrors {
        TicketCreate::field_errors(self)
    }
}

impl Validated for BookingCreate {
    fn field_errors(&self) -> FieldErrors {
        BookingCreate::field_errors(self)
    }
}

impl Validated for MoveRequestCreate {
    fn field_errors(&self) -> FieldErrors {
        MoveRequestCreate::field_errors(self)
    }
}

impl Validated for ActivityCreate {
    fn field_errors(&self) -> FieldErrors {
        ActivityCreate::field_errors(self)
    }
}

impl Validated for ResidentCreate {
    fn field_errors(&self) -> FieldErrors {
        ResidentCreate::field_errors(self)
    }
}
