//! Domain models managed through the generic CRUD layer.
//!
//! # Responsibility
//! - Define the identity contract every persisted entity exposes.
//! - Provide the campus entities (`Pos`, `User`) served by the workspace.
//!
//! # Invariants
//! - `id() == None` means the entity has not been persisted yet.
//! - An entity returned from a successful write always carries `Some(id)`.
//! - Field validation lives on the entity, never in the orchestration layer.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod pos;
pub mod user;

/// Identity contract for entities handled by `CrudService`.
pub trait DomainModel {
    /// Identifier type, e.g. a numeric surrogate key.
    type Id: Clone + Eq + Debug + Display;

    /// Entity kind name used in error reporting.
    const ENTITY_TYPE: &'static str;

    /// Returns the identifier, or `None` for unpersisted entities.
    fn id(&self) -> Option<Self::Id>;

    /// Sets or clears the identifier.
    fn set_id(&mut self, id: Option<Self::Id>);

    /// Returns whether the entity has been persisted.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

/// Field-level validation failure for a domain entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    BlankField(&'static str),
    /// A field has a value outside its accepted format or range.
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "field `{field}` must not be blank"),
            Self::InvalidField { field, reason } => {
                write!(f, "field `{field}` is invalid: {reason}")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}
