//! Data-access port and persistence implementations.
//!
//! # Responsibility
//! - Define the generic CRUD contract the orchestration layer depends on.
//! - Define the error taxonomy every port implementation reports through.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - `get_by_id` reports a missing record as `RepoError::NotFound`.
//! - `upsert` reports uniqueness violations as `RepoError::Duplicate`.
//! - A successful `upsert` returns the stored entity with `Some(id)`.

use crate::db::DbError;
use crate::model::{DomainModel, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod pos_repo;
pub mod user_repo;

static UNIQUE_FAILURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"UNIQUE constraint failed: \w+\.(\w+)").expect("valid unique failure regex")
});

pub type RepoResult<T> = Result<T, RepoError>;

/// Uniqueness violation raised by a port while persisting an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicationError {
    pub entity_type: &'static str,
    pub field: String,
    pub cause: String,
}

impl DuplicationError {
    pub fn new<T: DomainModel>(field: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            entity_type: T::ENTITY_TYPE,
            field: field.into(),
            cause: cause.into(),
        }
    }
}

impl Display for DuplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "duplicate {} for field `{}`: {}",
            self.entity_type, self.field, self.cause
        )
    }
}

impl Error for DuplicationError {}

/// Error reported by data-access ports.
#[derive(Debug)]
pub enum RepoError {
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    Duplicate(DuplicationError),
    Validation(ValidationError),
    Db(DbError),
    InvalidData(String),
}

impl RepoError {
    pub fn not_found<T: DomainModel>(id: &T::Id) -> Self {
        Self::NotFound {
            entity_type: T::ENTITY_TYPE,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity_type, id } => write!(f, "{entity_type} not found: {id}"),
            Self::Duplicate(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Duplicate(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DuplicationError> for RepoError {
    fn from(value: DuplicationError) -> Self {
        Self::Duplicate(value)
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data-access port for one entity type.
///
/// Implementations own persistence, uniqueness enforcement and any locking
/// needed for concurrent writers.
pub trait CrudRepository<T: DomainModel> {
    fn get_all(&self) -> RepoResult<Vec<T>>;
    fn get_by_id(&self, id: &T::Id) -> RepoResult<T>;
    fn upsert(&self, entity: T) -> RepoResult<T>;
    fn delete(&self, id: &T::Id) -> RepoResult<()>;
    fn clear(&self) -> RepoResult<()>;
}

impl<T, R> CrudRepository<T> for &R
where
    T: DomainModel,
    R: CrudRepository<T> + ?Sized,
{
    fn get_all(&self) -> RepoResult<Vec<T>> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: &T::Id) -> RepoResult<T> {
        (**self).get_by_id(id)
    }

    fn upsert(&self, entity: T) -> RepoResult<T> {
        (**self).upsert(entity)
    }

    fn delete(&self, id: &T::Id) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn clear(&self) -> RepoResult<()> {
        (**self).clear()
    }
}

/// Converts a failed SQLite write into a port error, surfacing unique
/// constraint failures as `RepoError::Duplicate`.
pub(crate) fn map_write_error<T: DomainModel>(err: rusqlite::Error) -> RepoError {
    if let rusqlite::Error::SqliteFailure(code, Some(message)) = &err {
        if code.code == ErrorCode::ConstraintViolation
            && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        {
            let field = UNIQUE_FAILURE_RE
                .captures(message)
                .and_then(|captures| captures.get(1))
                .map_or("unknown", |column| column.as_str());
            return RepoError::Duplicate(DuplicationError::new::<T>(field, message.as_str()));
        }
    }
    err.into()
}
