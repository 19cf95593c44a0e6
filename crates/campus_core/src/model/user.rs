//! Campus user domain model.
//!
//! # Invariants
//! - `login_name` and `email_address` are unique (enforced by storage).
//! - `login_name` uses only `[A-Za-z0-9_.-]` and is 3..=32 chars long.

use super::{require_text, DomainModel, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Numeric surrogate key for users.
pub type UserId = i64;

static LOGIN_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]{3,32}$").expect("valid login name regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email address regex")
});

/// A registered campus user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<UserId>,
    pub login_name: String,
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl User {
    /// Creates an unpersisted user.
    pub fn new(
        login_name: impl Into<String>,
        email_address: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            login_name: login_name.into(),
            email_address: email_address.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("login_name", &self.login_name)?;
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        if !LOGIN_NAME_RE.is_match(&self.login_name) {
            return Err(ValidationError::InvalidField {
                field: "login_name",
                reason: "expected 3-32 characters of [A-Za-z0-9_.-]".to_string(),
            });
        }
        if !EMAIL_RE.is_match(&self.email_address) {
            return Err(ValidationError::InvalidField {
                field: "email_address",
                reason: format!("`{}` is not an email address", self.email_address),
            });
        }
        Ok(())
    }
}

impl DomainModel for User {
    type Id = UserId;
    const ENTITY_TYPE: &'static str = "User";

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn set_id(&mut self, id: Option<UserId>) {
        self.id = id;
    }
}
