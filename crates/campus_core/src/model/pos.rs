//! Point-of-sale domain model.
//!
//! # Invariants
//! - `name` is unique across all stored points of sale (enforced by storage).
//! - `created_at`/`updated_at` are assigned by storage and ignored on write.

use super::{require_text, DomainModel, ValidationError};
use serde::{Deserialize, Serialize};

/// Numeric surrogate key for points of sale.
pub type PosId = i64;

const POSTAL_CODE_RANGE: std::ops::RangeInclusive<u32> = 1000..=99999;

/// Kind of point of sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosType {
    Cafe,
    VendingMachine,
    Bakery,
    Cafeteria,
}

impl PosType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cafe => "cafe",
            Self::VendingMachine => "vending_machine",
            Self::Bakery => "bakery",
            Self::Cafeteria => "cafeteria",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cafe" => Some(Self::Cafe),
            "vending_machine" => Some(Self::VendingMachine),
            "bakery" => Some(Self::Bakery),
            "cafeteria" => Some(Self::Cafeteria),
            _ => None,
        }
    }
}

/// Campus a point of sale belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Campus {
    Altstadt,
    Bergheim,
    Inf,
}

impl Campus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Altstadt => "altstadt",
            Self::Bergheim => "bergheim",
            Self::Inf => "inf",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "altstadt" => Some(Self::Altstadt),
            "bergheim" => Some(Self::Bergheim),
            "inf" => Some(Self::Inf),
            _ => None,
        }
    }
}

/// A place on campus that sells coffee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    pub id: Option<PosId>,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub pos_type: PosType,
    pub campus: Campus,
    pub street: String,
    pub house_number: String,
    pub postal_code: u32,
    pub city: String,
    /// Unix epoch milliseconds, set by storage.
    pub created_at: Option<i64>,
    /// Unix epoch milliseconds, set by storage.
    pub updated_at: Option<i64>,
}

impl Pos {
    /// Creates an unpersisted point of sale with an empty address.
    pub fn new(name: impl Into<String>, pos_type: PosType, campus: Campus) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            pos_type,
            campus,
            street: String::new(),
            house_number: String::new(),
            postal_code: 0,
            city: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the postal address, consuming and returning `self`.
    pub fn with_address(
        mut self,
        street: impl Into<String>,
        house_number: impl Into<String>,
        postal_code: u32,
        city: impl Into<String>,
    ) -> Self {
        self.street = street.into();
        self.house_number = house_number.into();
        self.postal_code = postal_code;
        self.city = city.into();
        self
    }

    /// Checks field-level constraints before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("street", &self.street)?;
        require_text("house_number", &self.house_number)?;
        require_text("city", &self.city)?;
        if !POSTAL_CODE_RANGE.contains(&self.postal_code) {
            return Err(ValidationError::InvalidField {
                field: "postal_code",
                reason: format!("`{}` is not a valid postal code", self.postal_code),
            });
        }
        Ok(())
    }
}

impl DomainModel for Pos {
    type Id = PosId;
    const ENTITY_TYPE: &'static str = "Pos";

    fn id(&self) -> Option<PosId> {
        self.id
    }

    fn set_id(&mut self, id: Option<PosId>) {
        self.id = id;
    }
}
