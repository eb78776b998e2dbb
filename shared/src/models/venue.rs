use crate::error::Result;
use crate::models::id::EntityId;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// Provide a wrapper for the custom validator to be used in attribute
pub fn validate_timezone_name(val: &str) -> std::result::Result<(), ValidationError> {
    if val.parse::<Tz>().is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_timezone"))
    }
}

/// Default timezone for venues
fn default_timezone() -> String {
    "UTC".to_string()
}

/// Represents a venue fixtures can be played at
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Venue {
    /// Venue's ID
    pub id: EntityId,

    /// Venue's display name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and must be at most 100 characters"
    ))]
    pub name: String,

    /// Venue's street address
    #[validate(length(
        min = 1,
        max = 200,
        message = "Address is required and must be at most 200 characters"
    ))]
    pub address: String,

    /// Venue's timezone (IANA timezone name, e.g., "America/Chicago")
    #[serde(default = "default_timezone")]
    #[validate(custom = "validate_timezone_name")]
    pub timezone: String,
}

impl Venue {
    /// Creates a new venue with validation
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        let venue = Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            timezone: default_timezone(),
        };
        venue.validate()?;
        Ok(venue)
    }
}
