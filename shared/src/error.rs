use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum FixtureError {
    #[error("At least 2 participants are required, got {count}")]
    InvalidParticipantCount { count: usize },

    #[error("At least one venue must be selected")]
    NoVenuesSelected,

    #[error("Invalid start date: {0}")]
    InvalidStartDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Participant listed more than once: {0}")]
    DuplicateParticipant(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Failed to persist fixtures: {0}")]
    Persistence(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FixtureError {
    /// Precondition failures are raised before any fixture is computed
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            FixtureError::InvalidParticipantCount { .. }
                | FixtureError::NoVenuesSelected
                | FixtureError::InvalidStartDate(_)
                | FixtureError::InvalidTimezone(_)
                | FixtureError::DuplicateParticipant(_)
                | FixtureError::Validation(_)
        )
    }
}

impl From<ValidationErrors> for FixtureError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for FixtureError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
