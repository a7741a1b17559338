use crate::validate::FieldErrors;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task priority: {value} {location}")]
    InvalidTaskPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid invite status: {value} {location}")]
    InvalidInviteStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid team role: {value} {location}")]
    InvalidTeamRole {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// The per-field message map for validation failures, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CoreError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
