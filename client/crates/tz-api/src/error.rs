use tz_core::FieldErrors;

use std::result::Result as StdResult;

use thiserror::Error;

/// The normalized error every failed remote call resolves to.
///
/// Deliberately `Clone` and free of the transport error: the value is shared
/// between concurrent cache waiters, and callers above the pipeline are never
/// allowed to see the raw transport failure. The underlying cause is logged
/// at debug level inside the pipeline before normalization.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response was received at all (DNS, connect, timeout).
    #[error("Network error. Please check your connection.")]
    Network,

    /// 401 - the pipeline has already cleared the session when this is raised.
    #[error("Session expired. Please login again.")]
    Unauthorized,

    /// 403
    #[error("You do not have permission to perform this action.")]
    Forbidden,

    /// 404
    #[error("Resource not found.")]
    NotFound,

    /// 422 - carries the server's field map unmodified. Never toasted
    /// globally; the initiating form renders the per-field messages.
    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    /// 500
    #[error("Server error. Please try again later.")]
    Server,

    /// Any other status.
    #[error("{message}")]
    Unexpected {
        status: u16,
        message: String,
        errors: Option<FieldErrors>,
    },

    /// A 2xx body that could not be decoded into the expected envelope.
    #[error("Invalid server response.")]
    Decode,
}

impl ApiError {
    /// HTTP status this error was normalized from, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network | ApiError::Decode => None,
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound => Some(404),
            ApiError::Validation { .. } => Some(422),
            ApiError::Server => Some(500),
            ApiError::Unexpected { status, .. } => Some(*status),
        }
    }

    /// The per-field message map, when the server provided one.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ApiError::Validation { errors, .. } => Some(errors),
            ApiError::Unexpected {
                errors: Some(errors),
                ..
            } => Some(errors),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation { .. })
    }
}

pub type ApiResult<T> = StdResult<T, ApiError>;
