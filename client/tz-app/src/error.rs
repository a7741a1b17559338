use tz_api::ApiError;
use tz_core::FieldErrors;

use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] tz_session::SessionError),

    #[error(transparent)]
    Core(#[from] tz_core::CoreError),

    #[error(transparent)]
    Config(#[from] tz_config::ConfigError),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line input that clap cannot express (e.g. dates).
    #[error("{0}")]
    Argument(String),

    /// Protected command attempted without a session.
    #[error("{0}")]
    Guard(String),
}

impl AppError {
    /// The normalized remote error, when that is what failed. Used to avoid
    /// printing a second line for failures the pipeline already toasted.
    pub(crate) fn as_api(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(error) => Some(error),
            AppError::Session(error) => error.as_api(),
            _ => None,
        }
    }

    /// Per-field messages, from either a 422 response or local validation.
    pub(crate) fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Api(error) => error.field_errors(),
            AppError::Session(error) => error.as_api().and_then(ApiError::field_errors),
            AppError::Core(error) => error.field_errors(),
            _ => None,
        }
    }
}
