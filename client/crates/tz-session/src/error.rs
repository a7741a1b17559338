use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;
use tz_api::ApiError;

#[derive(Error, Debug)]
pub enum SessionError {
    /// A remote call failed; the pipeline already normalized (and toasted)
    /// it. Re-raised so forms can render field errors.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    /// The normalized remote error, when that is what failed.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            SessionError::Api(error) => Some(error),
            SessionError::Storage { .. } => None,
        }
    }
}

pub type SessionResult<T> = StdResult<T, SessionError>;
