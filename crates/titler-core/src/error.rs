use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Summarizer error: {message} {location}")]
    Summarizer {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        CoreError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a summarizer error
    #[track_caller]
    pub fn summarizer<S: Into<String>>(message: S) -> Self {
        CoreError::Summarizer {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CoreError::from_json(err)
    }
}

pub type Result<T> = StdResult<T, CoreError>;
