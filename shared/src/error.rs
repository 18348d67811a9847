//! Error types for the Seldon deploy functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or resolving deploys.
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable was not set
    #[error("missing required configuration: environment variable {var} is not set")]
    MissingRequiredConfig { var: String },

    /// A variable was set but could not be read as a string
    #[error("invalid configuration: environment variable {var} is not valid unicode")]
    NotUnicode { var: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Name of the missing variable, if this is a missing-configuration error.
    pub fn missing_var(&self) -> Option<&str> {
        match self {
            Error::MissingRequiredConfig { var } => Some(var.as_str()),
            _ => None,
        }
    }

    /// Name of the offending variable for any configuration error.
    pub fn config_var(&self) -> Option<&str> {
        match self {
            Error::MissingRequiredConfig { var } | Error::NotUnicode { var } => Some(var.as_str()),
            Error::Validation(_) => None,
        }
    }
}
