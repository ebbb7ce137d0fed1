use std::path::PathBuf;
use thiserror::Error;

use crate::sourcing::Provider;

#[derive(Error, Debug)]
pub enum JobHuntError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Targets file error: {path:?} - {message}")]
    TargetsError {
        path: PathBuf,
        message: String,
    },

    #[error("{provider} API error for '{handle}': {message}")]
    ApiError {
        provider: Provider,
        handle: String,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<anyhow::Error> for JobHuntError {
    fn from(error: anyhow::Error) -> Self {
        JobHuntError::UnexpectedError(error.to_string())
    }
}

pub type JobHuntResult<T> = std::result::Result<T, JobHuntError>;
