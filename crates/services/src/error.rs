//! Shared error types for the services crate.

use thiserror::Error;

use practice_core::CatalogError;
use storage::repository::StorageError;

/// Reasons an imported progress document is rejected.
///
/// Any of these leaves the current session untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("progress file is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),
    #[error("progress file must be a JSON object")]
    NotAnObject,
    #[error("progress file is missing `{0}`")]
    MissingField(&'static str),
    #[error("`attempts` must be an array")]
    AttemptsNotArray,
    #[error("`points` must be a number")]
    PointsNotNumeric,
    #[error("`points` must be a whole number, got {0}")]
    PointsNotInteger(f64),
    #[error("`points` is out of range: {0}")]
    PointsOutOfRange(String),
    #[error("invalid attempt entry: {0}")]
    InvalidAttempt(#[source] serde_json::Error),
    #[error("attempt {index} is timestamped before the attempt preceding it")]
    TimestampsOutOfOrder { index: usize },
}

/// Errors emitted by the practice services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PracticeError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode progress document: {0}")]
    Export(#[from] serde_json::Error),
}
