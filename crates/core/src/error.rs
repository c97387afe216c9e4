use thiserror::Error;

use crate::model::{Difficulty, ItemId};

/// Errors raised when a catalog fails its load-time invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no items")]
    Empty,

    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),

    #[error("catalog has no item at difficulty {}", .0.level())]
    MissingDifficulty(Difficulty),
}

/// Errors raised when parsing domain values from their textual/numeric form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("invalid difficulty level: {0}")]
    InvalidDifficulty(u8),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("unknown age band: {0}")]
    UnknownAgeBand(String),
}
