use chrono::{DateTime, Utc};
use practice_core::model::{Attempt, ItemId, Language};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn map_attempt_row(row: &sqlx::sqlite::SqliteRow) -> Result<Attempt, StorageError> {
    let item_id: String = row.try_get("item_id").map_err(ser)?;
    let timestamp: DateTime<Utc> = row.try_get("timestamp").map_err(ser)?;

    Ok(Attempt {
        item_id: ItemId::new(item_id),
        response: row.try_get("response").map_err(ser)?,
        correct: row.try_get("correct").map_err(ser)?,
        elapsed_ms: row.try_get("elapsed_ms").map_err(ser)?,
        hint_used: row.try_get("hint_used").map_err(ser)?,
        timestamp,
    })
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, StorageError> {
    raw.parse::<Language>().map_err(ser)
}
