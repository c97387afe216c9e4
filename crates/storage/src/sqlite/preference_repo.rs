use async_trait::async_trait;
use practice_core::model::Language;
use sqlx::Row;

use super::{SqliteRepository, mapping::parse_language};
use crate::repository::{PreferenceRepository, StorageError};

#[async_trait]
impl PreferenceRepository for SqliteRepository {
    async fn language(&self) -> Result<Option<Language>, StorageError> {
        let row = sqlx::query("SELECT language FROM preferences WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let raw: String = row
            .try_get("language")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        parse_language(&raw).map(Some)
    }

    async fn save_language(&self, lang: Language) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (id, language)
            VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET language = excluded.language
            ",
        )
        .bind(lang.code())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
