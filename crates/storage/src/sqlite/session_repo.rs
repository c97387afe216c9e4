use async_trait::async_trait;
use practice_core::model::Attempt;
use sqlx::{Row, Sqlite, Transaction};

use super::{SqliteRepository, mapping::map_attempt_row};
use crate::repository::{SessionStore, StorageError, StoredSession};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

/// Rewrite the attempt log and totals inside an open transaction.
async fn write_session(
    tx: &mut Transaction<'_, Sqlite>,
    history: &[Attempt],
    points: i64,
) -> Result<(), StorageError> {
    sqlx::query("DELETE FROM attempts")
        .execute(&mut **tx)
        .await
        .map_err(conn)?;

    for (seq, attempt) in history.iter().enumerate() {
        let seq = i64::try_from(seq)
            .map_err(|_| StorageError::Serialization("attempt seq overflow".into()))?;
        sqlx::query(
            r"
                INSERT INTO attempts (
                    seq, item_id, response, correct, elapsed_ms, hint_used, timestamp
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(seq)
        .bind(attempt.item_id.as_str())
        .bind(attempt.response.as_str())
        .bind(attempt.correct)
        .bind(attempt.elapsed_ms)
        .bind(attempt.hint_used)
        .bind(attempt.timestamp)
        .execute(&mut **tx)
        .await
        .map_err(conn)?;
    }

    sqlx::query(
        r"
            INSERT INTO session_totals (id, points)
            VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET points = excluded.points
        ",
    )
    .bind(points)
    .execute(&mut **tx)
    .await
    .map_err(conn)?;

    Ok(())
}

#[async_trait]
impl SessionStore for SqliteRepository {
    async fn load(&self) -> Result<StoredSession, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT item_id, response, correct, elapsed_ms, hint_used, timestamp
                FROM attempts
                ORDER BY seq ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut history = Vec::with_capacity(rows.len());
        for row in rows {
            history.push(map_attempt_row(&row)?);
        }

        let points = sqlx::query("SELECT points FROM session_totals WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?
            .map(|row| row.try_get::<i64, _>("points"))
            .transpose()
            .map_err(|e| StorageError::Serialization(e.to_string()))?
            .unwrap_or(0);

        Ok(StoredSession { history, points })
    }

    async fn save(&self, history: &[Attempt], points: i64) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        write_session(&mut tx, history, points).await?;
        tx.commit().await.map_err(conn)?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        sqlx::query("DELETE FROM attempts")
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        sqlx::query("DELETE FROM session_totals")
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        tx.commit().await.map_err(conn)?;
        Ok(())
    }

    async fn replace(&self, history: &[Attempt], points: i64) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        write_session(&mut tx, history, points).await?;
        tx.commit().await.map_err(conn)?;
        tracing::info!(attempts = history.len(), points, "replaced stored session");
        Ok(())
    }
}
