use async_trait::async_trait;
use practice_core::model::{Attempt, Language};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// What a session store hands back on startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub history: Vec<Attempt>,
    pub points: i64,
}

/// Persistence boundary for the attempt log and cumulative points.
///
/// Every write replaces the stored state as a whole, so readers never see a
/// partially written log.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the persisted session, or empty defaults if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load(&self) -> Result<StoredSession, StorageError>;

    /// Persist the full history and points after a mutation.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save(&self, history: &[Attempt], points: i64) -> Result<(), StorageError>;

    /// Remove everything stored for the session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn clear(&self) -> Result<(), StorageError>;

    /// Swap in an imported session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn replace(&self, history: &[Attempt], points: i64) -> Result<(), StorageError> {
        self.save(history, points).await
    }
}

/// Persisted UI preferences.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` on read failures.
    async fn language(&self) -> Result<Option<Language>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` on write failures.
    async fn save_language(&self, lang: Language) -> Result<(), StorageError>;
}

/// In-memory store for tests and throwaway sessions.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    session: Arc<Mutex<StoredSession>>,
    language: Arc<Mutex<Option<Language>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl SessionStore for InMemoryRepository {
    async fn load(&self) -> Result<StoredSession, StorageError> {
        let guard = self.session.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }

    async fn save(&self, history: &[Attempt], points: i64) -> Result<(), StorageError> {
        let mut guard = self.session.lock().map_err(poisoned)?;
        *guard = StoredSession {
            history: history.to_vec(),
            points,
        };
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.session.lock().map_err(poisoned)?;
        *guard = StoredSession::default();
        Ok(())
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryRepository {
    async fn language(&self) -> Result<Option<Language>, StorageError> {
        let guard = self.language.lock().map_err(poisoned)?;
        Ok(*guard)
    }

    async fn save_language(&self, lang: Language) -> Result<(), StorageError> {
        let mut guard = self.language.lock().map_err(poisoned)?;
        *guard = Some(lang);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionStore>,
    pub preferences: Arc<dyn PreferenceRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let sessions: Arc<dyn SessionStore> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferenceRepository> = Arc::new(repo);
        Self {
            sessions,
            preferences,
        }
    }
}
