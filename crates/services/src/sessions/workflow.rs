use std::sync::Arc;

use practice_core::content::{ContentProvider, StaticContent};
use practice_core::model::{AgeBand, Item, Language};
use practice_core::{Catalog, SessionState};
use storage::repository::{PreferenceRepository, SessionStore, Storage};

use super::progress::ProgressView;
use super::service::{PracticeSession, SubmitOutcome};
use crate::config::PracticeConfig;
use crate::error::PracticeError;
use crate::speech::{NullSpeaker, Speaker};
use crate::transfer::{export_document, import_document};
use crate::Clock;

/// Wires the pure session to its collaborators.
///
/// Owns the clock, the catalog, content and speech collaborators and the
/// session store. Persistence is best effort: a failed write is logged and
/// the in-memory session carries on as the source of truth.
#[derive(Clone)]
pub struct PracticeLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
    sessions: Arc<dyn SessionStore>,
    preferences: Arc<dyn PreferenceRepository>,
    content: Arc<dyn ContentProvider>,
    speaker: Arc<dyn Speaker>,
    config: PracticeConfig,
}

impl PracticeLoopService {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage) -> Self {
        Self {
            clock,
            catalog: Arc::new(Catalog::place_value()),
            sessions: Arc::clone(&storage.sessions),
            preferences: Arc::clone(&storage.preferences),
            content: Arc::new(StaticContent),
            speaker: Arc::new(NullSpeaker),
            config: PracticeConfig::default(),
        }
    }

    /// Replace the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Catalog` if the items violate catalog invariants.
    pub fn with_catalog_items(mut self, items: Vec<Item>) -> Result<Self, PracticeError> {
        self.catalog = Arc::new(Catalog::new(items)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_content(mut self, content: Arc<dyn ContentProvider>) -> Self {
        self.content = content;
        self
    }

    #[must_use]
    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        self.speaker = speaker;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: PracticeConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    #[must_use]
    pub fn content(&self) -> &dyn ContentProvider {
        self.content.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read the persisted session without any fallback.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Storage` if the store cannot be read.
    pub async fn load_state(&self) -> Result<SessionState, PracticeError> {
        let stored = self.sessions.load().await?;
        Ok(SessionState::restore(stored.history, stored.points))
    }

    /// Restore the persisted session and present the first item.
    ///
    /// An unreadable store yields an empty session rather than an error.
    pub async fn start_session(&self) -> PracticeSession {
        let state = match self.load_state().await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = %err, "session store unavailable, starting empty");
                SessionState::new()
            }
        };
        tracing::info!(
            attempts = state.history().len(),
            points = state.points(),
            "session started"
        );
        PracticeSession::new(Arc::clone(&self.catalog), state, self.clock.now())
    }

    /// Current language: explicit config, then stored preference, then Hindi.
    pub async fn language(&self) -> Language {
        if let Some(lang) = self.config.language {
            return lang;
        }
        match self.preferences.language().await {
            Ok(Some(lang)) => lang,
            Ok(None) => Language::default(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read language preference");
                Language::default()
            }
        }
    }

    pub async fn set_language(&self, lang: Language) {
        if let Err(err) = self.preferences.save_language(lang).await {
            tracing::warn!(error = %err, "failed to persist language preference");
        }
    }

    /// Hint for the current item; marks it as hinted.
    pub fn hint(
        &self,
        session: &mut PracticeSession,
        last_response: Option<&str>,
        lang: Language,
    ) -> String {
        session.request_hint(self.content.as_ref(), last_response, lang)
    }

    /// Submit using the service clock, then persist.
    pub async fn submit(&self, session: &mut PracticeSession, raw_response: &str) -> SubmitOutcome {
        let outcome = session.submit(raw_response, self.clock.now());
        self.persist(session).await;
        outcome
    }

    /// Clear the session in memory and in the store.
    pub async fn reset(&self, session: &mut PracticeSession) {
        session.reset(self.clock.now());
        if let Err(err) = self.sessions.clear().await {
            tracing::warn!(error = %err, "failed to clear stored session");
        }
        tracing::info!("session reset");
    }

    /// Encode the session as a progress document.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Export` if encoding fails.
    pub fn export(&self, session: &PracticeSession) -> Result<String, PracticeError> {
        let state = session.state();
        let text = export_document(state.history(), state.points())?;
        tracing::info!(attempts = state.history().len(), "exported progress");
        Ok(text)
    }

    /// Validate `text` and, only if it passes, replace the session with it.
    ///
    /// # Errors
    ///
    /// Returns `PracticeError::Import` when the document is malformed; the
    /// session is left exactly as it was.
    pub async fn import(
        &self,
        session: &mut PracticeSession,
        text: &str,
    ) -> Result<(), PracticeError> {
        let doc = import_document(text).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected progress import");
        })?;

        session.replace(doc.attempts, doc.points, self.clock.now());
        let state = session.state();
        if let Err(err) = self.sessions.replace(state.history(), state.points()).await {
            tracing::warn!(error = %err, "failed to persist imported session");
        }
        tracing::info!(
            attempts = state.history().len(),
            points = state.points(),
            "imported progress"
        );
        Ok(())
    }

    #[must_use]
    pub fn progress(&self, session: &PracticeSession) -> ProgressView {
        session.progress(self.config.target_count)
    }

    pub fn speak_prompt(&self, session: &PracticeSession, lang: Language) {
        let text = self.content.prompt(session.current_item(), lang);
        self.speaker.speak(&text, lang);
    }

    pub fn speak_explainer(&self, age_band: AgeBand, lang: Language) {
        let text = self.content.explainer(age_band, lang);
        self.speaker.speak(&text, lang);
    }

    async fn persist(&self, session: &PracticeSession) {
        let state = session.state();
        if let Err(err) = self.sessions.save(state.history(), state.points()).await {
            tracing::warn!(error = %err, "failed to persist session; continuing in memory");
        }
    }
}
