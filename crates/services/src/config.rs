use practice_core::model::Language;
use practice_core::progress::DEFAULT_TARGET_COUNT;

/// Host-supplied knobs for a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeConfig {
    /// Attempts that count as a full session for the completion ratio.
    pub target_count: u32,
    /// Forces the content language; `None` defers to the stored preference.
    pub language: Option<Language>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            target_count: DEFAULT_TARGET_COUNT,
            language: None,
        }
    }
}

impl PracticeConfig {
    #[must_use]
    pub fn with_target_count(mut self, target_count: u32) -> Self {
        self.target_count = target_count;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }
}
