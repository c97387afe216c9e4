use chrono::{DateTime, Utc};

use practice_core::model::{Attempt, ItemId};
use practice_core::progress::ProgressSummary;

/// How many recent attempts the progress view lists.
pub const RECENT_LIMIT: usize = 6;

/// One row of the recent-attempts list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentAttempt {
    pub item_id: ItemId,
    pub response: String,
    pub correct: bool,
    pub hint_used: bool,
    pub elapsed_ms: i64,
    pub timestamp: DateTime<Utc>,
}

impl RecentAttempt {
    #[must_use]
    pub fn from_attempt(attempt: &Attempt) -> Self {
        Self {
            item_id: attempt.item_id.clone(),
            response: attempt.response.clone(),
            correct: attempt.correct,
            hint_used: attempt.hint_used,
            elapsed_ms: attempt.elapsed_ms,
            timestamp: attempt.timestamp,
        }
    }
}

/// Presentation-agnostic snapshot of session progress.
///
/// No pre-formatted strings; hosts format numbers and times themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub summary: ProgressSummary,
    pub target_count: u32,
    pub points: i64,
    pub streak: u32,
    /// Newest first.
    pub recent: Vec<RecentAttempt>,
}

impl ProgressView {
    #[must_use]
    pub fn build(history: &[Attempt], points: i64, streak: u32, target_count: u32) -> Self {
        Self {
            summary: ProgressSummary::from_history(history, target_count),
            target_count,
            points,
            streak,
            recent: history
                .iter()
                .rev()
                .take(RECENT_LIMIT)
                .map(RecentAttempt::from_attempt)
                .collect(),
        }
    }
}

/// Render milliseconds as `m:ss`. Negative durations render as `0:00`.
#[must_use]
pub fn format_elapsed(ms: i64) -> String {
    let secs = ms.max(0) / 1_000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
