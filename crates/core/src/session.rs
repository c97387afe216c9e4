use crate::model::{Attempt, AttemptLog};
use crate::progress::trailing_streak;
use crate::scoring::{ScoreDelta, score};

/// Points, streak and attempt log for one learner session.
///
/// A plain value: operations take it by value and hand back the next state,
/// so the host decides where the single live instance lives and when it is
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    log: AttemptLog,
    points: i64,
    streak: u32,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from persisted history and points.
    ///
    /// The streak is not persisted; it is the trailing run of correct
    /// attempts in `history`.
    #[must_use]
    pub fn restore(history: Vec<Attempt>, points: i64) -> Self {
        let streak = trailing_streak(&history);
        Self {
            log: AttemptLog::from_attempts(history),
            points,
            streak,
        }
    }

    /// Score `attempt`, append it, and return the updated state.
    #[must_use]
    pub fn record(mut self, attempt: Attempt) -> (Self, ScoreDelta) {
        let delta = score(&attempt, self.streak);
        self.points = self.points.saturating_add(delta.points_delta);
        self.streak = delta.new_streak;
        self.log.append(attempt);
        (self, delta)
    }

    /// Empty log, zero points, zero streak.
    #[must_use]
    pub fn cleared(self) -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        self.log.as_slice()
    }

    #[must_use]
    pub fn log(&self) -> &AttemptLog {
        &self.log
    }

    #[must_use]
    pub fn points(&self) -> i64 {
        self.points
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }
}
