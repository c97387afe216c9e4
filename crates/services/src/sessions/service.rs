use chrono::{DateTime, Utc};
use std::sync::Arc;

use practice_core::content::ContentProvider;
use practice_core::model::{Attempt, Item, ItemId, Language};
use practice_core::scoring::ScoreDelta;
use practice_core::steering::choose_next_item;
use practice_core::time::elapsed_ms;
use practice_core::{Catalog, SessionState};

use super::progress::ProgressView;

/// Result of submitting an answer for the current item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub attempt: Attempt,
    pub delta: ScoreDelta,
    pub points: i64,
    pub next_item: ItemId,
}

/// Host-owned practice session.
///
/// Holds the single live `SessionState` and the presentation state around it
/// (current item, when it was shown, whether a hint was requested). All
/// decisions are delegated to the pure core; this type only threads state
/// through it.
pub struct PracticeSession {
    catalog: Arc<Catalog>,
    state: SessionState,
    current: Item,
    presented_at: DateTime<Utc>,
    hint_used: bool,
}

impl PracticeSession {
    /// Start from `state`, presenting whatever steering picks for its history.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, state: SessionState, now: DateTime<Utc>) -> Self {
        let current = choose_next_item(&catalog, state.history()).clone();
        Self {
            catalog,
            state,
            current,
            presented_at: now,
            hint_used: false,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn current_item(&self) -> &Item {
        &self.current
    }

    #[must_use]
    pub fn presented_at(&self) -> DateTime<Utc> {
        self.presented_at
    }

    #[must_use]
    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Mark the current item as hinted and return the hint text.
    ///
    /// Asking again for the same item does not add a second penalty; the
    /// penalty is charged once, on submit.
    pub fn request_hint(
        &mut self,
        content: &dyn ContentProvider,
        last_response: Option<&str>,
        lang: Language,
    ) -> String {
        self.hint_used = true;
        content.hint(&self.current, last_response, lang)
    }

    /// Grade, score and record a response, then present the next item.
    ///
    /// Never fails: blank or malformed responses are scored as incorrect.
    pub fn submit(&mut self, raw_response: &str, now: DateTime<Utc>) -> SubmitOutcome {
        let elapsed = elapsed_ms(self.presented_at, now);
        let attempt = Attempt::evaluate(&self.current, raw_response, elapsed, self.hint_used, now);

        let state = std::mem::take(&mut self.state);
        let (state, delta) = state.record(attempt.clone());
        self.state = state;

        tracing::debug!(
            item = %attempt.item_id,
            correct = attempt.correct,
            points_delta = delta.points_delta,
            streak = delta.new_streak,
            "scored attempt"
        );

        self.present_next(now);

        SubmitOutcome {
            attempt,
            delta,
            points: self.state.points(),
            next_item: self.current.id().clone(),
        }
    }

    /// Drop the whole log, points and streak.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.cleared();
        self.present_next(now);
    }

    /// Swap in an imported history and points as one step.
    pub fn replace(&mut self, history: Vec<Attempt>, points: i64, now: DateTime<Utc>) {
        self.state = SessionState::restore(history, points);
        self.present_next(now);
    }

    #[must_use]
    pub fn progress(&self, target_count: u32) -> ProgressView {
        ProgressView::build(
            self.state.history(),
            self.state.points(),
            self.state.streak(),
            target_count,
        )
    }

    fn present_next(&mut self, now: DateTime<Utc>) {
        self.current = choose_next_item(&self.catalog, self.state.history()).clone();
        self.presented_at = now;
        self.hint_used = false;
        tracing::debug!(
            item = %self.current.id(),
            difficulty = self.current.difficulty().level(),
            "presenting item"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use practice_core::content::StaticContent;
    use practice_core::time::fixed_now;

    fn session() -> PracticeSession {
        PracticeSession::new(
            Arc::new(Catalog::place_value()),
            SessionState::new(),
            fixed_now(),
        )
    }

    #[test]
    fn starts_on_first_medium_item() {
        let session = session();
        assert_eq!(session.current_item().id(), "q3");
        assert!(!session.hint_used());
    }

    #[test]
    fn submit_measures_elapsed_wall_clock() {
        let mut session = session();
        let outcome = session.submit(" 400+0+8 ", fixed_now() + Duration::milliseconds(4_250));
        assert!(outcome.attempt.correct);
        assert_eq!(outcome.attempt.elapsed_ms, 4_250);
        assert_eq!(outcome.attempt.response, "400+0+8");
        assert_eq!(outcome.points, 10);
    }

    #[test]
    fn hint_is_charged_once_and_cleared_after_submit() {
        let mut session = session();
        let content = StaticContent;
        let hint = session.request_hint(&content, None, Language::En);
        assert!(hint.contains("tens"));
        session.request_hint(&content, Some("400+8+0"), Language::En);

        let outcome = session.submit("wrong", fixed_now());
        assert!(outcome.attempt.hint_used);
        assert_eq!(outcome.delta.points_delta, -3);
        assert_eq!(outcome.points, -3);
        assert!(!session.hint_used());
    }

    #[test]
    fn timer_restarts_for_next_item() {
        let mut session = session();
        let first = fixed_now() + Duration::seconds(3);
        session.submit("400+0+8", first);
        assert_eq!(session.presented_at(), first);

        let outcome = session.submit("x", first + Duration::seconds(2));
        assert_eq!(outcome.attempt.elapsed_ms, 2_000);
    }

    #[test]
    fn steering_follows_performance() {
        let mut session = session();
        let mut now = fixed_now();
        // Answer everything correctly: difficulty climbs to the hard tier.
        for _ in 0..5 {
            now += Duration::seconds(1);
            let key = session.current_item().answer_key().to_string();
            session.submit(&key, now);
        }
        assert_eq!(session.current_item().difficulty().level(), 3);
        assert_eq!(session.state().streak(), 5);
        // 5 x 10 plus the bonus at streak 3.
        assert_eq!(session.state().points(), 55);

        for _ in 0..5 {
            now += Duration::seconds(1);
            session.submit("nope", now);
        }
        assert_eq!(session.current_item().difficulty().level(), 1);
        assert_eq!(session.state().streak(), 0);
    }

    #[test]
    fn reset_clears_state() {
        let mut session = session();
        session.request_hint(&StaticContent, None, Language::Hi);
        session.submit("400+0+8", fixed_now());
        session.reset(fixed_now());
        assert!(session.state().history().is_empty());
        assert_eq!(session.state().points(), 0);
        assert!(!session.hint_used());
        assert_eq!(session.current_item().id(), "q3");
    }

    #[test]
    fn replace_restores_points_and_streak() {
        let mut source = session();
        source.submit("400+0+8", fixed_now());
        source.submit("527", fixed_now());
        let history = source.state().history().to_vec();

        let mut target = session();
        target.replace(history.clone(), 99, fixed_now());
        assert_eq!(target.state().history(), history.as_slice());
        assert_eq!(target.state().points(), 99);
        assert_eq!(target.state().streak(), 2);
    }

    #[test]
    fn progress_reflects_state() {
        let mut session = session();
        session.submit("400+0+8", fixed_now() + Duration::seconds(4));
        session.submit("bad", fixed_now() + Duration::seconds(6));
        let view = session.progress(10);
        assert_eq!(view.summary.accuracy, 50);
        assert_eq!(view.summary.average_latency_ms, 3_000);
        assert_eq!(view.summary.completion_ratio, 20);
        assert_eq!(view.recent[0].response, "bad");
    }
}
