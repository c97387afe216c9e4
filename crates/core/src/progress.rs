//! Read-only summaries derived from the attempt log.
//!
//! Everything here is recomputed from the full history on each call. The log
//! is bounded by session length, so no incremental state is kept.

use crate::model::Attempt;

/// Number of most recent attempts averaged for latency.
pub const LATENCY_WINDOW: usize = 10;

/// Default session goal for the completion ratio.
pub const DEFAULT_TARGET_COUNT: u32 = 10;

/// Round half up (toward positive infinity).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Percentage of correct attempts, 0 for an empty log.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn accuracy(history: &[Attempt]) -> u8 {
    let total = history.len().max(1);
    let correct = history.iter().filter(|a| a.correct).count();
    round_half_up(100.0 * correct as f64 / total as f64) as u8
}

/// Mean `elapsed_ms` over the last ten attempts, 0 for an empty log.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn average_latency_ms(history: &[Attempt]) -> i64 {
    let start = history.len().saturating_sub(LATENCY_WINDOW);
    let window = &history[start..];
    if window.is_empty() {
        return 0;
    }
    let sum: i128 = window.iter().map(|a| i128::from(a.elapsed_ms)).sum();
    round_half_up(sum as f64 / window.len() as f64) as i64
}

/// Attempts made as a percentage of `target_count`, clamped to 100.
///
/// A zero target counts as already reached.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn completion_ratio(history: &[Attempt], target_count: u32) -> u8 {
    if target_count == 0 {
        return 100;
    }
    let ratio = round_half_up(100.0 * history.len() as f64 / f64::from(target_count));
    ratio.min(100.0) as u8
}

/// Length of the run of correct attempts at the end of the log.
#[must_use]
pub fn trailing_streak(history: &[Attempt]) -> u32 {
    let run = history.iter().rev().take_while(|a| a.correct).count();
    u32::try_from(run).unwrap_or(u32::MAX)
}

/// All progress figures at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub correct: usize,
    pub accuracy: u8,
    pub average_latency_ms: i64,
    pub completion_ratio: u8,
}

impl ProgressSummary {
    #[must_use]
    pub fn from_history(history: &[Attempt], target_count: u32) -> Self {
        Self {
            total: history.len(),
            correct: history.iter().filter(|a| a.correct).count(),
            accuracy: accuracy(history),
            average_latency_ms: average_latency_ms(history),
            completion_ratio: completion_ratio(history, target_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;
    use crate::time::fixed_now;

    fn attempt(correct: bool, elapsed_ms: i64) -> Attempt {
        Attempt {
            item_id: ItemId::new("q2"),
            response: "570".into(),
            correct,
            elapsed_ms,
            hint_used: false,
            timestamp: fixed_now(),
        }
    }

    #[test]
    fn empty_log_is_all_zero() {
        assert_eq!(accuracy(&[]), 0);
        assert_eq!(average_latency_ms(&[]), 0);
        assert_eq!(completion_ratio(&[], 10), 0);
        assert_eq!(trailing_streak(&[]), 0);
    }

    #[test]
    fn accuracy_rounds_to_whole_percent() {
        let history = vec![attempt(true, 0), attempt(false, 0), attempt(false, 0)];
        assert_eq!(accuracy(&history), 33);
        let history = vec![attempt(true, 0), attempt(true, 0), attempt(false, 0)];
        assert_eq!(accuracy(&history), 67);
    }

    #[test]
    fn accuracy_stays_in_range() {
        for n in 0..20 {
            let history: Vec<_> = (0..n).map(|i| attempt(i % 2 == 0, 0)).collect();
            assert!(accuracy(&history) <= 100);
        }
        assert_eq!(accuracy(&[attempt(true, 0)]), 100);
    }

    #[test]
    fn latency_uses_last_ten() {
        let mut history: Vec<_> = (0..5).map(|_| attempt(true, 100_000)).collect();
        history.extend((0..10).map(|_| attempt(true, 2_000)));
        assert_eq!(average_latency_ms(&history), 2_000);
    }

    #[test]
    fn latency_rounds_half_up() {
        let history = vec![attempt(true, 1), attempt(true, 2)];
        assert_eq!(average_latency_ms(&history), 2);
    }

    #[test]
    fn latency_of_huge_elapsed_values_does_not_overflow() {
        let history = vec![attempt(true, i64::MAX), attempt(true, i64::MAX)];
        assert_eq!(average_latency_ms(&history), i64::MAX);

        let history = vec![attempt(true, i64::MIN), attempt(true, i64::MIN)];
        assert_eq!(average_latency_ms(&history), i64::MIN);
    }

    #[test]
    fn completion_clamps_at_one_hundred() {
        let history: Vec<_> = (0..13).map(|_| attempt(true, 0)).collect();
        assert_eq!(completion_ratio(&history, 10), 100);
        assert_eq!(completion_ratio(&history[..4], 10), 40);
    }

    #[test]
    fn zero_target_counts_as_complete() {
        assert_eq!(completion_ratio(&[], 0), 100);
    }

    #[test]
    fn trailing_streak_stops_at_first_miss() {
        let history = vec![
            attempt(true, 0),
            attempt(false, 0),
            attempt(true, 0),
            attempt(true, 0),
        ];
        assert_eq!(trailing_streak(&history), 2);
    }

    #[test]
    fn summary_matches_individual_functions() {
        let history = vec![attempt(true, 1_000), attempt(false, 3_000)];
        let summary = ProgressSummary::from_history(&history, 10);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.accuracy, 50);
        assert_eq!(summary.average_latency_ms, 2_000);
        assert_eq!(summary.completion_ratio, 20);
    }
}
