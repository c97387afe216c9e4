//! Difficulty steering: recent accuracy picks a difficulty tier, then
//! exposure counts pick an item within that tier.
//!
//! The thresholds hold accuracy near 70%: above 0.8 steps up, below 0.6
//! steps down, anything in between stays at the middle tier.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::model::{Attempt, Difficulty, Item, ItemId};

/// Number of most recent attempts that drive the difficulty target.
pub const ACCURACY_WINDOW: usize = 5;

/// Accuracy assumed before any attempt exists.
pub const DEFAULT_ACCURACY: f64 = 0.7;

/// Window accuracy strictly above this raises the target to `Hard`.
pub const RAISE_ABOVE: f64 = 0.8;

/// Window accuracy strictly below this lowers the target to `Easy`.
pub const LOWER_BELOW: f64 = 0.6;

/// Fraction of correct attempts in the trailing window.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn window_accuracy(history: &[Attempt]) -> f64 {
    let start = history.len().saturating_sub(ACCURACY_WINDOW);
    let window = &history[start..];
    if window.is_empty() {
        return DEFAULT_ACCURACY;
    }
    let correct = window.iter().filter(|a| a.correct).count();
    correct as f64 / window.len() as f64
}

#[must_use]
pub fn difficulty_for_accuracy(acc: f64) -> Difficulty {
    if acc > RAISE_ABOVE {
        Difficulty::Hard
    } else if acc < LOWER_BELOW {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}

#[must_use]
pub fn target_difficulty(history: &[Attempt]) -> Difficulty {
    difficulty_for_accuracy(window_accuracy(history))
}

/// How often each item id appears anywhere in `history`.
#[must_use]
pub fn exposure_counts(history: &[Attempt]) -> HashMap<&ItemId, usize> {
    let mut counts = HashMap::new();
    for attempt in history {
        *counts.entry(&attempt.item_id).or_insert(0) += 1;
    }
    counts
}

/// Pick the next item to present.
///
/// Among catalog items at the target difficulty, the one with the fewest
/// attempts in the full history wins; ties go to the earliest in catalog
/// order. History entries for ids no longer in the catalog are ignored.
///
/// # Panics
///
/// Panics if the catalog has no item at the target difficulty. `Catalog::new`
/// rejects such catalogs, so this only fires on a broken invariant.
#[must_use]
pub fn choose_next_item<'c>(catalog: &'c Catalog, history: &[Attempt]) -> &'c Item {
    let target = target_difficulty(history);
    let counts = exposure_counts(history);

    catalog
        .at_difficulty(target)
        .min_by_key(|item| counts.get(item.id()).copied().unwrap_or(0))
        .unwrap_or_else(|| panic!("catalog has no item at difficulty {}", target.level()))
}

/// Id of the item [`choose_next_item`] selects.
///
/// # Panics
///
/// Same conditions as [`choose_next_item`].
#[must_use]
pub fn choose_next<'c>(catalog: &'c Catalog, history: &[Attempt]) -> &'c ItemId {
    choose_next_item(catalog, history).id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;
    use crate::time::fixed_now;

    fn attempt(id: &str, correct: bool) -> Attempt {
        Attempt {
            item_id: ItemId::new(id),
            response: String::new(),
            correct,
            elapsed_ms: 1_000,
            hint_used: false,
            timestamp: fixed_now(),
        }
    }

    fn run(pattern: &[bool]) -> Vec<Attempt> {
        pattern.iter().map(|&c| attempt("q1", c)).collect()
    }

    #[test]
    fn empty_history_uses_default_accuracy() {
        assert!((window_accuracy(&[]) - DEFAULT_ACCURACY).abs() < f64::EPSILON);
        assert_eq!(target_difficulty(&[]), Difficulty::Medium);
    }

    #[test]
    fn empty_history_picks_first_medium_item() {
        let catalog = Catalog::place_value();
        assert_eq!(choose_next(&catalog, &[]), "q3");
    }

    #[test]
    fn five_correct_targets_hard() {
        assert_eq!(target_difficulty(&run(&[true; 5])), Difficulty::Hard);
    }

    #[test]
    fn five_incorrect_targets_easy() {
        assert_eq!(target_difficulty(&run(&[false; 5])), Difficulty::Easy);
    }

    #[test]
    fn three_of_five_holds_medium() {
        let history = run(&[true, false, true, false, true]);
        assert!((window_accuracy(&history) - 0.6).abs() < f64::EPSILON);
        assert_eq!(target_difficulty(&history), Difficulty::Medium);
    }

    #[test]
    fn four_of_five_is_not_above_threshold() {
        assert_eq!(
            target_difficulty(&run(&[true, true, false, true, true])),
            Difficulty::Medium
        );
    }

    #[test]
    fn only_last_five_count() {
        // Five early misses followed by five hits: window sees only the hits.
        let mut history = run(&[false; 5]);
        history.extend(run(&[true; 5]));
        assert_eq!(target_difficulty(&history), Difficulty::Hard);
    }

    #[test]
    fn short_history_uses_its_own_length() {
        assert_eq!(target_difficulty(&run(&[true, true])), Difficulty::Hard);
        assert_eq!(target_difficulty(&run(&[true, false])), Difficulty::Easy);
    }

    #[test]
    fn least_attempted_item_wins() {
        let items = vec![
            Item::new("a", ItemKind::FreeText, Difficulty::Easy, "1"),
            Item::new("b", ItemKind::FreeText, Difficulty::Easy, "1"),
            Item::new("m", ItemKind::FreeText, Difficulty::Medium, "1"),
            Item::new("h", ItemKind::FreeText, Difficulty::Hard, "1"),
        ];
        let catalog = Catalog::new(items).unwrap();
        let history = vec![attempt("a", false), attempt("a", false)];
        assert_eq!(choose_next(&catalog, &history), "b");
    }

    #[test]
    fn exposure_counts_span_the_full_history() {
        // q5 was seen long ago, outside the accuracy window; q6 never.
        let mut history = vec![attempt("q5", true)];
        history.extend((0..5).map(|_| attempt("q3", true)));
        let catalog = Catalog::place_value();
        assert_eq!(choose_next(&catalog, &history), "q6");
    }

    #[test]
    fn ties_break_by_catalog_order() {
        let catalog = Catalog::place_value();
        let history = vec![
            attempt("q1", false),
            attempt("q2", false),
            attempt("q1", false),
            attempt("q2", false),
        ];
        assert_eq!(choose_next(&catalog, &history), "q1");
    }

    #[test]
    fn unknown_ids_in_history_are_tolerated() {
        let catalog = Catalog::place_value();
        let history = vec![attempt("retired", true), attempt("gone", true)];
        let next = choose_next(&catalog, &history);
        assert!(catalog.contains(next));
        assert_eq!(next, "q5");
    }

    #[test]
    fn always_returns_a_catalog_id() {
        let catalog = Catalog::place_value();
        let mut history = Vec::new();
        for step in 0..40 {
            let next = choose_next(&catalog, &history).clone();
            assert!(catalog.contains(&next));
            history.push(attempt(next.as_str(), step % 3 != 0));
        }
    }

    #[test]
    fn deterministic_for_identical_history() {
        let catalog = Catalog::place_value();
        let history = run(&[true, false, true]);
        assert_eq!(choose_next(&catalog, &history), choose_next(&catalog, &history));
    }
}
