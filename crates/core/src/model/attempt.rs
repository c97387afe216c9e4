use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::ItemId;
use crate::model::item::Item;

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// One learner submission against one item.
///
/// Created once per submission and never mutated afterwards. Field names on
/// the wire are camelCase (`itemId`, `elapsedMs`, `hintUsed`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub item_id: ItemId,
    pub response: String,
    pub correct: bool,
    pub elapsed_ms: i64,
    #[serde(default)]
    pub hint_used: bool,
    pub timestamp: DateTime<Utc>,
}

impl Attempt {
    /// Grade a raw response against `item`.
    ///
    /// The response is trimmed before it is stored and compared. Empty input
    /// is simply incorrect.
    #[must_use]
    pub fn evaluate(
        item: &Item,
        raw_response: &str,
        elapsed_ms: i64,
        hint_used: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let response = raw_response.trim().to_string();
        let correct = item.accepts(&response);
        Self {
            item_id: item.id().clone(),
            response,
            correct,
            elapsed_ms,
            hint_used,
            timestamp,
        }
    }
}

//
// ─── ATTEMPT LOG ───────────────────────────────────────────────────────────────
//

/// Append-only, ordered attempt history.
///
/// The only ways to remove entries are [`AttemptLog::clear`] (session reset)
/// and [`AttemptLog::replace`] (import), both whole-log operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttemptLog {
    attempts: Vec<Attempt>,
}

impl AttemptLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing history as is.
    ///
    /// Timestamps are not re-clamped; callers pass logs that were built by
    /// [`AttemptLog::append`] or checked on import.
    #[must_use]
    pub fn from_attempts(attempts: Vec<Attempt>) -> Self {
        Self { attempts }
    }

    /// Append an attempt, keeping timestamps non-decreasing.
    ///
    /// An attempt stamped earlier than the current tail is stamped with the
    /// tail's timestamp instead.
    pub fn append(&mut self, mut attempt: Attempt) {
        if let Some(last) = self.last_timestamp() {
            if attempt.timestamp < last {
                attempt.timestamp = last;
            }
        }
        self.attempts.push(attempt);
    }

    pub fn clear(&mut self) {
        self.attempts.clear();
    }

    pub fn replace(&mut self, attempts: Vec<Attempt>) {
        self.attempts = attempts;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    #[must_use]
    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.attempts.last().map(|a| a.timestamp)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attempt> {
        self.attempts.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Attempt> {
        self.attempts
    }
}

impl<'a> IntoIterator for &'a AttemptLog {
    type Item = &'a Attempt;
    type IntoIter = std::slice::Iter<'a, Attempt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, ItemKind};
    use crate::time::fixed_now;
    use chrono::Duration;

    fn item() -> Item {
        Item::new("q3", ItemKind::Decomposition, Difficulty::Medium, "400+0+8")
    }

    #[test]
    fn evaluate_trims_and_matches() {
        let attempt = Attempt::evaluate(&item(), "  400+0+8\n", 1200, false, fixed_now());
        assert!(attempt.correct);
        assert_eq!(attempt.response, "400+0+8");
        assert_eq!(attempt.item_id, "q3");
    }

    #[test]
    fn empty_response_is_incorrect() {
        let attempt = Attempt::evaluate(&item(), "   ", 0, true, fixed_now());
        assert!(!attempt.correct);
        assert!(attempt.hint_used);
        assert_eq!(attempt.response, "");
    }

    #[test]
    fn append_keeps_timestamps_non_decreasing() {
        let now = fixed_now();
        let mut log = AttemptLog::new();
        log.append(Attempt::evaluate(&item(), "x", 0, false, now));
        log.append(Attempt::evaluate(&item(), "y", 0, false, now - Duration::seconds(5)));
        assert_eq!(log.len(), 2);
        assert_eq!(log.as_slice()[1].timestamp, now);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let attempt = Attempt::evaluate(&item(), "400+0+8", 950, true, fixed_now());
        let value = serde_json::to_value(&attempt).unwrap();
        assert_eq!(value["itemId"], "q3");
        assert_eq!(value["elapsedMs"], 950);
        assert_eq!(value["hintUsed"], true);
        assert!(value.get("item_id").is_none());
    }

    #[test]
    fn missing_hint_flag_defaults_to_false() {
        let json = r#"{"itemId":"q1","response":"3","correct":true,"elapsedMs":10,"timestamp":"2023-11-14T22:13:20Z"}"#;
        let attempt: Attempt = serde_json::from_str(json).unwrap();
        assert!(!attempt.hint_used);
        assert_eq!(attempt.timestamp, fixed_now());
    }
}
