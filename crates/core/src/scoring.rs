//! Points and streak arithmetic for a single attempt.

use crate::model::Attempt;

pub const POINTS_CORRECT: i64 = 10;
pub const STREAK_BONUS: i64 = 5;
/// The bonus fires whenever the streak reaches a multiple of this.
pub const STREAK_BONUS_EVERY: u32 = 3;
pub const HINT_PENALTY: i64 = 3;

/// Outcome of scoring one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    /// Signed change to cumulative points.
    pub points_delta: i64,
    pub new_streak: u32,
    pub streak_bonus: bool,
    pub hint_penalty: bool,
}

/// Score an attempt given the streak before it.
///
/// - correct: +10, streak grows, +5 more when the new streak is 3, 6, 9, ...
/// - incorrect: no points, streak resets to 0
/// - hint used: -3 regardless of the above
///
/// Never fails; malformed attempts are scored as given.
#[must_use]
pub fn score(attempt: &Attempt, prior_streak: u32) -> ScoreDelta {
    let mut points_delta = 0;
    let mut streak_bonus = false;

    let new_streak = if attempt.correct {
        points_delta += POINTS_CORRECT;
        let streak = prior_streak.saturating_add(1);
        if streak % STREAK_BONUS_EVERY == 0 {
            points_delta += STREAK_BONUS;
            streak_bonus = true;
        }
        streak
    } else {
        0
    };

    if attempt.hint_used {
        points_delta -= HINT_PENALTY;
    }

    ScoreDelta {
        points_delta,
        new_streak,
        streak_bonus,
        hint_penalty: attempt.hint_used,
    }
}
