use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::model::ids::ItemId;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Three-tier difficulty used by steering.
///
/// Levels map to the integers 1, 2 and 3 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// # Errors
    ///
    /// Returns `ParseError::InvalidDifficulty` for anything outside 1-3.
    pub fn from_level(level: u8) -> Result<Self, ParseError> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            _ => Err(ParseError::InvalidDifficulty(level)),
        }
    }

    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_level(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.level()
    }
}

//
// ─── ITEM ──────────────────────────────────────────────────────────────────────
//

/// How the learner answers an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    MultipleChoice,
    FreeText,
    /// Expand a number as `H+T+O`.
    Decomposition,
}

/// One exercise in the static catalog.
///
/// Prompts and choice labels are localized content and live with the
/// content provider, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    kind: ItemKind,
    difficulty: Difficulty,
    answer_key: String,
}

impl Item {
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        kind: ItemKind,
        difficulty: Difficulty,
        answer_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            difficulty,
            answer_key: answer_key.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn answer_key(&self) -> &str {
        &self.answer_key
    }

    /// Case-insensitive comparison of an already-trimmed response with the key.
    #[must_use]
    pub fn accepts(&self, response: &str) -> bool {
        response.to_lowercase() == self.answer_key.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_levels_roundtrip() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(d.level()).unwrap(), d);
        }
    }

    #[test]
    fn difficulty_rejects_out_of_range() {
        assert_eq!(
            Difficulty::from_level(0),
            Err(ParseError::InvalidDifficulty(0))
        );
        assert!(Difficulty::from_level(4).is_err());
    }

    #[test]
    fn difficulty_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "3");
        assert!(serde_json::from_str::<Difficulty>("7").is_err());
    }

    #[test]
    fn accepts_ignores_case() {
        let item = Item::new("x", ItemKind::FreeText, Difficulty::Easy, "Yes");
        assert!(item.accepts("yES"));
        assert!(!item.accepts("no"));
    }
}
