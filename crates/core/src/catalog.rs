use std::collections::HashSet;

use crate::error::CatalogError;
use crate::model::{Difficulty, Item, ItemId, ItemKind};

/// Static, load-time-fixed set of items.
///
/// Construction validates that the catalog is non-empty, ids are unique and
/// every difficulty level has at least one item. Steering relies on the
/// last of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError` if any catalog invariant is violated.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id().clone()) {
                return Err(CatalogError::DuplicateId(item.id().clone()));
            }
        }

        for level in Difficulty::ALL {
            if !items.iter().any(|i| i.difficulty() == level) {
                return Err(CatalogError::MissingDifficulty(level));
            }
        }

        Ok(Self { items })
    }

    /// Grade 2 place value up to 1000: two items per difficulty level.
    #[must_use]
    pub fn place_value() -> Self {
        Self {
            items: vec![
                Item::new("q1", ItemKind::MultipleChoice, Difficulty::Easy, "3"),
                Item::new("q2", ItemKind::MultipleChoice, Difficulty::Easy, "570"),
                Item::new("q3", ItemKind::Decomposition, Difficulty::Medium, "400+0+8"),
                Item::new("q4", ItemKind::FreeText, Difficulty::Medium, "527"),
                Item::new("q5", ItemKind::FreeText, Difficulty::Hard, "0"),
                Item::new("q6", ItemKind::MultipleChoice, Difficulty::Hard, "405 < 450"),
            ],
        }
    }

    /// Items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    /// The first item in catalog order.
    #[must_use]
    pub fn first(&self) -> &Item {
        &self.items[0]
    }

    /// Items at `level`, in catalog order.
    pub fn at_difficulty(&self, level: Difficulty) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |i| i.difficulty() == level)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::place_value()
    }
}
