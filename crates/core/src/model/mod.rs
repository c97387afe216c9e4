mod attempt;
mod ids;
mod item;
mod language;

pub use attempt::{Attempt, AttemptLog};
pub use ids::{ItemId, ParseIdError};
pub use item::{Difficulty, Item, ItemKind};
pub use language::{AgeBand, Language};
