#![forbid(unsafe_code)]

//! Domain layer for the adaptive place-value practice engine.
//!
//! Everything in this crate is pure: no I/O, no async, no global state. The
//! host owns a single [`SessionState`] and threads it through [`scoring`],
//! [`steering`] and [`progress`].

pub mod catalog;
pub mod content;
pub mod error;
pub mod model;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod steering;
pub mod time;

pub use catalog::Catalog;
pub use error::{CatalogError, ParseError};
pub use session::SessionState;
pub use time::Clock;
