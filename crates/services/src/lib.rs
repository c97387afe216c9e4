#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod sessions;
pub mod speech;
pub mod transfer;

pub use practice_core::Clock;

pub use config::PracticeConfig;
pub use error::{ImportError, PracticeError};
pub use sessions::{
    PracticeLoopService, PracticeSession, ProgressView, RecentAttempt, SubmitOutcome,
    format_elapsed,
};
pub use speech::{NullSpeaker, Speaker};
pub use transfer::{ProgressDocument, export_document, import_document};
