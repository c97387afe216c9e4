mod progress;
mod service;
mod workflow;

// Public API of the practice subsystem.
pub use progress::{ProgressView, RECENT_LIMIT, RecentAttempt, format_elapsed};
pub use service::{PracticeSession, SubmitOutcome};
pub use workflow::PracticeLoopService;
