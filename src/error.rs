use thiserror::Error;

use crate::api::ApiError;

/// Terminal failures of a wait-for-completion call.
///
/// Every fatal category surfaces through this one kind; the poller never
/// swallows a category and never returns a partial result.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The job itself reported a terminal error state. Never retried.
    #[error("translation job failed")]
    JobFailed,

    /// The overall wall-clock budget was exceeded before a terminal state,
    /// independent of any remaining retry budget.
    #[error("translation job timed out")]
    TimedOut,

    /// Too many consecutive transient fetch failures; carries the last
    /// underlying cause.
    #[error("max retries exceeded after {retries} failures: {source}")]
    RetriesExhausted { retries: u32, source: ApiError },
}
