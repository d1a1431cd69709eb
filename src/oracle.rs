use std::sync::OnceLock;
use std::time::Duration;

use tokio::time::Instant;

use crate::api::StatusResponse;

/// Ground truth for one translation job's lifecycle.
///
/// Answers status queries purely in terms of elapsed time since
/// construction, with a single injected random decision: whether the
/// terminal outcome is success or failure. The decision is committed on the
/// first query, even one arriving before the completion threshold, and is
/// never re-rolled, so every caller observes the same outcome. This models
/// jobs whose fate is sealed early by an upstream resource but only becomes
/// observable after a minimum processing time.
pub struct JobOracle {
    started_at: Instant,
    completion_threshold: Duration,
    error_probability: f64,
    // Committed terminal outcome; empty until the first status query.
    outcome: OnceLock<bool>,
}

impl JobOracle {
    /// Start a job that may reach a terminal state after
    /// `completion_threshold`, failing with probability `error_probability`.
    pub fn new(completion_threshold: Duration, error_probability: f64) -> Self {
        Self {
            started_at: Instant::now(),
            completion_threshold,
            error_probability,
            outcome: OnceLock::new(),
        }
    }

    /// Current status of the job.
    ///
    /// Before the completion threshold the job is pending with a progress
    /// percentage in [0, 99], rounded to one decimal; afterwards it is
    /// completed or errored according to the committed outcome. Never fails,
    /// safe to call repeatedly and from concurrent callers.
    pub fn status(&self) -> StatusResponse {
        // get_or_init serializes racing first queries, so the coin is
        // flipped exactly once even behind a concurrent server.
        let will_error = *self
            .outcome
            .get_or_init(|| rand::random::<f64>() < self.error_probability);

        let elapsed = self.started_at.elapsed();
        if elapsed < self.completion_threshold {
            let pct = (elapsed.as_secs_f64() / self.completion_threshold.as_secs_f64() * 100.0)
                .min(99.0);
            StatusResponse::pending((pct * 10.0).round() / 10.0)
        } else if will_error {
            StatusResponse::error()
        } else {
            StatusResponse::completed()
        }
    }
}
