use std::time::Duration;

use rand::Rng;
use tokio::time::{Instant, sleep};

use crate::api::{JobStatus, StatusFetcher, StatusResponse};
use crate::error::TranslationError;

/// Configuration for the polling client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Initial delay between status checks.
    pub initial_delay: Duration,
    /// Maximum delay between checks. Caps the deterministic component only;
    /// jitter may push the actual sleep past it.
    pub max_delay: Duration,
    /// Factor to grow the delay by after each pending poll.
    pub backoff_factor: f64,
    /// Maximum number of consecutive transient-failure retries.
    pub max_retries: u32,
    /// Overall wall-clock budget for the entire wait.
    pub timeout: Duration,
    /// Whether to scale delays by a random jitter factor.
    pub jitter: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_factor: 1.5,
            max_retries: 3,
            timeout: Duration::from_secs(300),
            jitter: true,
        }
    }
}

impl ClientConfig {
    /// Calculate the delay before the next poll using exponential backoff.
    ///
    /// The exponential component is clamped to `max_delay` before jitter is
    /// applied, so a jittered delay may land anywhere in
    /// `[0.5 * base, 1.5 * base)` and exceed `max_delay` by up to 50%.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = (self.initial_delay.as_secs_f64() * self.backoff_factor.powi(attempt as i32))
            .min(self.max_delay.as_secs_f64());

        let secs = if self.jitter {
            base * rand::thread_rng().gen_range(0.5..1.5)
        } else {
            base
        };

        Duration::from_secs_f64(secs)
    }
}

/// Drives the wait for one translation job to a terminal outcome.
///
/// Owns a status fetcher (HTTP in production, stubs in tests), the client
/// configuration, and an optional observer invoked with every successfully
/// fetched status, in fetch order. Observer panics are not caught; they
/// abort the wait and propagate to the caller.
pub struct TranslationPoller<F> {
    fetcher: F,
    config: ClientConfig,
    observer: Option<Box<dyn FnMut(&StatusResponse) + Send>>,
}

impl<F: StatusFetcher> TranslationPoller<F> {
    pub fn new(fetcher: F, config: ClientConfig) -> Self {
        Self {
            fetcher,
            config,
            observer: None,
        }
    }

    /// Install an observer called once per successful fetch.
    pub fn with_observer(
        mut self,
        observer: impl FnMut(&StatusResponse) + Send + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Poll until the job reaches a terminal state.
    ///
    /// Returns the final status on completion. Fails with
    /// [`TranslationError::JobFailed`] when the job reports an error state,
    /// [`TranslationError::TimedOut`] once the overall deadline passes, or
    /// [`TranslationError::RetriesExhausted`] after too many consecutive
    /// transient fetch failures.
    ///
    /// Two counters drive the loop: `poll_count` grows the backoff exponent
    /// and moves only on pending polls; `failures` consumes the retry
    /// budget, moves only on transient errors, and resets whenever a fetch
    /// succeeds.
    pub async fn wait_for_completion(&mut self) -> Result<StatusResponse, TranslationError> {
        let deadline = Instant::now() + self.config.timeout;
        let mut poll_count: u32 = 0;
        let mut failures: u32 = 0;

        loop {
            // The deadline only gates starting a new wait cycle; a fetch
            // already in flight when it passes is allowed to finish.
            if Instant::now() > deadline {
                return Err(TranslationError::TimedOut);
            }

            match self.fetcher.fetch_status().await {
                Err(cause) => {
                    if failures >= self.config.max_retries {
                        return Err(TranslationError::RetriesExhausted {
                            retries: failures,
                            source: cause,
                        });
                    }
                    failures += 1;
                    tracing::debug!(failures, "status check failed, retrying");
                    // Retried immediately; backoff only spaces out pending polls.
                }
                Ok(status) => {
                    failures = 0;
                    if let Some(observer) = &mut self.observer {
                        observer(&status);
                    }
                    match status.result {
                        JobStatus::Completed => return Ok(status),
                        JobStatus::Error => return Err(TranslationError::JobFailed),
                        JobStatus::Pending => {
                            let delay = self.config.delay_for_attempt(poll_count);
                            tracing::debug!(
                                delay_ms = delay.as_millis() as u64,
                                "waiting before next check"
                            );
                            sleep(delay).await;
                            poll_count += 1;
                        }
                    }
                }
            }
        }
    }
}
