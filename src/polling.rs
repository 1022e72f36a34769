use crate::{event, warn};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Keyed periodic jobs.
///
/// A job first runs one `period` after it was started and then every `period`. Starting a job
/// under a key that is already in use cancels the previous one. Ticks are not queued up, a
/// slow job simply delays the next run.
#[derive(Debug, Default)]
pub struct PollingRegistry {
    jobs: Mutex<HashMap<String, CancellationToken>>,
}

impl PollingRegistry {
    pub fn new() -> Self { Self::default() }

    fn jobs(&self) -> MutexGuard<'_, HashMap<String, CancellationToken>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts `job` under `key`, replacing any job already registered there.
    ///
    /// Returns `false` if no tokio runtime is available, nothing is scheduled in that case.
    pub fn start<F, Fut>(&self, key: &str, period: Duration, job: F) -> bool
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime, polling job '{key}' not started");
            return false;
        };
        let c_tok = CancellationToken::new();
        if let Some(previous) = self.jobs().insert(key.to_string(), c_tok.clone()) {
            previous.cancel();
            event!("Replaced polling job '{key}'");
        }

        let owned_key = key.to_string();
        runtime.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = c_tok.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                tokio::select! {
                    () = c_tok.cancelled() => break,
                    () = job() => {}
                }
            }
            event!("Polling job '{owned_key}' stopped");
        });
        event!("Started polling job '{key}' every {}ms", period.as_millis());
        true
    }

    /// Cancels the job under `key`, a no-op for unknown keys.
    pub fn stop(&self, key: &str) {
        if let Some(c_tok) = self.jobs().remove(key) {
            c_tok.cancel();
        }
    }

    pub fn stop_all(&self) {
        for (_, c_tok) in self.jobs().drain() {
            c_tok.cancel();
        }
    }

    pub fn is_running(&self, key: &str) -> bool { self.jobs().contains_key(key) }

    pub fn len(&self) -> usize { self.jobs().len() }

    pub fn is_empty(&self) -> bool { self.jobs().is_empty() }
}

impl Drop for PollingRegistry {
    fn drop(&mut self) { self.stop_all(); }
}
