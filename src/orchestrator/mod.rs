//! The shared request lifecycle of every feature module.
//!
//! An orchestrated operation marks its module as loading, clears the module's previous error,
//! runs exactly one upstream call and records a failure message before handing the result back.
//! The loading flag is reset however the operation ends.

mod auth;
mod sky;
#[cfg(test)]
mod tests;

use crate::event;
use crate::keychain::Keychain;
use crate::state::{DisplayMessage, LoadingState};
use std::future::Future;
use std::sync::Arc;

/// Module key of the authentication flows.
pub const AUTH: &str = "auth";
pub const WEATHER: &str = "weather";
pub const CELESTIAL: &str = "celestial";
pub const LOCATION: &str = "location";
pub const ISS: &str = "iss";

/// Clears a loading flag when dropped.
///
/// Holding one for the duration of an operation resets the flag on success, on failure, when
/// the operation panics and when its future is dropped before completion.
struct LoadingGuard {
    loading: Arc<LoadingState>,
    module: String,
}

impl LoadingGuard {
    fn begin(loading: Arc<LoadingState>, module: &str) -> Self {
        loading.set_loading(module, true);
        Self { loading, module: module.to_string() }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) { self.loading.set_loading(&self.module, false); }
}

/// Runs feature operations against the state held by a [`Keychain`].
#[derive(Clone)]
pub struct RequestOrchestrator {
    k: Keychain,
}

impl RequestOrchestrator {
    pub fn new(k: Keychain) -> Self { Self { k } }

    pub fn k(&self) -> &Keychain { &self.k }

    /// Runs `op` as an orchestrated operation of `module`.
    ///
    /// On failure the module's error becomes the message carried by the error, or `fallback`
    /// if it carries none, and the error is returned unchanged.
    ///
    /// # Errors
    /// - Whatever `op` fails with.
    pub async fn run<T, E, Fut>(&self, module: &str, fallback: &str, op: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        E: DisplayMessage + std::fmt::Debug,
    {
        let _guard = LoadingGuard::begin(self.k.loading(), module);
        self.k.notifications().clear_error(module);
        event!("'{module}' started");
        match op.await {
            Ok(value) => {
                event!("'{module}' succeeded");
                Ok(value)
            }
            Err(e) => {
                let message = self.k.notifications().set_error(module, &e, fallback);
                event!("'{module}' failed with {e:?}, showing '{message}'");
                Err(e)
            }
        }
    }
}
