use crate::http_handler::{HTTPError, RequestError, ResponseError};
use crate::{event, warn};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/// Anything a user-facing message can be resolved from.
///
/// Plain strings are used verbatim. Errors yield the `{error}` message their collaborator
/// sent, if there was one, and `None` otherwise so that the caller's fallback applies.
pub trait DisplayMessage {
    fn display_message(&self) -> Option<&str>;
}

impl DisplayMessage for str {
    fn display_message(&self) -> Option<&str> { Some(self) }
}

impl DisplayMessage for String {
    fn display_message(&self) -> Option<&str> { Some(self.as_str()) }
}

impl DisplayMessage for HTTPError {
    fn display_message(&self) -> Option<&str> { self.carried_message() }
}

impl DisplayMessage for RequestError {
    fn display_message(&self) -> Option<&str> { self.carried_message() }
}

impl DisplayMessage for ResponseError {
    fn display_message(&self) -> Option<&str> { self.carried_message() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlobalSlot {
    Error,
    Success,
}

#[derive(Debug, Default)]
struct Messages {
    errors: HashMap<String, String>,
    successes: HashMap<String, String>,
    global_error: Option<String>,
    global_success: Option<String>,
}

impl Messages {
    fn global_mut(&mut self, slot: GlobalSlot) -> &mut Option<String> {
        match slot {
            GlobalSlot::Error => &mut self.global_error,
            GlobalSlot::Success => &mut self.global_success,
        }
    }
}

/// Per-module error and success messages plus the most recent message of each kind.
///
/// Messages written through `set_error`/`set_success` also become the global message, which
/// expires after the configured time to live. Expiry compares against the value captured when
/// the timer was scheduled, so an older timer never clears a newer message.
#[derive(Debug)]
pub struct NotificationState {
    messages: RwLock<Messages>,
    ttl: Duration,
}

impl Default for NotificationState {
    fn default() -> Self { Self::new(Self::DEFAULT_TTL) }
}

impl NotificationState {
    /// Time after which a global message disappears.
    pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

    /// Creates an empty notification state.
    ///
    /// # Arguments
    /// - `ttl`: Time after which a global message set through [`Self::set_error`] or
    ///   [`Self::set_success`] is cleared, unless a newer message replaced it.
    pub fn new(ttl: Duration) -> Self { Self { messages: RwLock::new(Messages::default()), ttl } }

    pub fn ttl(&self) -> Duration { self.ttl }

    fn read(&self) -> RwLockReadGuard<'_, Messages> { self.messages.read().unwrap_or_else(PoisonError::into_inner) }

    fn write(&self) -> RwLockWriteGuard<'_, Messages> { self.messages.write().unwrap_or_else(PoisonError::into_inner) }

    /// Records an error for `module` and returns the message that was resolved.
    ///
    /// The message is taken from `error` if it carries one, `fallback` otherwise. Storage is
    /// only touched if the message differs from the module's current error. The expiry of the
    /// global error is scheduled in both cases.
    ///
    /// # Arguments
    /// - `module`: Key of the module that failed.
    /// - `error`: The failure, asked for a displayable message first.
    /// - `fallback`: Message used when `error` carries none.
    ///
    /// # Returns
    /// The message that was recorded.
    pub fn set_error<E>(self: &Arc<Self>, module: &str, error: &E, fallback: &str) -> String
    where E: DisplayMessage + ?Sized {
        let message = error.display_message().unwrap_or(fallback).to_string();
        {
            let mut messages = self.write();
            if messages.errors.get(module) != Some(&message) {
                messages.errors.insert(module.to_string(), message.clone());
                messages.global_error = Some(message.clone());
            }
        }
        event!("Error for '{module}': {message}");
        self.schedule_expiry(GlobalSlot::Error, message.clone());
        message
    }

    /// Records a success message for `module` and schedules its expiry.
    pub fn set_success(self: &Arc<Self>, module: &str, message: &str) {
        {
            let mut messages = self.write();
            messages.successes.insert(module.to_string(), message.to_string());
            messages.global_success = Some(message.to_string());
        }
        event!("Success for '{module}': {message}");
        self.schedule_expiry(GlobalSlot::Success, message.to_string());
    }

    pub fn clear_error(&self, module: &str) { self.write().errors.remove(module); }
    pub fn clear_success(&self, module: &str) { self.write().successes.remove(module); }
    pub fn clear_all_errors(&self) { self.write().errors.clear(); }
    pub fn clear_all_success(&self) { self.write().successes.clear(); }

    /// Sets the global error without scheduling its expiry.
    pub fn set_global_error(&self, message: &str) { self.write().global_error = Some(message.to_string()); }
    pub fn set_global_success(&self, message: &str) { self.write().global_success = Some(message.to_string()); }
    pub fn clear_global_error(&self) { self.write().global_error = None; }
    pub fn clear_global_success(&self) { self.write().global_success = None; }

    pub fn error(&self, module: &str) -> Option<String> { self.read().errors.get(module).cloned() }
    pub fn success(&self, module: &str) -> Option<String> { self.read().successes.get(module).cloned() }
    pub fn global_error(&self) -> Option<String> { self.read().global_error.clone() }
    pub fn global_success(&self) -> Option<String> { self.read().global_success.clone() }

    fn schedule_expiry(self: &Arc<Self>, slot: GlobalSlot, expected: String) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime, {slot:?} message '{expected}' will not expire");
            return;
        };
        let state = Arc::downgrade(self);
        let ttl = self.ttl;
        runtime.spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(state) = state.upgrade() {
                state.expire(slot, &expected);
            }
        });
    }

    fn expire(&self, slot: GlobalSlot, expected: &str) {
        let mut messages = self.write();
        let current = messages.global_mut(slot);
        if current.as_deref() == Some(expected) {
            *current = None;
            event!("{slot:?} message '{expected}' expired");
        }
    }
}
