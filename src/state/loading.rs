use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Per-module busy flags.
///
/// Keys are arbitrary strings so new feature modules need no change here. This is a UI signal,
/// it does not serialize operations running under the same key.
#[derive(Debug, Default)]
pub struct LoadingState {
    flags: RwLock<HashMap<String, bool>>,
}

impl LoadingState {
    pub fn new() -> Self { Self::default() }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, bool>> {
        self.flags.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, bool>> {
        self.flags.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `module` as busy or idle.
    ///
    /// # Arguments
    /// - `module`: Any module key; unknown keys are created on first use.
    /// - `loading`: The new flag value.
    pub fn set_loading(&self, module: &str, loading: bool) {
        self.write().insert(module.to_string(), loading);
    }

    /// `false` for modules that never reported a state.
    pub fn is_loading(&self, module: &str) -> bool { self.read().get(module).copied().unwrap_or(false) }

    /// # Returns
    /// `true` if at least one module is currently busy.
    pub fn any_loading(&self) -> bool { self.read().values().any(|l| *l) }
}
