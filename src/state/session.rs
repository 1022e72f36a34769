use super::storage::DurableStore;
use crate::http_handler::UserRecord;
use crate::{error, event, info};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default, Clone)]
struct Session {
    identity: Option<UserRecord>,
    token: Option<String>,
}

/// Holds who is logged in and the bearer token for authenticated calls.
///
/// The token is written to the durable store after every mutation and read back on
/// construction. The identity is never persisted, so a restored session has a token but no
/// identity until the next login.
pub struct SessionState {
    session: RwLock<Session>,
    store: Arc<dyn DurableStore>,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState").field("session", &*self.read()).finish_non_exhaustive()
    }
}

impl SessionState {
    /// Key of the persisted bearer token.
    pub const TOKEN_KEY: &'static str = "auth_token";

    /// Creates the session, restoring a previously persisted token.
    ///
    /// # Arguments
    /// - `store`: Store holding the token under [`Self::TOKEN_KEY`]. An empty entry counts as absent.
    ///
    /// # Returns
    /// A session whose identity is unknown until the next login.
    pub fn new(store: Arc<dyn DurableStore>) -> Self {
        let token = store.get(Self::TOKEN_KEY).filter(|t| !t.is_empty());
        if token.is_some() {
            info!("Restored persisted session token");
        }
        Self { session: RwLock::new(Session { identity: None, token }), store }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> { self.session.read().unwrap_or_else(PoisonError::into_inner) }

    fn write(&self) -> RwLockWriteGuard<'_, Session> { self.session.write().unwrap_or_else(PoisonError::into_inner) }

    /// Records a successful login or registration and persists the token.
    ///
    /// # Arguments
    /// - `user`: The authenticated user.
    /// - `token`: Bearer token for the protected routes.
    pub fn set_identity(&self, user: UserRecord, token: String) {
        let snapshot = {
            let mut session = self.write();
            session.identity = Some(user);
            session.token = Some(token);
            session.clone()
        };
        self.persist(&snapshot);
    }

    /// Forgets identity and token, removing the persisted entry.
    pub fn clear(&self) {
        let snapshot = {
            let mut session = self.write();
            *session = Session::default();
            session.clone()
        };
        self.persist(&snapshot);
    }

    /// A session counts as logged in as soon as a token is held, even without an identity.
    pub fn is_logged_in(&self) -> bool { self.read().token.is_some() }
    pub fn token(&self) -> Option<String> { self.read().token.clone() }
    pub fn identity(&self) -> Option<UserRecord> { self.read().identity.clone() }

    fn persist(&self, session: &Session) {
        let result = match &session.token {
            Some(token) => self.store.set(Self::TOKEN_KEY, token),
            None => self.store.remove(Self::TOKEN_KEY),
        };
        match result {
            Ok(()) => event!("Persisted session (logged in: {})", session.token.is_some()),
            Err(e) => error!("Failed to persist session: {e:?}"),
        }
    }
}
