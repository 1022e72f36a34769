use crate::config::{Config, SkySourceKind};
use crate::http_handler::{HTTPClient, Transport};
use crate::orchestrator::RequestOrchestrator;
use crate::polling::PollingRegistry;
use crate::sky_source::{Aggregator, ProxySource, SkySource, Upstreams};
use crate::state::{
    DurableStore, FileStore, LoadingState, LocationState, MemoryStore, NotificationState, SessionState,
    StorageError,
};
use crate::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum KeychainError {
    Client(reqwest::Error),
    Store(StorageError),
}

impl std::error::Error for KeychainError {}

impl From<reqwest::Error> for KeychainError {
    fn from(value: reqwest::Error) -> Self { KeychainError::Client(value) }
}

impl From<StorageError> for KeychainError {
    fn from(value: StorageError) -> Self { KeychainError::Store(value) }
}

/// Struct holding the shared components of the viewer, providing access to the transports,
/// the data source and the state every feature module reads and writes.
#[derive(Clone)]
pub struct Keychain {
    /// Transport to the backend proxy, used for the auth routes.
    backend: Arc<dyn Transport>,
    /// Provider of weather, sky, location and ISS data.
    sky: Arc<dyn SkySource>,
    session: Arc<SessionState>,
    loading: Arc<LoadingState>,
    notifications: Arc<NotificationState>,
    location: Arc<LocationState>,
    polling: Arc<PollingRegistry>,
}

impl Keychain {
    /// Builds all components as described by `config`.
    ///
    /// # Errors
    /// - `KeychainError::Client` if an HTTP client cannot be initialized.
    /// - `KeychainError::Store` if the configured store file exists but is unreadable.
    pub fn new(config: &Config) -> Result<Self, KeychainError> {
        let backend: Arc<dyn Transport> = Arc::new(HTTPClient::new(&config.base_url, config.timeout)?);
        let sky: Arc<dyn SkySource> = match config.sky_source {
            SkySourceKind::Proxy => Arc::new(ProxySource::new(Arc::clone(&backend))),
            SkySourceKind::Direct => {
                let upstreams = Upstreams {
                    forecast: Arc::new(HTTPClient::new(&config.forecast_url, config.timeout)?),
                    astronomy: Arc::new(HTTPClient::new(&config.astronomy_url, config.timeout)?),
                    geocoder: Arc::new(HTTPClient::new(&config.geocoder_url, config.timeout)?),
                    iss: Arc::new(HTTPClient::new(&config.iss_url, config.timeout)?),
                };
                if config.astronomy.is_none() {
                    warn!("No AstronomyAPI credentials configured, celestial data will be unavailable");
                }
                Arc::new(Aggregator::new(upstreams, config.astronomy.clone()))
            }
        };
        let store: Arc<dyn DurableStore> = match &config.store_path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        info!("Using {} data source, backend at {}", config.sky_source, config.base_url);
        Ok(Self::from_parts(backend, sky, store, config.notify_ttl))
    }

    /// Assembles a keychain from already built collaborators.
    ///
    /// # Arguments
    /// - `backend`: Transport to the backend serving the `/api/auth` and `/api/protected` routes.
    /// - `sky`: Source of weather, celestial, geocoding and ISS data.
    /// - `store`: Durable store shared by the session and the location state.
    /// - `notify_ttl`: Lifetime of the global error and success messages.
    ///
    /// # Returns
    /// A keychain with fresh loading, notification and polling state.
    pub fn from_parts(
        backend: Arc<dyn Transport>,
        sky: Arc<dyn SkySource>,
        store: Arc<dyn DurableStore>,
        notify_ttl: Duration,
    ) -> Self {
        Self {
            backend,
            sky,
            session: Arc::new(SessionState::new(Arc::clone(&store))),
            loading: Arc::new(LoadingState::new()),
            notifications: Arc::new(NotificationState::new(notify_ttl)),
            location: Arc::new(LocationState::new(store)),
            polling: Arc::new(PollingRegistry::new()),
        }
    }

    /// Provides an orchestrator operating on this keychain's state.
    ///
    /// # Returns
    /// A `RequestOrchestrator` holding a clone of this keychain.
    pub fn orchestrator(&self) -> RequestOrchestrator { RequestOrchestrator::new(self.clone()) }

    /// Provides a cloned reference to the backend transport.
    ///
    /// # Returns
    /// A thread-safe reference to the `Transport`.
    pub fn backend(&self) -> Arc<dyn Transport> { Arc::clone(&self.backend) }
    /// Provides a cloned reference to the sky data source.
    ///
    /// # Returns
    /// A thread-safe reference to the `SkySource`.
    pub fn sky(&self) -> Arc<dyn SkySource> { Arc::clone(&self.sky) }
    /// Provides a cloned reference to the session state.
    ///
    /// # Returns
    /// A thread-safe reference to the `SessionState`.
    pub fn session(&self) -> Arc<SessionState> { Arc::clone(&self.session) }
    /// Provides a cloned reference to the per-module loading flags.
    pub fn loading(&self) -> Arc<LoadingState> { Arc::clone(&self.loading) }
    /// Provides a cloned reference to the notification state.
    ///
    /// # Returns
    /// A thread-safe reference to the `NotificationState`.
    pub fn notifications(&self) -> Arc<NotificationState> { Arc::clone(&self.notifications) }
    /// Provides a cloned reference to the user location state.
    pub fn location(&self) -> Arc<LocationState> { Arc::clone(&self.location) }
    pub fn polling(&self) -> Arc<PollingRegistry> { Arc::clone(&self.polling) }
}
