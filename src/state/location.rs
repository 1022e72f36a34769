use super::storage::{DurableStore, StorageError};
use crate::geo::GeoCoordinate;
use crate::{error, event, warn};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use strum_macros::{Display, EnumString};

/// Outcome of asking the user for their position.
#[derive(serde::Serialize, serde::Deserialize, Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LocationPermission {
    Granted,
    Denied,
    Prompt,
}

/// Where the user is, as far as the viewer knows.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UserLocation {
    #[serde(default)]
    pub coordinates: Option<GeoCoordinate>,
    /// Human-readable place name, empty until resolved.
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub permission: Option<LocationPermission>,
}

/// The user's location, persisted as JSON under [`LocationState::STORE_KEY`].
pub struct LocationState {
    current: RwLock<UserLocation>,
    store: Arc<dyn DurableStore>,
}

impl std::fmt::Debug for LocationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationState").field("current", &*self.read()).finish_non_exhaustive()
    }
}

impl LocationState {
    pub const STORE_KEY: &'static str = "user_location";

    /// Restores the persisted location. An unreadable entry is dropped with a warning.
    ///
    /// # Arguments
    /// - `store`: Store holding the JSON-encoded location under [`Self::STORE_KEY`].
    pub fn new(store: Arc<dyn DurableStore>) -> Self {
        let current = match store.get(Self::STORE_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable persisted location: {e}");
                UserLocation::default()
            }),
            None => UserLocation::default(),
        };
        Self { current: RwLock::new(current), store }
    }

    fn read(&self) -> RwLockReadGuard<'_, UserLocation> { self.current.read().unwrap_or_else(PoisonError::into_inner) }

    fn write(&self) -> RwLockWriteGuard<'_, UserLocation> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// # Returns
    /// A snapshot of the coordinates, place name and permission.
    pub fn current(&self) -> UserLocation { self.read().clone() }
    pub fn coordinates(&self) -> Option<GeoCoordinate> { self.read().coordinates }
    pub fn permission(&self) -> Option<LocationPermission> { self.read().permission }

    /// Records new coordinates and persists the whole location.
    pub fn set_coordinates(&self, coordinates: GeoCoordinate) { self.update(|l| l.coordinates = Some(coordinates)); }

    pub fn set_location_name(&self, name: &str) { self.update(|l| l.location = name.to_string()); }

    pub fn set_permission(&self, permission: LocationPermission) {
        self.update(|l| l.permission = Some(permission));
    }

    /// Forgets everything and removes the persisted entry.
    pub fn clear(&self) {
        *self.write() = UserLocation::default();
        if let Err(e) = self.store.remove(Self::STORE_KEY) {
            error!("Failed to remove persisted location: {e:?}");
        }
    }

    fn update(&self, apply: impl FnOnce(&mut UserLocation)) {
        let snapshot = {
            let mut current = self.write();
            apply(&mut current);
            current.clone()
        };
        if let Err(e) = self.persist(&snapshot) {
            error!("Failed to persist location: {e:?}");
        }
    }

    fn persist(&self, location: &UserLocation) -> Result<(), StorageError> {
        self.store.set(Self::STORE_KEY, &serde_json::to_string(location)?)?;
        event!("Persisted location '{}'", location.location);
        Ok(())
    }
}
