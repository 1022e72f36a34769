mod loading;
mod location;
mod notification;
mod session;
mod storage;

pub use loading::LoadingState;
pub use location::{LocationPermission, LocationState, UserLocation};
pub use notification::{DisplayMessage, NotificationState};
pub use session::SessionState;
pub use storage::{DurableStore, FileStore, MemoryStore, StorageError};
