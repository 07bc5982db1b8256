pub mod error;
pub mod notification;
pub mod preferences;
pub mod store;

pub use crate::error::StoreError;
pub use crate::notification::ScheduledNotification;
pub use crate::preferences::{FilePreferences, MemoryPreferences, Preferences};
pub use crate::store::{NotificationStore, PREFERENCES_NAMESPACE, SCHEDULED_NOTIFICATIONS_KEY};
