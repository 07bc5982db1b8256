use tracing::{debug, warn};

use crate::error::StoreError;
use crate::notification::ScheduledNotification;
use crate::preferences::Preferences;

/// Preference namespace shared with the notification-scheduling plugin.
pub const PREFERENCES_NAMESPACE: &str = "flutter_local_notifications_plugin";

/// Key holding the serialized notification list inside the namespace.
pub const SCHEDULED_NOTIFICATIONS_KEY: &str = "scheduled_notifications";

/// Read-modify-write store for the scheduled-notification list.
///
/// `load` is self-healing: a stored value that fails to deserialize is
/// deleted on the spot and read as an empty list, so one schema-incompatible
/// write cannot wedge every subsequent read of the key.
pub struct NotificationStore<P: Preferences> {
    prefs: P,
}

impl<P: Preferences> NotificationStore<P> {
    pub fn new(prefs: P) -> Self {
        Self { prefs }
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }

    /// Reads the stored list. An absent key is an empty list; a value that
    /// fails to deserialize is removed and also read as empty. The only
    /// error out of here is a backend failure.
    pub fn load(&self) -> Result<Vec<ScheduledNotification>, StoreError> {
        let Some(raw) = self.prefs.get_string(SCHEDULED_NOTIFICATIONS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(notifications) => Ok(notifications),
            Err(err) => {
                warn!(%err, key = SCHEDULED_NOTIFICATIONS_KEY, "stored notification list is corrupt, removing it");
                self.prefs.remove(SCHEDULED_NOTIFICATIONS_KEY)?;
                Ok(Vec::new())
            }
        }
    }

    /// Serializes the whole list and overwrites the key in one write.
    pub fn save(&self, notifications: &[ScheduledNotification]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(notifications).map_err(StoreError::Encode)?;
        self.prefs.put_string(SCHEDULED_NOTIFICATIONS_KEY, &raw)
    }

    /// Deletes the key outright.
    pub fn clear(&self) -> Result<(), StoreError> {
        debug!(key = SCHEDULED_NOTIFICATIONS_KEY, "clearing scheduled notifications");
        self.prefs.remove(SCHEDULED_NOTIFICATIONS_KEY)
    }

    /// Drops every record with the given id.
    pub fn remove(&self, id: i32) -> Result<(), StoreError> {
        let mut notifications = self.load()?;
        notifications.retain(|n| n.id != id);
        self.save(&notifications)
    }

    /// Appends a record, replacing any existing record with the same id.
    pub fn add(&self, notification: ScheduledNotification) -> Result<(), StoreError> {
        let mut notifications = self.load()?;
        notifications.retain(|n| n.id != notification.id);
        notifications.push(notification);
        self.save(&notifications)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.len())
    }
}
