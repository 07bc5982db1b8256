use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use notif_domain::{NotificationStore, Preferences};

/// Operation names accepted by [`NotificationChannel`].
pub mod methods {
    pub const CLEAR_CORRUPTED_NOTIFICATIONS: &str = "clearCorruptedNotifications";
    pub const GET_SCHEDULED_NOTIFICATION_COUNT: &str = "getScheduledNotificationCount";
}

const ERROR_CODE: &str = "ERROR";

/// One invocation arriving from the application layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }
}

/// Outcome of one method call, mirrored back onto the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodResult {
    Success { value: Value },
    Error { code: String, message: String },
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Error {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Dispatches named operations onto a [`NotificationStore`].
///
/// Unknown operation names answer `NotImplemented` without touching the
/// store; store failures come back as an `Error` result, never a panic.
pub struct NotificationChannel<P: Preferences> {
    store: NotificationStore<P>,
}

impl<P: Preferences> NotificationChannel<P> {
    pub fn new(store: NotificationStore<P>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NotificationStore<P> {
        &self.store
    }

    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        debug!(method = %call.method, "dispatching method call");
        match call.method.as_str() {
            methods::CLEAR_CORRUPTED_NOTIFICATIONS => self.clear_corrupted(),
            methods::GET_SCHEDULED_NOTIFICATION_COUNT => self.scheduled_count(),
            _ => MethodResult::NotImplemented,
        }
    }

    fn clear_corrupted(&self) -> MethodResult {
        match self.store.clear() {
            Ok(()) => MethodResult::success("Cleared corrupted notifications"),
            Err(err) => {
                MethodResult::error(ERROR_CODE, format!("Failed to clear notifications: {err}"))
            }
        }
    }

    fn scheduled_count(&self) -> MethodResult {
        match self.store.count() {
            Ok(count) => MethodResult::success(count as u64),
            Err(err) => {
                MethodResult::error(ERROR_CODE, format!("Failed to get notification count: {err}"))
            }
        }
    }
}
