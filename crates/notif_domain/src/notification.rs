use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One scheduled-notification entry, keyed by `id` within the stored list.
///
/// The serialized field names match what the scheduling plugin writes into
/// the shared preference key, so lists produced by either side deserialize
/// on the other. Unset optionals are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledNotification {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    pub scheduled_date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_date_time_components: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_local_notification_date_interpretation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_channel_specifics: Option<Map<String, Value>>,
}

impl ScheduledNotification {
    pub fn new(id: i32, scheduled_date_time: impl Into<String>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            payload: None,
            scheduled_date_time: scheduled_date_time.into(),
            time_zone_name: None,
            match_date_time_components: None,
            ui_local_notification_date_interpretation: None,
            platform_channel_specifics: None,
        }
    }

    /// Best-effort interpretation of `scheduled_date_time`.
    ///
    /// Accepts RFC 3339, falling back to a naive `YYYY-MM-DDTHH:MM:SS` form
    /// read as UTC. The stored string itself is kept verbatim.
    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.scheduled_date_time) {
            return Some(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.scheduled_date_time, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}
