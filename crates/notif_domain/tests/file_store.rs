use std::fs;

use notif_domain::{
    FilePreferences, NotificationStore, Preferences, ScheduledNotification,
    PREFERENCES_NAMESPACE, SCHEDULED_NOTIFICATIONS_KEY,
};
use tempfile::tempdir;

fn record(id: i32, title: &str) -> ScheduledNotification {
    let mut notification = ScheduledNotification::new(id, "2025-11-07T09:00:00");
    notification.title = Some(title.to_string());
    notification
}

#[test]
fn notifications_survive_reopening_the_namespace() {
    let temp = tempdir().expect("tempdir");

    let prefs = FilePreferences::open(temp.path(), PREFERENCES_NAMESPACE).expect("open");
    let store = NotificationStore::new(prefs);
    store.add(record(1, "Call Mom")).expect("add");
    store.add(record(2, "Pay rent")).expect("add");

    let reopened = FilePreferences::open(temp.path(), PREFERENCES_NAMESPACE).expect("reopen");
    let store = NotificationStore::new(reopened);
    let loaded = store.load().expect("load");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].title.as_deref(), Some("Call Mom"));
    assert_eq!(loaded[1].title.as_deref(), Some("Pay rent"));

    store.clear().expect("clear");
    let raw = store
        .preferences()
        .get_string(SCHEDULED_NOTIFICATIONS_KEY)
        .expect("raw read");
    assert_eq!(raw, None);
}

#[test]
fn corrupt_list_value_heals_on_load() {
    let temp = tempdir().expect("tempdir");

    let prefs = FilePreferences::open(temp.path(), PREFERENCES_NAMESPACE).expect("open");
    prefs
        .put_string(SCHEDULED_NOTIFICATIONS_KEY, "{not valid}")
        .expect("seed corrupt value");

    let store = NotificationStore::new(prefs);
    assert!(store.load().expect("load").is_empty());

    let reopened = FilePreferences::open(temp.path(), PREFERENCES_NAMESPACE).expect("reopen");
    let raw = reopened
        .get_string(SCHEDULED_NOTIFICATIONS_KEY)
        .expect("raw read");
    assert_eq!(raw, None, "healed key should stay absent after reopen");
}

#[test]
fn unparseable_namespace_file_is_moved_aside() {
    let temp = tempdir().expect("tempdir");
    let file = temp.path().join(format!("{PREFERENCES_NAMESPACE}.json"));
    fs::write(&file, "not a json object").expect("write garbage namespace");

    let prefs = FilePreferences::open(temp.path(), PREFERENCES_NAMESPACE).expect("open");
    let raw = prefs
        .get_string(SCHEDULED_NOTIFICATIONS_KEY)
        .expect("raw read");
    assert_eq!(raw, None);
    assert!(!file.exists());
    assert!(temp
        .path()
        .join(format!("{PREFERENCES_NAMESPACE}.json.corrupt"))
        .exists());

    // The namespace is usable again after the rename.
    let store = NotificationStore::new(prefs);
    store.add(record(5, "Water plants")).expect("add");
    assert_eq!(store.count().expect("count"), 1);
    assert!(store.preferences().path().exists());
}
