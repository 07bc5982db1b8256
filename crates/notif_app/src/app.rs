use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use notif_bridge::{MethodCall, MethodResult, NotificationChannel};
use notif_domain::{FilePreferences, NotificationStore, Preferences, PREFERENCES_NAMESPACE};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("NOTIF_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// Serves method calls as JSON lines: one `MethodCall` per stdin line, one
/// `MethodResult` per stdout line. EOF ends the loop.
pub fn run(config: AppConfig) -> Result<()> {
    let prefs = FilePreferences::open(&config.data_dir, PREFERENCES_NAMESPACE).with_context(
        || {
            format!(
                "failed to open preference store in {}",
                config.data_dir.display()
            )
        },
    )?;
    let store = NotificationStore::new(prefs);
    recover_on_start(&store);
    let channel = NotificationChannel::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read method call")?;
        if line.trim().is_empty() {
            continue;
        }
        let result = match serde_json::from_str::<MethodCall>(&line) {
            Ok(call) => channel.handle(&call),
            Err(err) => MethodResult::error("BAD_CALL", format!("unreadable method call: {err}")),
        };
        let encoded = serde_json::to_string(&result).context("failed to encode method result")?;
        writeln!(out, "{encoded}")?;
        out.flush()?;
    }
    Ok(())
}

/// One recovery pass before serving calls. Deserialization failures heal
/// inside `load` itself; only a backend failure reaches the `Err` arm, in
/// which case the stored list is dropped outright and startup continues.
pub fn recover_on_start<P: Preferences>(store: &NotificationStore<P>) {
    match store.load() {
        Ok(notifications) => {
            info!(count = notifications.len(), "notification store ready");
            if let Some(next) = notifications.iter().filter_map(|n| n.scheduled_at()).min() {
                info!(%next, "next scheduled notification");
            }
        }
        Err(err) => {
            warn!(%err, "could not load scheduled notifications, dropping the stored list");
            if let Err(err) = store.clear() {
                warn!(%err, "unable to drop the stored notification list");
            }
        }
    }
}
