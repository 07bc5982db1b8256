use thiserror::Error;

/// Failures that can escape the preference-backed store.
///
/// A stored list that fails to deserialize never shows up here; `load`
/// heals that in place and returns an empty list instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference backend failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preference data: {0}")]
    Encode(#[source] serde_json::Error),
}
