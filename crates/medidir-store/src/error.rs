use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("failed to serialize doctor list: {0}")]
    Serialize(#[from] serde_json::Error),
}
