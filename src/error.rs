use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Cannot read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot parse config {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },
}

/// Failures of the external synchronization tool. All of these are caught
/// at the call site and reported to the console; none aborts a run.
#[derive(Debug, Error)]
pub(crate) enum SyncError {
    #[error("{bin} not found. Install it or set sync_bin in the config.")]
    NotFound { bin: String },

    #[error("Failed to run {bin}: {source}")]
    Spawn {
        bin: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for {bin}: {source}")]
    Wait {
        bin: String,
        source: std::io::Error,
    },

    #[error("{bin} failed: {detail}")]
    Failed { bin: String, detail: String },
}

/// Local filesystem failures on the liveness logs or the marker. Callers
/// warn and continue; a run never dies on these.
#[derive(Debug, Error)]
pub(crate) enum JournalError {
    #[error("Cannot create {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot append to {path}: {source}")]
    Append {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot remove {path}: {source}")]
    Remove {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
