use thiserror::Error;

/// Every failure an operation can report to its caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("At least 2 playlists with tracks are needed to mix, got {0}")]
    InsufficientSources(usize),

    #[error("Playlist {playlist} belongs to {owner}. Only your own playlists can be modified.")]
    PermissionDenied { playlist: String, owner: String },

    #[error("Spotify request failed: {0}")]
    Upstream(String),

    #[error("Source playlist {playlist} skipped: {reason}")]
    PartialScanFailure { playlist: String, reason: String },

    #[error("History of {playlist} not saved, its tracks may be added again: {reason}")]
    HistoryNotSaved { playlist: String, reason: String },

    #[error("Stopped after {committed} of {total} tracks: {reason}")]
    BatchAborted {
        committed: usize,
        total: usize,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not authenticated: {0}. Please run spotlist auth")]
    Auth(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Upstream(err.to_string())
    }
}
