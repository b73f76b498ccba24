//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Storage or other core failure
    #[error(transparent)]
    Core(#[from] miniplayer_core::MiniPlayerError),

    /// Native media element rejected a command
    #[error("Media element error: {0}")]
    MediaElement(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
