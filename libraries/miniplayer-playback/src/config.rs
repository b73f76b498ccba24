//! Controller configuration

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};

/// Host platform, used for artwork URIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

impl Platform {
    /// Prefix local file references need before the image view accepts them
    pub fn artwork_prefix(self) -> &'static str {
        match self {
            Platform::Android => "file://",
            Platform::Ios => "",
        }
    }
}

/// Configuration for the mini player controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Below this elapsed time "previous" skips back instead of restarting
    /// (seconds, default: 3.0)
    pub restart_threshold_secs: f64,

    /// Caption length before the ellipsis (default: 30)
    pub caption_max_chars: usize,

    /// Multiplier applied to durations reported by the media element
    /// (default: 1.0; some Android video backends report twice the length)
    pub duration_scale: f64,

    /// Host platform (default: ios)
    pub platform: Platform,

    /// Fixed seed for shuffle selection (default: entropy)
    pub shuffle_seed: Option<u64>,

    /// Keep playing while the app is backgrounded (default: true)
    pub background_mode: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            restart_threshold_secs: 3.0,
            caption_max_chars: 30,
            duration_scale: 1.0,
            platform: Platform::Ios,
            shuffle_seed: None,
            background_mode: true,
        }
    }
}

impl PlayerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.restart_threshold_secs.is_finite() || self.restart_threshold_secs < 0.0 {
            return Err(PlaybackError::InvalidConfig(format!(
                "restart_threshold_secs must be a non-negative number, got {}",
                self.restart_threshold_secs
            )));
        }

        if !self.duration_scale.is_finite() || self.duration_scale <= 0.0 {
            return Err(PlaybackError::InvalidConfig(format!(
                "duration_scale must be positive, got {}",
                self.duration_scale
            )));
        }

        Ok(())
    }
}
