//! Native media element bridge
//!
//! Decoding and rendering are delegated to a platform media element. The
//! controller derives its properties from state and forwards element
//! lifecycle callbacks back in as `ElementEvent`s.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Properties the element is rendered with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementProps {
    /// Media reference of the current track
    pub uri: String,

    /// Output volume, 0.0 when muted, 1.0 otherwise
    pub volume: f32,

    /// Element-level mute (always off; muting goes through `volume`)
    pub muted: bool,

    pub paused: bool,
    pub play_in_background: bool,
    pub repeat: bool,
}

/// Lifecycle callbacks emitted by the element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementEvent {
    /// Media loaded; duration as reported by the element (seconds)
    Load { duration: f64 },

    /// Periodic position report (seconds)
    Progress { current_time: f64 },

    /// Reached the end of the media
    End,
}

/// Platform media element
#[cfg_attr(test, mockall::automock)]
pub trait MediaElement {
    /// Render with new properties. A changed `uri` loads new media.
    fn apply(&mut self, props: &ElementProps) -> Result<()>;

    /// Seek to an absolute position in seconds
    fn seek(&mut self, position_secs: f64) -> Result<()>;

    /// Tear the element down (no song to render)
    fn unload(&mut self) {}
}

impl<M: MediaElement + ?Sized> MediaElement for Box<M> {
    fn apply(&mut self, props: &ElementProps) -> Result<()> {
        (**self).apply(props)
    }

    fn seek(&mut self, position_secs: f64) -> Result<()> {
        (**self).seek(position_secs)
    }

    fn unload(&mut self) {
        (**self).unload();
    }
}
