//! OS now-playing session bridge
//!
//! Abstracts the lock-screen / notification media controls. The platform
//! layer implements `MediaSession` and forwards remote presses to the
//! controller as `SessionCommand`s.

use serde::{Deserialize, Serialize};

/// Track metadata shown on the now-playing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,

    /// Thumbnail reference as stored on the track
    pub artwork: String,

    /// Duration in seconds, when known
    pub duration: Option<f64>,
}

/// Playback state reported to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Paused,
}

impl From<bool> for SessionState {
    fn from(playing: bool) -> Self {
        if playing {
            SessionState::Playing
        } else {
            SessionState::Paused
        }
    }
}

/// Playback update pushed to the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackUpdate {
    pub state: SessionState,

    /// Elapsed time in seconds
    pub elapsed_time: f64,

    /// Replacement metadata, sent when the track changes without a reload
    pub now_playing: Option<NowPlaying>,
}

impl PlaybackUpdate {
    pub fn new(state: SessionState, elapsed_time: f64) -> Self {
        Self {
            state,
            elapsed_time,
            now_playing: None,
        }
    }

    #[must_use]
    pub fn with_now_playing(mut self, now_playing: NowPlaying) -> Self {
        self.now_playing = Some(now_playing);
        self
    }
}

/// Remote controls the session can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Play,
    Pause,
    NextTrack,
    PreviousTrack,
    SeekForward,
    SeekBackward,
}

/// Remote press delivered by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionCommand {
    Play,
    Pause,
    NextTrack,
    PreviousTrack,
}

/// Platform now-playing integration
///
/// Calls are fire-and-forget; the OS surface has no way to report failure
/// back to the player.
#[cfg_attr(test, mockall::automock)]
pub trait MediaSession {
    /// Replace the now-playing metadata
    fn set_now_playing(&mut self, now_playing: NowPlaying);

    /// Report play/pause state and elapsed time
    fn update_playback(&mut self, update: PlaybackUpdate);

    /// Show or hide a remote control
    fn enable_control(&mut self, control: Control, enabled: bool);

    /// Keep the session alive while the app is backgrounded
    fn enable_background_mode(&mut self, enabled: bool);
}

impl<M: MediaSession + ?Sized> MediaSession for Box<M> {
    fn set_now_playing(&mut self, now_playing: NowPlaying) {
        (**self).set_now_playing(now_playing);
    }

    fn update_playback(&mut self, update: PlaybackUpdate) {
        (**self).update_playback(update);
    }

    fn enable_control(&mut self, control: Control, enabled: bool) {
        (**self).enable_control(control, enabled);
    }

    fn enable_background_mode(&mut self, enabled: bool) {
        (**self).enable_background_mode(enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_state_from_playing_flag() {
        assert_eq!(SessionState::from(true), SessionState::Playing);
        assert_eq!(SessionState::from(false), SessionState::Paused);
    }

    #[test]
    fn playback_update_builder() {
        let update = PlaybackUpdate::new(SessionState::Paused, 0.0).with_now_playing(NowPlaying {
            title: "T".to_string(),
            artist: "A".to_string(),
            artwork: String::new(),
            duration: None,
        });
        assert_eq!(update.state, SessionState::Paused);
        assert_eq!(update.now_playing.map(|n| n.title), Some("T".to_string()));
    }
}
