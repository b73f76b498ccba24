//! Core types for the state container

use miniplayer_core::Track;
use serde::{Deserialize, Serialize};

/// Screen currently on top of the navigation stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    /// Library / search screens; the mini player is shown expanded
    #[default]
    Library,

    /// Full-screen player; the mini player collapses
    Player,
}

/// Process-wide player state
///
/// The view layer reads snapshots of this and never mutates it directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerState {
    /// Songs being played, in order
    pub playlist: Vec<Track>,

    /// Zero-based position in `playlist`
    pub song_index: usize,

    /// Whether the media element should be playing
    pub playing: bool,

    /// Elapsed time of the current song (seconds)
    pub progress: f64,

    /// Duration of the current song (seconds)
    pub song_duration: f64,

    /// Output muted
    pub muted: bool,

    /// Shuffle forward navigation
    pub shuffle: bool,

    /// Full library as read from storage
    pub songs: Vec<Track>,

    /// Screen on top
    pub scene: Scene,
}

impl PlayerState {
    /// Song at the current index, if the index is in range
    pub fn current_song(&self) -> Option<&Track> {
        self.playlist.get(self.song_index)
    }

    /// Whether the current index points at the final playlist entry
    pub fn is_last_song(&self) -> bool {
        self.song_index + 1 == self.playlist.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = PlayerState::default();
        assert!(state.playlist.is_empty());
        assert_eq!(state.song_index, 0);
        assert!(!state.playing);
        assert!(!state.muted);
        assert!(!state.shuffle);
        assert_eq!(state.scene, Scene::Library);
        assert!(state.current_song().is_none());
    }

    #[test]
    fn current_song_guards_out_of_range_index() {
        let mut state = PlayerState::default();
        state.playlist = vec![Track::new("A", "X", "/a.mp3")];
        state.song_index = 3;
        assert!(state.current_song().is_none());

        state.song_index = 0;
        assert_eq!(state.current_song().map(|t| t.title.as_str()), Some("A"));
    }

    #[test]
    fn is_last_song() {
        let mut state = PlayerState::default();
        state.playlist = vec![
            Track::new("A", "X", "/a.mp3"),
            Track::new("B", "X", "/b.mp3"),
        ];
        assert!(!state.is_last_song());
        state.song_index = 1;
        assert!(state.is_last_song());
    }
}
