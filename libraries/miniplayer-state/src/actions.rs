//! Patch records and their creators
//!
//! Every creator is a pure function: the same input always produces a
//! structurally identical record. Records serialize as
//! `{"type": "SET_PLAYING", "status": true}`.

use crate::types::Scene;
use miniplayer_core::Track;
use serde::{Deserialize, Serialize};

/// A requested state change, consumed by the reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Start or stop playback
    SetPlaying { status: bool },

    /// Duration of the loaded song in seconds
    #[serde(rename = "SET_DURATION")]
    SetSongDuration { duration: f64 },

    /// Elapsed time of the current song in seconds
    SetProgress { time: f64 },

    /// Move to a playlist position
    SetSongIndex { index: usize },

    /// Enable or disable shuffle
    SetShuffle { status: bool },

    /// Replace the active playlist
    SetPlaylist { songs: Vec<Track> },

    /// Replace the library song list
    SetSongs { songs: Vec<Track> },

    /// Mute or unmute output
    SetMuted { status: bool },

    /// Change the screen on top
    SetScene { scene: Scene },
}

impl Action {
    /// Type discriminant as it appears in the serialized record
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetPlaying { .. } => "SET_PLAYING",
            Action::SetSongDuration { .. } => "SET_DURATION",
            Action::SetProgress { .. } => "SET_PROGRESS",
            Action::SetSongIndex { .. } => "SET_SONG_INDEX",
            Action::SetShuffle { .. } => "SET_SHUFFLE",
            Action::SetPlaylist { .. } => "SET_PLAYLIST",
            Action::SetSongs { .. } => "SET_SONGS",
            Action::SetMuted { .. } => "SET_MUTED",
            Action::SetScene { .. } => "SET_SCENE",
        }
    }
}

pub fn set_playing(status: bool) -> Action {
    Action::SetPlaying { status }
}

pub fn set_song_duration(duration: f64) -> Action {
    Action::SetSongDuration { duration }
}

pub fn set_progress(time: f64) -> Action {
    Action::SetProgress { time }
}

pub fn set_song_index(index: usize) -> Action {
    Action::SetSongIndex { index }
}

pub fn set_shuffle(status: bool) -> Action {
    Action::SetShuffle { status }
}

pub fn set_playlist(songs: Vec<Track>) -> Action {
    Action::SetPlaylist { songs }
}

pub fn set_songs(songs: Vec<Track>) -> Action {
    Action::SetSongs { songs }
}

pub fn set_muted(status: bool) -> Action {
    Action::SetMuted { status }
}

pub fn set_scene(scene: Scene) -> Action {
    Action::SetScene { scene }
}
