//! Mini player render model
//!
//! What the collapsed player bar shows for a given state snapshot.

use crate::config::PlayerConfig;
use miniplayer_state::{PlayerState, Scene};
use serde::{Deserialize, Serialize};

/// Icon on the play/stop toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayIcon {
    /// Shown while paused; pressing starts playback
    Play,
    /// Shown while playing; pressing pauses
    Stop,
}

/// Render model of the mini player bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniPlayerView {
    /// "Artist - Title", truncated and followed by an ellipsis
    pub caption: String,

    /// Thumbnail URI, hidden while the full player is on top
    pub artwork_uri: Option<String>,

    pub play_icon: PlayIcon,

    /// Disabled on the last song of the playlist
    pub forward_enabled: bool,

    /// Bar collapsed to zero width (full player on top)
    pub collapsed: bool,
}

/// Build the view for a state snapshot
///
/// Returns `None` when there is no song at the current index.
pub fn render(state: &PlayerState, config: &PlayerConfig) -> Option<MiniPlayerView> {
    let song = state.current_song()?;
    let collapsed = state.scene == Scene::Player;

    let caption: String = song
        .display_name()
        .chars()
        .take(config.caption_max_chars)
        .collect();

    Some(MiniPlayerView {
        caption: format!("{}...", caption),
        artwork_uri: (!collapsed)
            .then(|| format!("{}{}", config.platform.artwork_prefix(), song.thumb)),
        play_icon: if state.playing {
            PlayIcon::Stop
        } else {
            PlayIcon::Play
        },
        forward_enabled: !state.is_last_song(),
        collapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Platform;
    use miniplayer_core::Track;

    fn state_with(tracks: Vec<Track>, index: usize) -> PlayerState {
        let mut state = PlayerState::default();
        state.playlist = tracks;
        state.song_index = index;
        state
    }

    #[test]
    fn no_song_renders_nothing() {
        let state = state_with(vec![], 0);
        assert!(render(&state, &PlayerConfig::default()).is_none());

        let state = state_with(vec![Track::new("A", "B", "/a.mp3")], 5);
        assert!(render(&state, &PlayerConfig::default()).is_none());
    }

    #[test]
    fn caption_is_truncated_with_ellipsis() {
        let track = Track::new(
            "A Love Supreme Pt. I Acknowledgement",
            "John Coltrane",
            "/m/als.mp3",
        );
        let view = render(&state_with(vec![track], 0), &PlayerConfig::default()).unwrap();

        assert_eq!(view.caption, "John Coltrane - A Love Supreme...");
        assert_eq!(view.caption.chars().count(), 33);
    }

    #[test]
    fn short_caption_still_gets_ellipsis() {
        let track = Track::new("Naima", "Coltrane", "/m/naima.mp3");
        let view = render(&state_with(vec![track], 0), &PlayerConfig::default()).unwrap();
        assert_eq!(view.caption, "Coltrane - Naima...");
    }

    #[test]
    fn caption_truncation_respects_char_boundaries() {
        let track = Track::new("Ñandú Überfahrt", "Björk", "/m/x.mp3");
        let mut config = PlayerConfig::default();
        config.caption_max_chars = 7;
        let view = render(&state_with(vec![track], 0), &config).unwrap();
        assert_eq!(view.caption, "Björk -...");
    }

    #[test]
    fn play_icon_follows_playing_flag() {
        let mut state = state_with(vec![Track::new("A", "B", "/a.mp3")], 0);
        let config = PlayerConfig::default();

        assert_eq!(render(&state, &config).unwrap().play_icon, PlayIcon::Play);
        state.playing = true;
        assert_eq!(render(&state, &config).unwrap().play_icon, PlayIcon::Stop);
    }

    #[test]
    fn forward_disabled_on_last_song() {
        let tracks = vec![Track::new("A", "X", "/a.mp3"), Track::new("B", "X", "/b.mp3")];
        let config = PlayerConfig::default();

        assert!(render(&state_with(tracks.clone(), 0), &config).unwrap().forward_enabled);
        assert!(!render(&state_with(tracks, 1), &config).unwrap().forward_enabled);
    }

    #[test]
    fn artwork_prefixed_on_android_and_hidden_in_player_scene() {
        let track = Track::new("A", "B", "/a.mp3").with_thumb("/thumbs/a.jpg");
        let mut state = state_with(vec![track], 0);
        let mut config = PlayerConfig::default();
        config.platform = Platform::Android;

        let view = render(&state, &config).unwrap();
        assert_eq!(view.artwork_uri.as_deref(), Some("file:///thumbs/a.jpg"));
        assert!(!view.collapsed);

        state.scene = Scene::Player;
        let view = render(&state, &config).unwrap();
        assert!(view.artwork_uri.is_none());
        assert!(view.collapsed);
    }
}
