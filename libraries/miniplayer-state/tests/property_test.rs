//! Property-based tests for action creators and the reducer
//!
//! Uses proptest to verify invariants across many random inputs.

use miniplayer_core::Track;
use miniplayer_state::{actions, reduce, PlayerState};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[A-Za-z ]{1,30}",  // title
        "[A-Za-z ]{1,20}",  // artist
        "[a-z0-9/]{0,20}",  // thumb
        "/music/[a-z]{1,8}", // path
    )
        .prop_map(|(title, artist, thumb, path)| Track::new(title, artist, path).with_thumb(thumb))
}

fn arbitrary_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(arbitrary_track(), 0..20)
}

// ===== Property Tests =====

proptest! {
    /// Property: creators are pure (same input, identical record)
    #[test]
    fn creators_are_pure(
        status in any::<bool>(),
        time in 0.0f64..10_000.0,
        index in 0usize..1000,
        songs in arbitrary_tracks(),
    ) {
        prop_assert_eq!(actions::set_playing(status), actions::set_playing(status));
        prop_assert_eq!(actions::set_progress(time), actions::set_progress(time));
        prop_assert_eq!(actions::set_song_duration(time), actions::set_song_duration(time));
        prop_assert_eq!(actions::set_song_index(index), actions::set_song_index(index));
        prop_assert_eq!(actions::set_shuffle(status), actions::set_shuffle(status));
        prop_assert_eq!(actions::set_playlist(songs.clone()), actions::set_playlist(songs.clone()));
        prop_assert_eq!(actions::set_songs(songs.clone()), actions::set_songs(songs));
    }

    /// Property: serialized records are stable across calls
    #[test]
    fn serialized_records_are_stable(index in 0usize..1000, time in 0.0f64..10_000.0) {
        let a = serde_json::to_string(&actions::set_song_index(index)).unwrap();
        let b = serde_json::to_string(&actions::set_song_index(index)).unwrap();
        prop_assert_eq!(a, b);

        let a = serde_json::to_string(&actions::set_progress(time)).unwrap();
        let b = serde_json::to_string(&actions::set_progress(time)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Property: reducing is deterministic
    #[test]
    fn reduce_is_deterministic(songs in arbitrary_tracks(), index in 0usize..50, playing in any::<bool>()) {
        let steps = vec![
            actions::set_playlist(songs),
            actions::set_song_index(index),
            actions::set_playing(playing),
        ];

        let run = || steps.iter().cloned().fold(PlayerState::default(), reduce);
        prop_assert_eq!(run(), run());
    }

    /// Property: setting the index never alters the playlist
    #[test]
    fn index_change_preserves_playlist(songs in arbitrary_tracks(), index in 0usize..50) {
        let mut state = PlayerState::default();
        state.playlist = songs.clone();

        let state = reduce(state, actions::set_song_index(index));
        prop_assert_eq!(state.playlist, songs);
        prop_assert_eq!(state.song_index, index);
    }
}
