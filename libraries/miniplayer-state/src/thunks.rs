//! Composite and async action creators
//!
//! Both run their dispatches synchronously and in order; there is no retry
//! and no ordering guarantee beyond that.

use crate::actions::{set_playing, set_playlist, set_song_index, set_songs};
use crate::store::Dispatch;
use miniplayer_core::{Result, SongStorage, Track};

/// Start playing the song at `index`, optionally swapping the playlist first
///
/// Dispatches `SET_PLAYLIST` (only when a playlist is given), then
/// `SET_SONG_INDEX`, then `SET_PLAYING(true)`.
pub fn set_playing_song<D>(dispatch: &mut D, index: usize, playlist: Option<Vec<Track>>)
where
    D: Dispatch + ?Sized,
{
    if let Some(songs) = playlist {
        dispatch.dispatch(set_playlist(songs));
    }
    dispatch.dispatch(set_song_index(index));
    dispatch.dispatch(set_playing(true));
}

/// Load the library from storage into both the playlist and the song list
///
/// Storage errors are returned as-is and nothing is dispatched.
pub async fn get_songs<D, S>(dispatch: &mut D, storage: &S) -> Result<()>
where
    D: Dispatch + ?Sized,
    S: SongStorage + ?Sized,
{
    let songs = storage.get_songs_from_storage().await?;
    tracing::info!(count = songs.len(), "Songs loaded from storage");

    dispatch.dispatch(set_playlist(songs.clone()));
    dispatch.dispatch(set_songs(songs));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;

    #[derive(Default)]
    struct Recorder(Vec<Action>);

    impl Dispatch for Recorder {
        fn dispatch(&mut self, action: Action) {
            self.0.push(action);
        }
    }

    #[test]
    fn set_playing_song_without_playlist_dispatches_two() {
        let mut recorder = Recorder::default();
        set_playing_song(&mut recorder, 3, None);

        assert_eq!(recorder.0, vec![set_song_index(3), set_playing(true)]);
    }

    #[test]
    fn set_playing_song_with_playlist_dispatches_three_in_order() {
        let mut recorder = Recorder::default();
        let playlist = vec![Track::new("A", "X", "/a.mp3")];
        set_playing_song(&mut recorder, 0, Some(playlist.clone()));

        assert_eq!(
            recorder.0,
            vec![set_playlist(playlist), set_song_index(0), set_playing(true)]
        );
    }
}
