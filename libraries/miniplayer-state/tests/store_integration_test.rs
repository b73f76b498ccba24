//! Store + thunk integration tests
//!
//! Drives the real store through the composite and async creators.

use async_trait::async_trait;
use miniplayer_core::{MemoryStorage, MiniPlayerError, SongStorage, Track};
use miniplayer_state::{actions, thunks, Action, Dispatch, PlayerState, Store};
use std::cell::RefCell;
use std::rc::Rc;

// ===== Test Helpers =====

fn library() -> Vec<Track> {
    vec![
        Track::new("Giant Steps", "John Coltrane", "/m/giant_steps.mp3"),
        Track::new("Cousin Mary", "John Coltrane", "/m/cousin_mary.mp3"),
        Track::new("Countdown", "John Coltrane", "/m/countdown.mp3"),
    ]
}

struct FailingStorage;

#[async_trait]
impl SongStorage for FailingStorage {
    async fn get_songs_from_storage(&self) -> miniplayer_core::Result<Vec<Track>> {
        Err(MiniPlayerError::storage("permission denied"))
    }
}

/// Dispatcher that records the order of action kinds
#[derive(Default)]
struct KindLog(Vec<&'static str>);

impl Dispatch for KindLog {
    fn dispatch(&mut self, action: Action) {
        self.0.push(action.kind());
    }
}

// ===== Tests =====

#[tokio::test]
async fn get_songs_fills_playlist_and_library() {
    let mut store = Store::default();
    let storage = MemoryStorage::new(library());

    thunks::get_songs(&mut store, &storage).await.unwrap();

    assert_eq!(store.state().playlist, library());
    assert_eq!(store.state().songs, library());
    assert_eq!(store.state().song_index, 0);
    assert!(!store.state().playing);
}

#[tokio::test]
async fn get_songs_dispatches_playlist_before_songs() {
    let mut log = KindLog::default();
    thunks::get_songs(&mut log, &MemoryStorage::new(library()))
        .await
        .unwrap();

    assert_eq!(log.0, vec!["SET_PLAYLIST", "SET_SONGS"]);
}

#[tokio::test]
async fn storage_failure_propagates_without_dispatching() {
    let mut store = Store::default();

    let err = thunks::get_songs(&mut store, &FailingStorage)
        .await
        .unwrap_err();

    assert!(matches!(err, MiniPlayerError::Storage(_)));
    assert_eq!(store.dispatch_count(), 0);
    assert_eq!(*store.state(), PlayerState::default());
}

#[test]
fn set_playing_song_notifies_listener_after_each_step() {
    let mut store = Store::default();
    let snapshots = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&snapshots);
    store.subscribe(move |state| {
        sink.borrow_mut()
            .push((state.playlist.len(), state.song_index, state.playing));
    });

    thunks::set_playing_song(&mut store, 2, Some(library()));

    assert_eq!(
        *snapshots.borrow(),
        vec![(3, 0, false), (3, 2, false), (3, 2, true)]
    );
}

#[test]
fn switching_songs_keeps_library_untouched() {
    let mut store = Store::default();
    store.dispatch(actions::set_songs(library()));

    let single = vec![Track::new("Naima", "John Coltrane", "/m/naima.mp3")];
    thunks::set_playing_song(&mut store, 0, Some(single.clone()));

    assert_eq!(store.state().playlist, single);
    assert_eq!(store.state().songs.len(), 3);
    assert_eq!(
        store.state().current_song().map(|t| t.title.as_str()),
        Some("Naima")
    );
}
