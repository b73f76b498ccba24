//! Mini player controller - core orchestration
//!
//! Subscribes to the store, forwards user intent and collaborator callbacks
//! into dispatches, and keeps the media element and now-playing session in
//! step with state.

use crate::{
    config::PlayerConfig,
    element::{ElementEvent, ElementProps, MediaElement},
    error::Result,
    navigation::{self, Advance, Retreat},
    session::{Control, MediaSession, NowPlaying, PlaybackUpdate, SessionCommand, SessionState},
    view::{self, MiniPlayerView},
};
use miniplayer_core::{SongStorage, Track};
use miniplayer_state::{actions, thunks, PlayerState, Scene, Store};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Controls the remote surface offers after mount
const ENABLED_CONTROLS: [(Control, bool); 6] = [
    (Control::Play, true),
    (Control::Pause, true),
    (Control::NextTrack, true),
    (Control::PreviousTrack, true),
    (Control::SeekForward, false),
    (Control::SeekBackward, false),
];

/// Mini player controller
///
/// Owns the state container and both platform bridges. All calls happen on
/// one thread, in callback order: user taps, media element callbacks and
/// session presses.
pub struct MiniPlayer<S, E> {
    store: Store,
    session: S,
    element: E,
    config: PlayerConfig,
    rng: StdRng,

    // Elapsed time as last reported by the element (seconds)
    current_time: f64,

    // Properties last applied to the element; None while nothing is loaded
    applied: Option<ElementProps>,
}

impl<S: MediaSession, E: MediaElement> MiniPlayer<S, E> {
    /// Create a controller with an empty store
    pub fn new(config: PlayerConfig, session: S, element: E) -> Self {
        Self::with_store(config, Store::default(), session, element)
    }

    /// Create a controller around an existing store
    pub fn with_store(config: PlayerConfig, store: Store, session: S, element: E) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            store,
            session,
            element,
            config,
            rng,
            current_time: 0.0,
            applied: None,
        }
    }

    // ===== Accessors =====

    pub fn state(&self) -> &PlayerState {
        self.store.state()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Mutable element access for hosts that pump element callbacks
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Elapsed time of the current song as last reported (seconds)
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Render model of the mini player bar
    pub fn view(&self) -> Option<MiniPlayerView> {
        view::render(self.store.state(), &self.config)
    }

    // ===== Lifecycle =====

    /// Load the library and register remote controls
    ///
    /// A storage failure is returned before any control is registered.
    pub async fn mount<T: SongStorage + ?Sized>(&mut self, storage: &T) -> Result<()> {
        thunks::get_songs(&mut self.store, storage).await?;

        for (control, enabled) in ENABLED_CONTROLS {
            self.session.enable_control(control, enabled);
        }
        self.session
            .enable_background_mode(self.config.background_mode);

        tracing::info!(
            songs = self.store.state().playlist.len(),
            "Mini player mounted"
        );
        self.sync_element()
    }

    // ===== Playback Control =====

    /// Start or pause playback and tell the session
    pub fn toggle_play(&mut self, status: bool) -> Result<()> {
        self.store.dispatch(actions::set_playing(status));
        self.session.update_playback(PlaybackUpdate::new(
            SessionState::from(status),
            self.current_time,
        ));
        self.sync_element()
    }

    /// Flip mute
    pub fn toggle_volume(&mut self) -> Result<()> {
        let muted = self.store.state().muted;
        self.store.dispatch(actions::set_muted(!muted));
        self.sync_element()
    }

    /// Flip shuffle
    pub fn toggle_shuffle(&mut self) {
        let shuffle = self.store.state().shuffle;
        self.store.dispatch(actions::set_shuffle(!shuffle));
    }

    /// Play the song at `index`, optionally replacing the playlist first
    pub fn play_song(&mut self, index: usize, playlist: Option<Vec<Track>>) -> Result<()> {
        thunks::set_playing_song(&mut self.store, index, playlist);
        self.sync_element()
    }

    /// Skip back early in a song, otherwise restart it
    pub fn go_backward(&mut self) -> Result<()> {
        let index = self.store.state().song_index;

        match navigation::previous_step(index, self.current_time, self.config.restart_threshold_secs)
        {
            Retreat::Previous(previous) => {
                tracing::debug!(from = index, to = previous, "Skipping back");
                thunks::set_playing_song(&mut self.store, previous, None);
            }
            Retreat::Restart => {
                tracing::debug!(index, "Restarting current song");
                self.seek_element(0.0)?;
                self.session
                    .update_playback(PlaybackUpdate::new(SessionState::Playing, 0.0));
            }
        }

        self.sync_element()
    }

    /// Advance to the next (or a random) song
    ///
    /// Running off the end without shuffle lands on the first song, paused.
    pub fn go_forward(&mut self) -> Result<()> {
        let state = self.store.state();
        let Some(advance) =
            navigation::next_index(&mut self.rng, state.song_index, state.playlist.len(), state.shuffle)
        else {
            tracing::warn!("Forward requested with an empty playlist");
            return Ok(());
        };

        self.seek_element(0.0)?;
        self.set_time(0.0);

        match advance {
            Advance::To(index) => {
                tracing::debug!(index, "Advancing");
                thunks::set_playing_song(&mut self.store, index, None);
            }
            Advance::Wrap => {
                tracing::info!("End of playlist, wrapping to first song");
                thunks::set_playing_song(&mut self.store, 0, None);
                self.store.dispatch(actions::set_playing(false));

                if let Some(first) = self.store.state().playlist.first() {
                    let update = PlaybackUpdate::new(SessionState::Paused, 0.0)
                        .with_now_playing(now_playing(first, None));
                    self.session.update_playback(update);
                }
            }
        }

        self.sync_element()
    }

    /// Record elapsed time
    pub fn set_time(&mut self, current_time: f64) {
        self.store.dispatch(actions::set_progress(current_time));
        self.current_time = current_time;
    }

    /// User released the progress slider
    pub fn on_sliding_complete(&mut self, time: f64) -> Result<()> {
        self.seek_element(time)
    }

    /// Show the full-screen player and start playing
    pub fn open_player(&mut self) -> Result<()> {
        self.toggle_play(true)?;
        self.store.dispatch(actions::set_scene(Scene::Player));
        Ok(())
    }

    /// Return to the library with the mini player expanded
    pub fn close_player(&mut self) {
        self.store.dispatch(actions::set_scene(Scene::Library));
    }

    // ===== Collaborator callbacks =====

    /// Element finished loading media
    pub fn on_load(&mut self, reported_duration: f64) {
        let duration = reported_duration * self.config.duration_scale;
        self.store.dispatch(actions::set_song_duration(duration));
        self.set_now_playing(duration);
    }

    /// Element reached the end of the media
    pub fn on_end(&mut self) -> Result<()> {
        self.store.dispatch(actions::set_playing(false));
        self.go_forward()
    }

    /// Route a media element callback
    pub fn handle_element_event(&mut self, event: ElementEvent) -> Result<()> {
        match event {
            ElementEvent::Load { duration } => {
                self.on_load(duration);
                Ok(())
            }
            ElementEvent::Progress { current_time } => {
                self.set_time(current_time);
                Ok(())
            }
            ElementEvent::End => self.on_end(),
        }
    }

    /// Route a remote press from the now-playing session
    pub fn handle_session_command(&mut self, command: SessionCommand) -> Result<()> {
        tracing::debug!(?command, "Session command");
        match command {
            SessionCommand::Play => self.toggle_play(true),
            SessionCommand::Pause => self.toggle_play(false),
            SessionCommand::NextTrack => self.go_forward(),
            SessionCommand::PreviousTrack => self.go_backward(),
        }
    }

    // ===== Element sync =====

    /// Element properties for the current state, if there is a song to play
    pub fn element_props(&self) -> Option<ElementProps> {
        let state = self.store.state();
        let song = state.current_song()?;

        Some(ElementProps {
            uri: song.path.clone(),
            volume: if state.muted { 0.0 } else { 1.0 },
            muted: false,
            paused: !state.playing,
            play_in_background: true,
            repeat: false,
        })
    }

    /// Push state-derived properties to the element when they changed
    pub fn sync_element(&mut self) -> Result<()> {
        match self.element_props() {
            Some(props) => {
                if self.applied.as_ref() != Some(&props) {
                    tracing::debug!(uri = %props.uri, paused = props.paused, "Applying element props");
                    self.element.apply(&props)?;
                    self.applied = Some(props);
                }
            }
            None => {
                if self.applied.take().is_some() {
                    tracing::debug!("No song at index, unloading element");
                    self.element.unload();
                }
            }
        }
        Ok(())
    }

    fn seek_element(&mut self, position_secs: f64) -> Result<()> {
        if self.applied.is_none() {
            tracing::debug!(position_secs, "Seek skipped, nothing loaded");
            return Ok(());
        }
        self.element.seek(position_secs)
    }

    fn set_now_playing(&mut self, duration: f64) {
        let Some(song) = self.store.state().current_song() else {
            tracing::warn!(
                index = self.store.state().song_index,
                "Loaded media without a song at the index"
            );
            return;
        };

        tracing::info!(title = %song.title, artist = %song.artist, duration, "Now playing");
        let metadata = now_playing(song, Some(duration));
        self.session.set_now_playing(metadata);
    }
}

fn now_playing(song: &Track, duration: Option<f64>) -> NowPlaying {
    NowPlaying {
        title: song.title.clone(),
        artist: song.artist.clone(),
        artwork: song.thumb.clone(),
        duration,
    }
}
