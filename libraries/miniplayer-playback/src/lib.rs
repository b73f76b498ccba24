//! Mini Player - Playback Control
//!
//! Platform-agnostic playback control for the mini player bar.
//!
//! This crate provides:
//! - Playlist navigation (next / previous / shuffle pick)
//! - The `MiniPlayer` controller driving the state container
//! - Bridges to the OS now-playing session and the native media element
//! - A render model for the collapsed player bar
//!
//! # Architecture
//!
//! `miniplayer-playback` never decodes audio and never talks to the OS:
//! - Media decoding is delegated to a `MediaElement`
//! - Lock-screen integration is delegated to a `MediaSession`
//! - The song library comes from a `SongStorage`
//!
//! Platform-specific code implements those traits and forwards callbacks to
//! the controller as `ElementEvent`s and `SessionCommand`s.
//!
//! # Example
//!
//! ```rust
//! use miniplayer_core::Track;
//! use miniplayer_playback::{
//!     Control, ElementProps, MediaElement, MediaSession, MiniPlayer, NowPlaying,
//!     PlaybackUpdate, PlayerConfig, Result,
//! };
//!
//! struct Silent;
//!
//! impl MediaSession for Silent {
//!     fn set_now_playing(&mut self, _: NowPlaying) {}
//!     fn update_playback(&mut self, _: PlaybackUpdate) {}
//!     fn enable_control(&mut self, _: Control, _: bool) {}
//!     fn enable_background_mode(&mut self, _: bool) {}
//! }
//!
//! impl MediaElement for Silent {
//!     fn apply(&mut self, _: &ElementProps) -> Result<()> { Ok(()) }
//!     fn seek(&mut self, _: f64) -> Result<()> { Ok(()) }
//! }
//!
//! let mut player = MiniPlayer::new(PlayerConfig::default(), Silent, Silent);
//! let playlist = vec![
//!     Track::new("So What", "Miles Davis", "/music/so_what.mp3"),
//!     Track::new("Freddie Freeloader", "Miles Davis", "/music/freddie.mp3"),
//! ];
//!
//! player.play_song(0, Some(playlist)).unwrap();
//! player.go_forward().unwrap();
//! assert_eq!(player.state().song_index, 1);
//!
//! // Running off the end wraps to the first song, paused
//! player.go_forward().unwrap();
//! assert_eq!(player.state().song_index, 0);
//! assert!(!player.state().playing);
//! ```

#![forbid(unsafe_code)]

mod config;
mod controller;
mod element;
mod error;
pub mod navigation;
mod session;
mod view;

// Public exports
pub use config::{Platform, PlayerConfig};
pub use controller::MiniPlayer;
pub use element::{ElementEvent, ElementProps, MediaElement};
pub use error::{PlaybackError, Result};
pub use session::{
    Control, MediaSession, NowPlaying, PlaybackUpdate, SessionCommand, SessionState,
};
pub use view::{render, MiniPlayerView, PlayIcon};
