//! Mini Player - State Container
//!
//! Single process-wide state for the player, changed only by dispatching
//! patch records through a reducer.
//!
//! This crate provides:
//! - `PlayerState`: playlist, index, playback status, library, scene
//! - `Action`: tagged patch records and their creators
//! - `reduce`: the pure state transition
//! - `Store`: owns the state, dispatches actions, notifies listeners
//! - Thunks: `set_playing_song` (three sequenced dispatches) and
//!   `get_songs` (awaits storage, then two dispatches)
//!
//! # Example
//!
//! ```rust
//! use miniplayer_core::Track;
//! use miniplayer_state::{actions, thunks, Store};
//!
//! let mut store = Store::default();
//! let playlist = vec![
//!     Track::new("So What", "Miles Davis", "/music/so_what.mp3"),
//!     Track::new("Freddie Freeloader", "Miles Davis", "/music/freddie.mp3"),
//! ];
//!
//! thunks::set_playing_song(&mut store, 1, Some(playlist));
//! assert_eq!(store.state().song_index, 1);
//! assert!(store.state().playing);
//!
//! store.dispatch(actions::set_playing(false));
//! assert!(!store.state().playing);
//! ```

#![forbid(unsafe_code)]

pub mod actions;
mod reducer;
mod store;
pub mod thunks;
pub mod types;

pub use actions::Action;
pub use reducer::reduce;
pub use store::{Dispatch, Store, SubscriptionId};
pub use types::{PlayerState, Scene};
