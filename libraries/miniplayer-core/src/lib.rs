//! Mini Player Core
//!
//! Platform-agnostic core types, traits, and error handling for Mini Player.
//!
//! This crate provides the building blocks shared by the state container and
//! the playback controller:
//! - **Domain Types**: `Track`
//! - **Core Traits**: `SongStorage`
//! - **Error Handling**: Unified `MiniPlayerError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use miniplayer_core::{MemoryStorage, Track};
//!
//! let track = Track::new("Blue in Green", "Miles Davis", "/music/blue.mp3")
//!     .with_thumb("/thumbs/kind_of_blue.jpg");
//!
//! let storage = MemoryStorage::new(vec![track]);
//! assert_eq!(storage.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{MiniPlayerError, Result};
pub use storage::{JsonFileStorage, MemoryStorage, SongStorage};
pub use types::Track;
