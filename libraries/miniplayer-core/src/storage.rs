//! Song storage collaborator
//!
//! The player never owns persistent data; it asks a `SongStorage` for the
//! library once at mount time.

use crate::error::{MiniPlayerError, Result};
use crate::types::Track;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Source of the song library
///
/// Reads are one-shot: no cancellation, timeout or retry. Failures are
/// returned to the caller unchanged.
#[async_trait]
pub trait SongStorage: Send + Sync {
    /// Read every song available to the player
    async fn get_songs_from_storage(&self) -> Result<Vec<Track>>;
}

/// Storage backed by a JSON array of tracks on disk
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SongStorage for JsonFileStorage {
    async fn get_songs_from_storage(&self) -> Result<Vec<Track>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            MiniPlayerError::storage(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let songs: Vec<Track> = serde_json::from_slice(&bytes)?;
        tracing::debug!(path = %self.path.display(), count = songs.len(), "Loaded songs");
        Ok(songs)
    }
}

/// In-memory storage serving a fixed list
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    songs: Vec<Track>,
}

impl MemoryStorage {
    pub fn new(songs: Vec<Track>) -> Self {
        Self { songs }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[async_trait]
impl SongStorage for MemoryStorage {
    async fn get_songs_from_storage(&self) -> Result<Vec<Track>> {
        Ok(self.songs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_storage_returns_songs_in_order() {
        let storage = MemoryStorage::new(vec![
            Track::new("One", "A", "/1.mp3"),
            Track::new("Two", "B", "/2.mp3"),
        ]);

        let songs = storage.get_songs_from_storage().await.unwrap();
        let titles: Vec<_> = songs.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn missing_file_is_a_storage_error() {
        let storage = JsonFileStorage::new("/definitely/not/here/songs.json");
        let err = storage.get_songs_from_storage().await.unwrap_err();
        assert!(matches!(err, MiniPlayerError::Storage(_)));
    }
}
