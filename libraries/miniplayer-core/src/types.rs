/// Track domain type
use serde::{Deserialize, Serialize};

/// A playable song as loaded from storage
///
/// Tracks are immutable once loaded; the state container only ever replaces
/// whole lists of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Thumbnail image reference (local file path)
    #[serde(default)]
    pub thumb: String,

    /// Playable media reference handed to the media element
    pub path: String,
}

impl Track {
    /// Create a track without a thumbnail
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            thumb: String::new(),
            path: path.into(),
        }
    }

    /// Attach a thumbnail reference
    #[must_use]
    pub fn with_thumb(mut self, thumb: impl Into<String>) -> Self {
        self.thumb = thumb.into();
        self
    }

    /// "Artist - Title" display string
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}
