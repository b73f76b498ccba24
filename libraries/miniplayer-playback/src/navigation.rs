//! Playlist advance/retreat
//!
//! Pure index arithmetic over a single playlist position. The controller
//! turns the results into dispatches and media commands.

use rand::Rng;

/// Upper bound of the raw random draw before reducing modulo the length
const RANDOM_DRAW_RANGE: u64 = 1_000_000_000;

/// Outcome of moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Play the song at this index
    To(usize),

    /// End of playlist reached: go back to index 0 and pause
    Wrap,
}

impl Advance {
    /// Index playback lands on
    pub fn index(self) -> usize {
        match self {
            Advance::To(index) => index,
            Advance::Wrap => 0,
        }
    }

    /// Whether playback must pause after this move
    pub fn pauses(self) -> bool {
        matches!(self, Advance::Wrap)
    }
}

/// Outcome of moving backward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Play the song at this (earlier) index
    Previous(usize),

    /// Seek the current song back to 0
    Restart,
}

/// Pick the next index
///
/// With shuffle, a random index other than `current` (unless the playlist
/// has a single entry). Without shuffle, `current + 1`, or `Wrap` when that
/// runs off the end. Returns `None` for an empty playlist.
pub fn next_index<R: Rng + ?Sized>(
    rng: &mut R,
    current: usize,
    len: usize,
    shuffle: bool,
) -> Option<Advance> {
    if len == 0 {
        return None;
    }

    if shuffle {
        return Some(Advance::To(random_song_index(rng, current, len)));
    }

    if current + 1 == len {
        Some(Advance::Wrap)
    } else {
        Some(Advance::To(current + 1))
    }
}

/// Random index in `[0, len)` that differs from `current` when `len > 1`
///
/// Draws are rejected and retried until they miss `current`.
///
/// # Panics
/// Panics if `len` is 0.
pub fn random_song_index<R: Rng + ?Sized>(rng: &mut R, current: usize, len: usize) -> usize {
    assert!(len > 0, "cannot pick from an empty playlist");

    loop {
        let index = (rng.gen_range(0..RANDOM_DRAW_RANGE) % len as u64) as usize;
        if index != current || len == 1 {
            return index;
        }
    }
}

/// Decide between skipping back and restarting
///
/// Skips back only when less than `threshold_secs` has elapsed and the
/// current song is not the first one.
pub fn previous_step(current: usize, elapsed_secs: f64, threshold_secs: f64) -> Retreat {
    if elapsed_secs < threshold_secs && current != 0 {
        Retreat::Previous(current - 1)
    } else {
        Retreat::Restart
    }
}
