use crate::actions::Action;
use crate::types::PlayerState;

/// Apply a patch record to the state
///
/// Each action replaces exactly the field it names.
pub fn reduce(mut state: PlayerState, action: Action) -> PlayerState {
    match action {
        Action::SetPlaying { status } => state.playing = status,
        Action::SetSongDuration { duration } => state.song_duration = duration,
        Action::SetProgress { time } => state.progress = time,
        Action::SetSongIndex { index } => state.song_index = index,
        Action::SetShuffle { status } => state.shuffle = status,
        Action::SetPlaylist { songs } => state.playlist = songs,
        Action::SetSongs { songs } => state.songs = songs,
        Action::SetMuted { status } => state.muted = status,
        Action::SetScene { scene } => state.scene = scene,
    }
    state
}
