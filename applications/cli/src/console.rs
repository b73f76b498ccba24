//! Console stand-ins for the platform bridges
//!
//! `ConsoleSession` prints what a lock screen would show; `SimulatedElement`
//! pretends to play media, advancing only when told to via `tick`.

use anyhow::{anyhow, bail};
use miniplayer_playback::{
    Control, ElementEvent, ElementProps, MediaElement, MediaSession, NowPlaying, PlaybackError,
    PlaybackUpdate,
};
use std::collections::VecDeque;
use std::str::FromStr;

/// Now-playing surface rendered as log lines
#[derive(Debug, Default)]
pub struct ConsoleSession {
    enabled: Vec<Control>,
}

impl ConsoleSession {
    pub fn enabled_controls(&self) -> &[Control] {
        &self.enabled
    }
}

impl MediaSession for ConsoleSession {
    fn set_now_playing(&mut self, now_playing: NowPlaying) {
        println!(
            "♪ {} - {} ({:.0}s)",
            now_playing.artist,
            now_playing.title,
            now_playing.duration.unwrap_or_default()
        );
    }

    fn update_playback(&mut self, update: PlaybackUpdate) {
        tracing::info!(state = ?update.state, elapsed = update.elapsed_time, "Session playback update");
    }

    fn enable_control(&mut self, control: Control, enabled: bool) {
        self.enabled.retain(|c| *c != control);
        if enabled {
            self.enabled.push(control);
        }
    }

    fn enable_background_mode(&mut self, enabled: bool) {
        tracing::debug!(enabled, "Background mode");
    }
}

/// Media element that plays fixed-length silence on a manual clock
#[derive(Debug)]
pub struct SimulatedElement {
    track_length: f64,
    props: Option<ElementProps>,
    position: f64,
    events: VecDeque<ElementEvent>,
}

impl SimulatedElement {
    pub fn new(track_length: f64) -> Self {
        Self {
            track_length,
            props: None,
            position: 0.0,
            events: VecDeque::new(),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Advance the clock; queues progress and end callbacks
    pub fn tick(&mut self, seconds: f64) {
        let Some(props) = &self.props else {
            return;
        };
        if props.paused || self.position >= self.track_length {
            return;
        }

        self.position = (self.position + seconds).min(self.track_length);
        self.events.push_back(ElementEvent::Progress {
            current_time: self.position,
        });
        if self.position >= self.track_length {
            self.events.push_back(ElementEvent::End);
        }
    }

    /// Take the next queued callback
    pub fn next_event(&mut self) -> Option<ElementEvent> {
        self.events.pop_front()
    }
}

impl MediaElement for SimulatedElement {
    fn apply(&mut self, props: &ElementProps) -> miniplayer_playback::Result<()> {
        let reload = self.props.as_ref().map(|p| p.uri.as_str()) != Some(props.uri.as_str());
        self.props = Some(props.clone());

        if reload {
            tracing::debug!(uri = %props.uri, "Loading media");
            self.position = 0.0;
            self.events.clear();
            self.events.push_back(ElementEvent::Load {
                duration: self.track_length,
            });
        }
        Ok(())
    }

    fn seek(&mut self, position_secs: f64) -> miniplayer_playback::Result<()> {
        if !(0.0..=self.track_length).contains(&position_secs) {
            return Err(PlaybackError::MediaElement(format!(
                "seek to {position_secs}s outside 0..{}s",
                self.track_length
            )));
        }
        self.position = position_secs;
        Ok(())
    }

    fn unload(&mut self) {
        self.props = None;
        self.position = 0.0;
        self.events.clear();
    }
}

/// One line of console input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    Play,
    Pause,
    Next,
    Previous,
    Shuffle,
    Mute,
    Open,
    Close,
    Select(usize),
    Seek(f64),
    Tick(f64),
    Status,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            bail!("empty command");
        };
        let arg = parts.next();

        let number = |name: &str| -> anyhow::Result<f64> {
            arg.ok_or_else(|| anyhow!("{name} needs a number of seconds"))?
                .parse::<f64>()
                .map_err(|e| anyhow!("{name}: {e}"))
        };

        let command = match word {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Previous,
            "shuffle" => Self::Shuffle,
            "mute" => Self::Mute,
            "open" => Self::Open,
            "close" => Self::Close,
            "select" => {
                let index = arg
                    .ok_or_else(|| anyhow!("select needs a song number"))?
                    .parse::<usize>()?;
                Self::Select(index)
            }
            "seek" => Self::Seek(number("seek")?),
            "tick" | "t" => Self::Tick(number("tick")?),
            "status" | "s" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => bail!("unknown command: {other}"),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
commands:
  play | pause         remote play / pause
  next | prev          remote next / previous track
  shuffle | mute       toggle shuffle / mute
  open | close         show / hide the full player
  select <n>           play song n of the library
  seek <secs>          release the progress slider at <secs>
  tick <secs>          advance the simulated clock
  status               show the mini player bar
  quit";
