/// Mini Player - console front end for the playback controller
use anyhow::Context;
use clap::{Parser, Subcommand};
use miniplayer_core::{JsonFileStorage, SongStorage};
use miniplayer_playback::{MiniPlayer, PlayIcon, SessionCommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod console;

use config::AppConfig;
use console::{ConsoleCommand, ConsoleSession, SimulatedElement, HELP};

/// Upper bound on element callbacks handled per command
const MAX_EVENTS_PER_COMMAND: usize = 64;

type Player = MiniPlayer<ConsoleSession, SimulatedElement>;

#[derive(Parser)]
#[command(name = "miniplayer")]
#[command(about = "Mini player playback controller console", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the song library
    List {
        /// JSON library file (overrides configuration)
        #[arg(short, long)]
        library: Option<PathBuf>,
    },
    /// Run an interactive console session
    Play {
        /// JSON library file (overrides configuration)
        #[arg(short, long)]
        library: Option<PathBuf>,

        /// Enable shuffle from the start
        #[arg(long)]
        shuffle: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "miniplayer=info,miniplayer_playback=info,miniplayer_state=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut app_config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List { library } => {
            if let Some(library) = library {
                app_config.library = library;
            }
            list(&app_config).await?;
        }
        Commands::Play { library, shuffle } => {
            if let Some(library) = library {
                app_config.library = library;
            }
            play(app_config, shuffle).await?;
        }
    }

    Ok(())
}

async fn list(app_config: &AppConfig) -> anyhow::Result<()> {
    let storage = JsonFileStorage::new(&app_config.library);
    let songs = storage
        .get_songs_from_storage()
        .await
        .with_context(|| format!("failed to load {}", app_config.library.display()))?;

    if songs.is_empty() {
        println!("No songs in {}", app_config.library.display());
        return Ok(());
    }

    for (i, song) in songs.iter().enumerate() {
        println!("{:>3}  {}", i, song.display_name());
    }
    Ok(())
}

async fn play(app_config: AppConfig, shuffle: bool) -> anyhow::Result<()> {
    let storage = JsonFileStorage::new(&app_config.library);
    let element = SimulatedElement::new(app_config.track_length_secs);
    let mut player = MiniPlayer::new(app_config.player, ConsoleSession::default(), element);

    player
        .mount(&storage)
        .await
        .with_context(|| format!("failed to load {}", app_config.library.display()))?;
    if shuffle {
        player.toggle_shuffle();
    }
    tracing::debug!(controls = ?player.session().enabled_controls(), "Remote controls enabled");
    pump_element(&mut player)?;

    println!("{HELP}");
    print_status(&player);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if command == ConsoleCommand::Quit {
            break;
        }

        if let Err(e) = run_command(&mut player, command) {
            tracing::warn!(error = %e, "Command failed");
            println!("error: {e}");
        }
    }

    Ok(())
}

fn run_command(player: &mut Player, command: ConsoleCommand) -> anyhow::Result<()> {
    match command {
        ConsoleCommand::Play => player.handle_session_command(SessionCommand::Play)?,
        ConsoleCommand::Pause => player.handle_session_command(SessionCommand::Pause)?,
        ConsoleCommand::Next => player.handle_session_command(SessionCommand::NextTrack)?,
        ConsoleCommand::Previous => {
            player.handle_session_command(SessionCommand::PreviousTrack)?;
        }
        ConsoleCommand::Shuffle => player.toggle_shuffle(),
        ConsoleCommand::Mute => player.toggle_volume()?,
        ConsoleCommand::Open => player.open_player()?,
        ConsoleCommand::Close => player.close_player(),
        ConsoleCommand::Select(index) => {
            let songs = player.state().songs.clone();
            if index >= songs.len() {
                anyhow::bail!("no song {index} (library has {})", songs.len());
            }
            player.play_song(index, Some(songs))?;
        }
        ConsoleCommand::Seek(time) => player.on_sliding_complete(time)?,
        ConsoleCommand::Tick(seconds) => {
            player.element_mut().tick(seconds);
            tracing::debug!(position = player.element().position(), "Clock advanced");
        }
        ConsoleCommand::Status => {}
        ConsoleCommand::Help => println!("{HELP}"),
        ConsoleCommand::Quit => return Ok(()),
    }

    pump_element(player)?;
    print_status(player);
    Ok(())
}

/// Feed queued element callbacks back into the controller
fn pump_element(player: &mut Player) -> anyhow::Result<()> {
    for _ in 0..MAX_EVENTS_PER_COMMAND {
        let Some(event) = player.element_mut().next_event() else {
            return Ok(());
        };
        player.handle_element_event(event)?;
    }

    tracing::warn!("Element callback limit reached, dropping the rest");
    Ok(())
}

fn print_status(player: &Player) {
    let Some(view) = player.view() else {
        println!("(nothing to play)");
        return;
    };

    let state = player.state();
    let icon = match view.play_icon {
        PlayIcon::Stop => "■",
        PlayIcon::Play => "▶",
    };
    let forward = if view.forward_enabled { "»" } else { " " };
    let flags = format!(
        "{}{}{}",
        if state.shuffle { " shuffle" } else { "" },
        if state.muted { " muted" } else { "" },
        if view.collapsed { " [player open]" } else { "" },
    );

    println!(
        "{icon} {} {forward}  {:.0}/{:.0}s  #{}{flags}",
        view.caption, state.progress, state.song_duration, state.song_index
    );
}
