/// Application configuration
use anyhow::{bail, Context, Result};
use miniplayer_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "miniplayer.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// JSON song library
    #[serde(default = "default_library")]
    pub library: PathBuf,

    /// Simulated media length used by the console element (seconds)
    #[serde(default = "default_track_length")]
    pub track_length_secs: f64,

    #[serde(default)]
    pub player: PlayerConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` overrides the default `miniplayer.toml`; a missing default file
    /// is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (MINIPLAYER_PLAYER__PLATFORM=android)
        settings = settings.add_source(
            config::Environment::with_prefix("MINIPLAYER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.track_length_secs.is_finite() || self.track_length_secs <= 0.0 {
            bail!(
                "track_length_secs must be positive, got {}",
                self.track_length_secs
            );
        }

        self.player.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            track_length_secs: default_track_length(),
            player: PlayerConfig::default(),
        }
    }
}

fn default_library() -> PathBuf {
    PathBuf::from("./songs.json")
}

fn default_track_length() -> f64 {
    180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use miniplayer_playback::Platform;
    use std::io::Write;

    #[test]
    fn loads_player_table_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
library = "/srv/music/songs.json"

[player]
platform = "android"
restart_threshold_secs = 5.0
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.library, PathBuf::from("/srv/music/songs.json"));
        assert_eq!(config.player.platform, Platform::Android);
        assert_eq!(config.player.restart_threshold_secs, 5.0);
        assert_eq!(config.player.caption_max_chars, 30);
        assert_eq!(config.track_length_secs, 180.0);
    }

    #[test]
    fn rejects_invalid_player_settings() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[player]\nduration_scale = -2.0").unwrap();

        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
