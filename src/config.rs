use crate::audio::Output;
use crate::bestscore::BestScore;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::game::{Grid, GridError};
use serde::{de::Error as _, Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
pub(crate) struct Config {
    /// Settings about the game itself
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about sound
    #[serde(default)]
    pub(crate) audio: AudioConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("termsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the best score should be stored: the
    /// file given in the configuration or, if that is not set, the default
    /// best-score file path.  Return `None` if saving the best score is
    /// disabled or if no path is present in the configuration and the
    /// default path could not be computed.
    pub(crate) fn best_score_file(&self) -> Option<PathBuf> {
        if !self.files.save_best_score {
            return None;
        }
        self.files
            .best_score_file
            .clone()
            .or_else(BestScore::default_path)
    }

    /// Return the filepath to which log messages should be written, if any
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.files.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("termsnake").join("termsnake.log"))
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    /// Difficulty selected in the menu at startup
    pub(crate) difficulty: Difficulty,

    pub(crate) grid: Grid,
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    difficulty: Difficulty,
    canvas_width: u32,
    canvas_height: u32,
    cell_size: u32,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            difficulty: Difficulty::default(),
            canvas_width: consts::CANVAS_WIDTH,
            canvas_height: consts::CANVAS_HEIGHT,
            cell_size: consts::CELL_SIZE,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GridError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, GridError> {
        Ok(GameConfig {
            difficulty: value.difficulty,
            grid: Grid::from_canvas(value.canvas_width, value.canvas_height, value.cell_size)?,
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct AudioConfig {
    /// Sound effect volume, from 0.0 to 1.0
    #[serde(deserialize_with = "deserialize_volume")]
    pub(crate) volume: f32,

    /// Whether to start with sound muted
    pub(crate) muted: bool,

    /// Where to send sound
    pub(crate) output: Output,
}

impl Default for AudioConfig {
    fn default() -> AudioConfig {
        AudioConfig {
            volume: consts::DEFAULT_VOLUME,
            muted: false,
            output: Output::default(),
        }
    }
}

/// Reject NaN volumes.  Other out-of-range values are clamped by the mixer.
fn deserialize_volume<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    let volume = f32::deserialize(deserializer)?;
    if volume.is_nan() {
        Err(D::Error::custom("volume must be a number from 0.0 to 1.0"))
    } else {
        Ok(volume)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the best score should be stored
    best_score_file: Option<PathBuf>,

    /// Whether to load & save the best score in a file
    save_best_score: bool,

    /// Path to which log messages should be written
    log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            best_score_file: None,
            save_best_score: true,
            log_file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
