use crate::consts;
use crate::game::{Board, BoardError, Cell, InputPolicy, Movement};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay constants
    #[serde(default)]
    pub(crate) game: Settings,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("cursnake").join("config.toml"))
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
                log::warn!(
                    "Configuration file {} not found; using defaults",
                    path.display()
                );
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Gameplay constants, validated
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawSettings")]
pub(crate) struct Settings {
    pub(crate) board: Board,

    /// Where the snake's head is placed at the start of a game
    pub(crate) start: Cell,

    pub(crate) initial_speed: Duration,
    pub(crate) min_speed: Duration,
    pub(crate) speed_decrement: Duration,

    /// The game speeds up whenever the score reaches a multiple of this
    pub(crate) speed_threshold: u32,

    pub(crate) food_reward: u32,
    pub(crate) movement: Movement,
    pub(crate) input_policy: InputPolicy,
}

impl Default for Settings {
    fn default() -> Settings {
        let board = Board::default();
        let [column, row] = consts::START_CELL;
        Settings {
            board,
            start: board.cell(column, row),
            initial_speed: consts::INITIAL_SPEED,
            min_speed: consts::MIN_SPEED,
            speed_decrement: consts::SPEED_DECREMENT,
            speed_threshold: consts::SPEED_THRESHOLD,
            food_reward: consts::FOOD_REWARD,
            movement: Movement::default(),
            input_policy: InputPolicy::default(),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawSettings {
    scale: u16,
    columns: u16,
    rows: u16,
    start: [u16; 2],
    initial_speed_ms: u64,
    min_speed_ms: u64,
    speed_decrement_ms: u64,
    speed_threshold: u32,
    food_reward: u32,
    movement: Movement,
    input_policy: InputPolicy,
}

impl Default for RawSettings {
    fn default() -> RawSettings {
        RawSettings {
            scale: consts::SCALE,
            columns: consts::COLUMNS,
            rows: consts::ROWS,
            start: consts::START_CELL,
            initial_speed_ms: millis(consts::INITIAL_SPEED),
            min_speed_ms: millis(consts::MIN_SPEED),
            speed_decrement_ms: millis(consts::SPEED_DECREMENT),
            speed_threshold: consts::SPEED_THRESHOLD,
            food_reward: consts::FOOD_REWARD,
            movement: Movement::default(),
            input_policy: InputPolicy::default(),
        }
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

impl TryFrom<RawSettings> for Settings {
    type Error = SettingsError;

    fn try_from(value: RawSettings) -> Result<Settings, SettingsError> {
        let board = Board::new(value.scale, value.columns, value.rows).validate()?;
        let [column, row] = value.start;
        if column >= board.columns() || row >= board.rows() {
            return Err(SettingsError::StartOffBoard { column, row });
        }
        if value.initial_speed_ms == 0 {
            return Err(SettingsError::ZeroSpeed);
        }
        if value.min_speed_ms > value.initial_speed_ms {
            return Err(SettingsError::SpeedRange);
        }
        if value.speed_threshold == 0 {
            return Err(SettingsError::ZeroThreshold);
        }
        Ok(Settings {
            board,
            start: board.cell(column, row),
            initial_speed: Duration::from_millis(value.initial_speed_ms),
            min_speed: Duration::from_millis(value.min_speed_ms),
            speed_decrement: Duration::from_millis(value.speed_decrement_ms),
            speed_threshold: value.speed_threshold,
            food_reward: value.food_reward,
            movement: value.movement,
            input_policy: value.input_policy,
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("start cell ({column}, {row}) is not on the board")]
    StartOffBoard { column: u16, row: u16 },
    #[error("initial speed must be positive")]
    ZeroSpeed,
    #[error("minimum speed may not be greater than the initial speed")]
    SpeedRange,
    #[error("speed threshold must be positive")]
    ZeroThreshold,
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
