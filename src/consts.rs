//! Assorted constants & hard-coded configuration
//!
//! The gameplay values here are the defaults for the `[game]` table of the
//! configuration file; see [`crate::config::Settings`].
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// How long the main loop waits for input before giving the game a chance to
/// tick.  This plays the role of a display refresh: ticks themselves are
/// spaced out according to the game's current speed.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Side length of a grid cell, in pixels
pub(crate) const SCALE: u16 = 20;

/// Number of cell columns on the board
pub(crate) const COLUMNS: u16 = 30;

/// Number of cell rows on the board
pub(crate) const ROWS: u16 = 30;

/// Column & row (in cell units) at which the snake's head starts
pub(crate) const START_CELL: [u16; 2] = [15, 15];

/// Time between ticks at the start of a game
pub(crate) const INITIAL_SPEED: Duration = Duration::from_millis(150);

/// The game never ticks faster than this
pub(crate) const MIN_SPEED: Duration = Duration::from_millis(60);

/// How much the time between ticks shrinks each time the score reaches a
/// multiple of [`SPEED_THRESHOLD`]
pub(crate) const SPEED_DECREMENT: Duration = Duration::from_millis(10);

/// Number of points between speed-ups
pub(crate) const SPEED_THRESHOLD: u32 = 100;

/// Points awarded for eating the food
pub(crate) const FOOD_REWARD: u32 = 10;

/// Upper limit on the board's width & height in pixels
pub(crate) const MAX_EXTENT: u32 = 1 << 20;

/// Color the board is cleared to before each frame
pub(crate) const BACKGROUND_COLOR: Color = Color::Black;

/// Color of the food
pub(crate) const FOOD_COLOR: Color = Color::Yellow;

/// Color of the snake's head and body segments
pub(crate) const BODY_COLOR: Color = Color::Red;

/// Color of the whites of the snake's eyes
pub(crate) const EYE_COLOR: Color = Color::White;

/// Color of the snake's pupils
pub(crate) const PUPIL_COLOR: Color = Color::Black;

/// Color of the snake's smile
pub(crate) const SMILE_COLOR: Color = Color::Yellow;

/// Stroke width of the snake's smile, in pixels
pub(crate) const SMILE_WIDTH: f64 = 2.0;

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for a control button that can currently be activated
pub(crate) const BUTTON_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for a control button that is currently disabled
pub(crate) const DISABLED_BUTTON_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::DIM);
