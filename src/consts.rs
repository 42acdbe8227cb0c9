//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::{Position, Size},
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// The largest grid that still fits on the game screen inside
/// [`DISPLAY_SIZE`] along with the board border, status bar, and help bar
pub(crate) const MAX_GRID_SIZE: Size = Size {
    width: 78,
    height: 20,
};

/// Default width of the playing field in canvas units
pub(crate) const CANVAS_WIDTH: u32 = 600;

/// Default height of the playing field in canvas units
pub(crate) const CANVAS_HEIGHT: u32 = 400;

/// Default size of a single grid cell in canvas units
pub(crate) const CELL_SIZE: u32 = 20;

/// Layout of a freshly-started snake, head first
pub(crate) const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 10, y: 10 },
    Position { x: 9, y: 10 },
    Position { x: 8, y: 10 },
];

/// Points awarded for each piece of food eaten
pub(crate) const FOOD_SCORE: u32 = 10;

/// The tick interval never drops below this, no matter the score
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(50);

/// The tick interval shrinks by [`SPEEDUP_STEP`] every time the score
/// passes another multiple of this
pub(crate) const SPEEDUP_SCORE_INTERVAL: u32 = 20;

/// Amount by which the tick interval shrinks per [`SPEEDUP_SCORE_INTERVAL`]
pub(crate) const SPEEDUP_STEP: Duration = Duration::from_millis(5);

/// Volume used when the configuration doesn't say otherwise
pub(crate) const DEFAULT_VOLUME: f32 = 0.7;

/// The background loop plays at this fraction of the effects volume
pub(crate) const MUSIC_VOLUME_RATIO: f32 = 0.3;

/// Amount by which the volume keys raise or lower the volume
pub(crate) const VOLUME_STEP: f32 = 0.1;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head when it's crashed into a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the status bar at the top of the game screen
pub(crate) const STATUS_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for the "NEW HIGH SCORE!" banner
pub(crate) const HIGH_SCORE_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);
