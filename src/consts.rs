//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Side length of one grid cell, in canvas units.  Every coordinate in the
/// simulation is a multiple of this.
pub(crate) const CELL_SIZE: i32 = 30;

/// Width of the playfield, in canvas units
pub(crate) const CANVAS_WIDTH: i32 = 780;

/// Height of the playfield, in canvas units
pub(crate) const CANVAS_HEIGHT: i32 = 600;

/// Width of the playfield, in cells
pub(crate) const GRID_WIDTH: u16 = 26;

/// Height of the playfield, in cells
pub(crate) const GRID_HEIGHT: u16 = 20;

/// Starting position of the snake's head
pub(crate) const INITIAL_HEAD_X: i32 = 300;

/// Starting position of the snake's head
pub(crate) const INITIAL_HEAD_Y: i32 = 300;

/// Number of cells the snake starts with
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 5;

/// Points awarded per food item eaten
pub(crate) const SCORE_PER_FOOD: u32 = 10;

/// How many segments behind the head are skipped by the self-collision
/// check.  The freshly-inserted head cannot overlap the four cells directly
/// behind it in a single step, and the value also tolerates the not-yet
/// trimmed tail.  Tied to [`INITIAL_SNAKE_LENGTH`]: revisit one if you
/// change the other.
pub(crate) const NECK_EXEMPTION: usize = 4;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Glyph for the snake's cells
pub(crate) const SNAKE_SYMBOL: char = '█';

/// Glyph for the food cell
pub(crate) const FOOD_SYMBOL: char = '●';

/// Default style for the snake (the original's `#73854A` on `#A2C359`)
pub(crate) const SNAKE_STYLE: Style = Style::new()
    .fg(Color::Rgb(0x73, 0x85, 0x4A))
    .bg(Color::Rgb(0xA2, 0xC3, 0x59));

/// Default style for the food (the original's `#EC5E0B` on `#A2C359`)
pub(crate) const FOOD_STYLE: Style = Style::new()
    .fg(Color::Rgb(0xEC, 0x5E, 0x0B))
    .bg(Color::Rgb(0xA2, 0xC3, 0x59));

/// Default style for empty playfield cells (the original's `#A2C359`)
pub(crate) const BACKGROUND_STYLE: Style = Style::new().bg(Color::Rgb(0xA2, 0xC3, 0x59));

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the "Game Over" heading on the start screen
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
