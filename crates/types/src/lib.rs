//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Coordinate System
//!
//! Game positions are expressed in *model units*, the pixel units of a classic
//! 600 x 600 windowed Snake:
//!
//! - **Cell size**: 20 units (every position is a multiple of [`CELL`])
//! - **Board**: 600 x 600 units, i.e. a 30 x 30 grid
//! - **Origin**: top-left, `x` grows to the right, `y` grows downward
//!
//! Terminal coordinates (mouse clicks, button regions) are separate and use
//! [`Point`] / [`Rect`] in character cells.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RENDER_FPS` | 30 | Render/input poll rate |
//! | `RENDER_TICK_MS` | 33 | Render/input poll interval |
//! | `Difficulty::Beginner` | 5/s | Move interval 200ms |
//! | `Difficulty::Intermediate` | 8/s | Move interval 125ms |
//! | `Difficulty::Advanced` | 10/s | Move interval 100ms |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Board, Direction, Position, CELL};
//!
//! let board = Board::default();
//! assert_eq!(board.center(), Position::new(300, 300));
//!
//! let head = board.center() + Direction::Up;
//! assert_eq!(head, Position::new(300, 300 - CELL));
//! assert!(board.contains(head));
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! ```

use std::ops::Add;

/// Grid cell size in model units.
pub const CELL: i32 = 20;

/// Play-field width in model units (30 columns).
pub const GAME_WIDTH: i32 = 600;

/// Play-field height in model units (30 rows).
pub const GAME_HEIGHT: i32 = 600;

/// Render/input loop rate.
pub const RENDER_FPS: u32 = 30;

/// Render/input loop interval in milliseconds.
pub const RENDER_TICK_MS: u64 = 1000 / RENDER_FPS as u64;

/// Score at which the sidebar progress bar is full.
pub const MAX_BAR_LEN: u32 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_defaults_match_classic_layout() {
        let board = Board::default();
        assert_eq!(board.width(), GAME_WIDTH);
        assert_eq!(board.height(), GAME_HEIGHT);
        assert_eq!(board.cols(), 30);
        assert_eq!(board.rows(), 30);
        assert_eq!(RENDER_TICK_MS, 33);
    }

    #[test]
    fn board_contains_is_half_open() {
        let board = Board::default();
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(580, 580)));
        assert!(!board.contains(Position::new(600, 0)));
        assert!(!board.contains(Position::new(0, 600)));
        assert!(!board.contains(Position::new(-20, 300)));
        assert!(!board.contains(Position::new(300, -20)));
    }

    #[test]
    fn board_cell_index_maps_aligned_positions() {
        let board = Board::default();
        assert_eq!(board.cell_index(Position::new(0, 0)), Some((0, 0)));
        assert_eq!(board.cell_index(Position::new(40, 580)), Some((2, 29)));
        assert_eq!(board.cell_index(Position::new(600, 0)), None);
    }

    #[test]
    fn board_center_is_aligned() {
        assert_eq!(Board::default().center(), Position::new(300, 300));
        assert_eq!(Board::new(60, 60).center(), Position::new(20, 20));
        assert_eq!(Board::new(20, 40).center(), Position::new(0, 20));
        assert!(Board::new(140, 100).center().is_aligned());
    }

    #[test]
    fn board_rounds_down_to_whole_cells() {
        let board = Board::new(105, 47);
        assert_eq!(board.width(), 100);
        assert_eq!(board.height(), 40);

        let tiny = Board::new(0, -5);
        assert_eq!(tiny.cols(), 1);
        assert_eq!(tiny.rows(), 1);
    }

    #[test]
    fn direction_vectors_are_cell_scaled() {
        assert_eq!(Direction::Up.vector(), (0, -CELL));
        assert_eq!(Direction::Down.vector(), (0, CELL));
        assert_eq!(Direction::Left.vector(), (-CELL, 0));
        assert_eq!(Direction::Right.vector(), (CELL, 0));
    }

    #[test]
    fn difficulty_rates_and_intervals() {
        assert_eq!(Difficulty::Beginner.tick_rate(), 5);
        assert_eq!(Difficulty::Intermediate.tick_rate(), 8);
        assert_eq!(Difficulty::Advanced.tick_rate(), 10);

        assert_eq!(Difficulty::Beginner.move_interval_ms(), 200);
        assert_eq!(Difficulty::Intermediate.move_interval_ms(), 125);
        assert_eq!(Difficulty::Advanced.move_interval_ms(), 100);
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10, 5, 4, 2);
        assert!(r.contains(Point::new(10, 5)));
        assert!(r.contains(Point::new(13, 6)));
        assert!(!r.contains(Point::new(14, 5)));
        assert!(!r.contains(Point::new(10, 7)));
        assert!(!r.contains(Point::new(9, 5)));
    }
}

/// A grid-aligned position in model units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates sit on a cell boundary.
    pub fn is_aligned(&self) -> bool {
        self.x % CELL == 0 && self.y % CELL == 0
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        let (dx, dy) = dir.vector();
        Position::new(self.x + dx, self.y + dy)
    }
}

/// Snake heading.
///
/// Each variant is a unit vector scaled by [`CELL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Movement vector in model units.
    pub fn vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -CELL),
            Direction::Down => (0, CELL),
            Direction::Left => (-CELL, 0),
            Direction::Right => (CELL, 0),
        }
    }

    /// The exact inverse heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Play-field geometry in model units.
///
/// Width and height are always whole multiples of [`CELL`] and at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
        }
    }
}

impl Board {
    /// Create a board, rounding each dimension down to whole cells (minimum one cell).
    pub fn new(width: i32, height: i32) -> Self {
        let snap = |v: i32| (v / CELL).max(1) * CELL;
        Self {
            width: snap(width),
            height: snap(height),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of grid columns.
    pub fn cols(&self) -> i32 {
        self.width / CELL
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        self.height / CELL
    }

    /// Starting cell of every session: the middle column and row, rounding down.
    pub fn center(&self) -> Position {
        Position::new(self.cols() / 2 * CELL, self.rows() / 2 * CELL)
    }

    /// True when `pos` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Grid column/row of an on-board position.
    pub fn cell_index(&self, pos: Position) -> Option<(u16, u16)> {
        if !self.contains(pos) {
            return None;
        }
        Some(((pos.x / CELL) as u16, (pos.y / CELL) as u16))
    }
}

/// The three speed tiers offered by the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Menu order, top to bottom.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Snake moves per second.
    pub fn tick_rate(&self) -> u32 {
        match self {
            Difficulty::Beginner => 5,
            Difficulty::Intermediate => 8,
            Difficulty::Advanced => 10,
        }
    }

    pub fn move_interval_ms(&self) -> u64 {
        1000 / self.tick_rate() as u64
    }

    /// Map the menu hotkeys `1`, `2`, `3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_digit(1), Some(Difficulty::Beginner));
    /// assert_eq!(Difficulty::from_digit(3), Some(Difficulty::Advanced));
    /// assert_eq!(Difficulty::from_digit(4), None);
    /// ```
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Difficulty::Beginner),
            2 => Some(Difficulty::Intermediate),
            3 => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    /// Button caption.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner (5 FPS)",
            Difficulty::Intermediate => "Intermediate (8 FPS)",
            Difficulty::Advanced => "Advanced (10 FPS)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A terminal cell coordinate (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned region of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.y >= self.y
            && (p.x as u32) < self.x as u32 + self.w as u32
            && (p.y as u32) < self.y as u32 + self.h as u32
    }
}

/// Pointer shape requested from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Arrow,
    Hand,
}

/// Discrete input events delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Close the game (the whole process, not just the current screen).
    Quit,
    /// Arrow (or WASD) key.
    Key(Direction),
    /// Number key; only `1..=3` carry meaning.
    Digit(u8),
    /// Primary button pressed at a terminal cell.
    PointerClick(Point),
    /// Pointer moved to a terminal cell.
    PointerMove(Point),
}
