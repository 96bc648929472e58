//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no runtime dependencies, making them usable in
//! any context (core logic, terminal rendering, JSON dumps).
//!
//! # Grid Dimensions
//!
//! The maze is always square. Coordinates are `(row, col)` with row 0 at the top:
//!
//! - **Default size**: 15x15
//! - **Minimum size**: 3x3 (smaller grids cannot hold an exit distinct from the start)
//! - **Maximum size**: 1024x1024
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Input poll timeout of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Cell, Direction, Position, DEFAULT_MAZE_SIZE};
//!
//! let pos = Position::new(3, 7);
//! assert_eq!(pos.offset(1, 0, DEFAULT_MAZE_SIZE), Some(Position::new(4, 7)));
//! assert_eq!(pos.offset(-4, 0, DEFAULT_MAZE_SIZE), None);
//!
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//! assert!(Cell::Exit.is_open());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default maze dimension (15x15).
pub const DEFAULT_MAZE_SIZE: usize = 15;

/// Smallest accepted maze dimension.
pub const MIN_MAZE_SIZE: usize = 3;

/// Largest accepted maze dimension.
pub const MAX_MAZE_SIZE: usize = 1024;

/// Input poll timeout in milliseconds. Also the redraw cadence of the timer.
pub const TICK_MS: u32 = 50;

/// A single maze cell.
///
/// The player is never stored in the grid; its position is tracked separately
/// and overlaid at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cell {
    #[default]
    Wall,
    Path,
    Exit,
}

impl Cell {
    /// True for cells the player may stand on.
    pub fn is_open(&self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Single-character text form used by `--print`.
    ///
    /// ```
    /// use tui_maze_types::Cell;
    ///
    /// assert_eq!(Cell::Wall.as_char(), '#');
    /// assert_eq!(Cell::Path.as_char(), ' ');
    /// assert_eq!(Cell::Exit.as_char(), 'E');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
            Cell::Exit => 'E',
        }
    }
}

/// Grid coordinate, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)` and return the result if it stays inside a
    /// `size`x`size` grid.
    pub fn offset(&self, d_row: i32, d_col: i32, size: usize) -> Option<Position> {
        let row = self.row as i64 + d_row as i64;
        let col = self.col as i64 + d_col as i64;
        if row < 0 || col < 0 || row >= size as i64 || col >= size as i64 {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /// Row-major index into a `size`-wide grid.
    #[inline(always)]
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four axis directions a player can move or the generator can carve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(d_row, d_col)` for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Player-facing actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Step one cell in a direction
    Move(Direction),
    /// Throw away the current maze and generate a new one
    NewGame,
    /// Leave the maze and return to the main menu
    Menu,
}

/// Lifecycle of a single game session.
///
/// `NotStarted -> Playing -> Won`, and back to `Playing` on every restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GamePhase {
    #[default]
    NotStarted,
    Playing,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limits_are_consistent() {
        assert!(MIN_MAZE_SIZE <= DEFAULT_MAZE_SIZE);
        assert!(DEFAULT_MAZE_SIZE <= MAX_MAZE_SIZE);
        assert_eq!(DEFAULT_MAZE_SIZE, 15);
    }

    #[test]
    fn offset_rejects_both_edges() {
        let size = 5;
        assert_eq!(Position::new(0, 0).offset(-1, 0, size), None);
        assert_eq!(Position::new(0, 0).offset(0, -1, size), None);
        assert_eq!(Position::new(4, 4).offset(1, 0, size), None);
        assert_eq!(Position::new(4, 4).offset(0, 1, size), None);
        assert_eq!(Position::new(2, 2).offset(0, 0, size), Some(Position::new(2, 2)));
        assert_eq!(Position::new(2, 2).offset(1, 1, size), Some(Position::new(3, 3)));
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dr.abs() + dc.abs(), 1, "{:?}", dir);
        }
    }

    #[test]
    fn only_walls_are_closed() {
        assert!(!Cell::Wall.is_open());
        assert!(Cell::Path.is_open());
        assert!(Cell::Exit.is_open());
        assert_eq!(Cell::default(), Cell::Wall);
    }
}
