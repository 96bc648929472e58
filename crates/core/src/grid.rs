//! Grid module - square maze storage
//!
//! The grid is an N x N array of [`Cell`]s in row-major order.
//! Coordinates: `(row, col)`, row 0 at the top, col 0 on the left.
//!
//! The grid only knows about walls, paths and the exit. The player's position
//! lives in [`GameState`](crate::GameState) and is overlaid when rendering.

use arrayvec::ArrayVec;

use crate::error::{MazeError, Result};
use crate::types::{Cell, Direction, Position, MAX_MAZE_SIZE, MIN_MAZE_SIZE};

/// A validated maze dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSize(usize);

impl MazeSize {
    /// Validate `size` against [`MIN_MAZE_SIZE`] and [`MAX_MAZE_SIZE`].
    ///
    /// ```
    /// use tui_maze_core::{MazeError, MazeSize};
    ///
    /// assert_eq!(MazeSize::new(15).unwrap().get(), 15);
    /// assert!(matches!(MazeSize::new(0), Err(MazeError::SizeTooSmall { .. })));
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_MAZE_SIZE {
            return Err(MazeError::SizeTooSmall {
                size,
                min: MIN_MAZE_SIZE,
            });
        }
        if size > MAX_MAZE_SIZE {
            return Err(MazeError::SizeTooLarge {
                size,
                max: MAX_MAZE_SIZE,
            });
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for MazeSize {
    fn default() -> Self {
        Self(crate::types::DEFAULT_MAZE_SIZE)
    }
}

impl TryFrom<usize> for MazeSize {
    type Error = MazeError;

    fn try_from(value: usize) -> Result<Self> {
        Self::new(value)
    }
}

/// Square maze grid with flat storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled entirely with walls
    pub fn new(size: MazeSize) -> Self {
        let size = size.get();
        Self {
            size,
            cells: vec![Cell::Wall; size * size],
        }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.index(self.size))
    }

    /// Get cell at `pos`, `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True if `pos` is in bounds and not a wall
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|c| c.is_open())
    }

    /// True if `pos` is in bounds and a wall
    pub fn is_wall(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Wall))
    }

    /// Reset every cell to a wall
    pub fn fill_walls(&mut self) {
        self.cells.fill(Cell::Wall);
    }

    /// Row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Iterate `(position, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Position::new(i / size, i % size), c))
    }

    /// Count cells that are not walls
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Directions from `pos` that lead onto an open cell
    pub fn open_directions(&self, pos: Position) -> ArrayVec<Direction, 4> {
        let mut out = ArrayVec::new();
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            if let Some(next) = pos.offset(dr, dc, self.size) {
                if self.is_open(next) {
                    out.push(dir);
                }
            }
        }
        out
    }

    /// Open cells orthogonally adjacent to `pos`
    pub fn open_neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        self.open_directions(pos)
            .into_iter()
            .filter_map(|dir| {
                let (dr, dc) = dir.delta();
                pos.offset(dr, dc, self.size)
            })
            .collect()
    }

    /// Position of the first exit cell, if any
    pub fn find_exit(&self) -> Option<Position> {
        self.iter()
            .find(|&(_, c)| c == Cell::Exit)
            .map(|(pos, _)| pos)
    }

    /// Render as lines of text (`#` wall, space path, `E` exit)
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.chunks(self.size) {
            out.extend(row.iter().map(Cell::as_char));
            out.push('\n');
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(MazeSize::default())
    }
}
