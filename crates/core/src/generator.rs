//! Maze generator - depth-first carving on a 2-stride lattice
//!
//! Generation works on the cells that share the start cell's row and column
//! parity. Each carve step jumps two cells and opens the wall cell in between,
//! so the opened cells always form a spanning tree rooted at the start: every
//! open cell is reachable and there are no loops.
//!
//! The traversal uses an explicit stack of `(cell, next direction)` frames
//! instead of recursion. Popping order matches the recursive formulation
//! exactly, so the same seed gives the same maze either way, and depth is
//! bounded only by heap size (roughly N²/4 frames).

use tracing::debug;

use crate::error::Result;
use crate::grid::{Grid, MazeSize};
use crate::rng::RandomSource;
use crate::types::{Cell, Direction, Position};

/// Directions tried, in order, by [`CarveOrder::Fixed`].
pub const FIXED_CARVE_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// How each carve frame orders the four directions.
///
/// Both orders produce a perfect maze; they only change its texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CarveOrder {
    /// Always right, down, left, up. Long straight corridors.
    #[default]
    Fixed,
    /// Fresh shuffle per carved cell. Twistier corridors, more dead ends.
    Shuffled,
}

impl CarveOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(CarveOrder::Fixed),
            "shuffled" | "shuffle" => Some(CarveOrder::Shuffled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CarveOrder::Fixed => "fixed",
            CarveOrder::Shuffled => "shuffled",
        }
    }
}

/// A freshly generated maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Position,
    pub exit: Position,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    pos: Position,
    dirs: [Direction; 4],
    next: usize,
}

/// Builds perfect mazes of one fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MazeGenerator {
    size: MazeSize,
    order: CarveOrder,
}

impl MazeGenerator {
    pub fn new(size: MazeSize) -> Self {
        Self {
            size,
            order: CarveOrder::Fixed,
        }
    }

    pub fn with_carve_order(mut self, order: CarveOrder) -> Self {
        self.order = order;
        self
    }

    pub fn size(&self) -> MazeSize {
        self.size
    }

    pub fn carve_order(&self) -> CarveOrder {
        self.order
    }

    /// Generate a new maze.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Maze {
        let mut grid = Grid::new(self.size);
        let (start, exit) = self.generate_into(rng, &mut grid);
        Maze { grid, start, exit }
    }

    /// Generate into an existing grid, reusing its allocation.
    ///
    /// The grid is resized if it does not match this generator's size.
    /// Returns `(start, exit)`.
    pub fn generate_into<R: RandomSource>(&self, rng: &mut R, grid: &mut Grid) -> (Position, Position) {
        if grid.size() != self.size.get() {
            *grid = Grid::new(self.size);
        } else {
            grid.fill_walls();
        }

        let n = self.size.get();
        let start = loop {
            let pos = random_position(rng, n);
            if !is_isolated(pos, n) {
                break pos;
            }
        };
        grid.set(start, Cell::Path);

        self.carve(rng, grid, start);

        // At least three cells are open here (start, one wall, one target),
        // so this terminates.
        let exit = loop {
            let pos = random_position(rng, n);
            if pos != start && grid.is_open(pos) {
                break pos;
            }
        };
        grid.set(exit, Cell::Exit);

        debug!(
            size = n,
            order = self.order.as_str(),
            %start,
            %exit,
            open = grid.open_count(),
            "maze generated"
        );

        (start, exit)
    }

    fn carve<R: RandomSource>(&self, rng: &mut R, grid: &mut Grid, start: Position) {
        let n = self.size.get();
        let mut stack: Vec<Frame> = Vec::with_capacity(n * n / 4 + 1);
        stack.push(self.frame(rng, start));

        while let Some(top) = stack.last_mut() {
            if top.next >= top.dirs.len() {
                stack.pop();
                continue;
            }
            let dir = top.dirs[top.next];
            top.next += 1;
            let pos = top.pos;

            let (dr, dc) = dir.delta();
            let Some(target) = pos.offset(dr * 2, dc * 2, n) else {
                continue;
            };
            if !grid.is_wall(target) {
                continue;
            }
            // Target is in bounds, so the cell between is too.
            let between = Position::new(
                (pos.row as i64 + dr as i64) as usize,
                (pos.col as i64 + dc as i64) as usize,
            );
            grid.set(target, Cell::Path);
            grid.set(between, Cell::Path);

            let frame = self.frame(rng, target);
            stack.push(frame);
        }
    }

    fn frame<R: RandomSource>(&self, rng: &mut R, pos: Position) -> Frame {
        let mut dirs = FIXED_CARVE_ORDER;
        if self.order == CarveOrder::Shuffled {
            rng.shuffle(&mut dirs);
        }
        Frame { pos, dirs, next: 0 }
    }
}

/// Generate a maze of `size` with the default carve order.
///
/// Fails only if `size` is outside the accepted range.
pub fn generate<R: RandomSource>(size: usize, rng: &mut R) -> Result<Maze> {
    let size = MazeSize::new(size)?;
    Ok(MazeGenerator::new(size).generate(rng))
}

fn random_position<R: RandomSource>(rng: &mut R, n: usize) -> Position {
    let row = rng.next_range(n as u32) as usize;
    let col = rng.next_range(n as u32) as usize;
    Position::new(row, col)
}

/// True if no cell two steps away is inside the grid.
/// Only the centre of a 3x3 grid qualifies.
fn is_isolated(pos: Position, n: usize) -> bool {
    FIXED_CARVE_ORDER.iter().all(|dir| {
        let (dr, dc) = dir.delta();
        pos.offset(dr * 2, dc * 2, n).is_none()
    })
}
