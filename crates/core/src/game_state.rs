//! Game state module - manages the complete game state
//!
//! This module ties together the maze generator, the random source and the
//! clock. It owns the grid and the player position, validates and applies
//! moves, and tracks the win flag and elapsed time.
//!
//! Lifecycle:
//!
//! ```text
//! NotStarted --start_new_game--> Playing --move onto exit--> Won
//!                                   ^                         |
//!                                   +------start_new_game-----+
//! ```
//!
//! Restarting is allowed from any phase, including right after a win.

use std::time::Instant;

use arrayvec::ArrayVec;
use tracing::info;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::generator::{CarveOrder, MazeGenerator};
use crate::grid::{Grid, MazeSize};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Direction, GameAction, GamePhase, Position};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng, C = SystemClock> {
    generator: MazeGenerator,
    rng: R,
    clock: C,
    grid: Grid,
    player: Position,
    start: Position,
    exit: Position,
    won: bool,
    /// `Some` once the first game has started.
    start_time: Option<Instant>,
    /// Monotonic episode id (increments on every new game).
    episode_id: u32,
    /// Accepted moves in the current episode.
    moves: u32,
}

impl GameState {
    /// Create an unstarted game of `size` seeded with `seed`
    pub fn new(size: usize, seed: u32) -> Result<Self> {
        let size = MazeSize::new(size)?;
        Ok(Self::with_parts(
            MazeGenerator::new(size),
            SimpleRng::new(seed),
            SystemClock,
        ))
    }
}

impl<R: RandomSource, C: Clock> GameState<R, C> {
    /// Assemble a game from explicit collaborators.
    pub fn with_parts(generator: MazeGenerator, rng: R, clock: C) -> Self {
        Self {
            grid: Grid::new(generator.size()),
            generator,
            rng,
            clock,
            player: Position::default(),
            start: Position::default(),
            exit: Position::default(),
            won: false,
            start_time: None,
            episode_id: 0,
            moves: 0,
        }
    }

    /// Change how future mazes are carved. The current maze is untouched.
    pub fn set_carve_order(&mut self, order: CarveOrder) {
        self.generator = self.generator.with_carve_order(order);
    }

    /// Generate a fresh maze and start playing it
    pub fn start_new_game(&mut self) {
        let (start, exit) = self.generator.generate_into(&mut self.rng, &mut self.grid);
        self.start = start;
        self.exit = exit;
        self.player = start;
        self.won = false;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.start_time = Some(self.clock.now());

        info!(
            episode = self.episode_id,
            size = self.grid.size(),
            %start,
            %exit,
            "new game started"
        );
    }

    /// Try to move the player by `(d_row, d_col)`.
    ///
    /// Returns false and leaves everything untouched if the target is out of
    /// bounds or a wall. A zero delta onto the current cell is accepted.
    pub fn move_player(&mut self, d_row: i32, d_col: i32) -> bool {
        let Some(target) = self.player.offset(d_row, d_col, self.grid.size()) else {
            return false;
        };
        let Some(cell) = self.grid.get(target) else {
            return false;
        };
        if cell == Cell::Wall {
            return false;
        }

        if target != self.player {
            self.moves = self.moves.wrapping_add(1);
        }
        self.player = target;

        if cell == Cell::Exit && !self.won {
            self.won = true;
            info!(
                episode = self.episode_id,
                moves = self.moves,
                secs = self.elapsed_seconds(),
                "maze solved"
            );
        }
        true
    }

    /// Move one step in `dir`
    pub fn move_in(&mut self, dir: Direction) -> bool {
        let (d_row, d_col) = dir.delta();
        self.move_player(d_row, d_col)
    }

    /// Apply a player action. `Menu` belongs to the presentation layer and is
    /// ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.move_in(dir),
            GameAction::NewGame => {
                self.start_new_game();
                true
            }
            GameAction::Menu => false,
        }
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn started(&self) -> bool {
        self.start_time.is_some()
    }

    pub fn phase(&self) -> GamePhase {
        match (self.started(), self.won) {
            (false, _) => GamePhase::NotStarted,
            (true, false) => GamePhase::Playing,
            (true, true) => GamePhase::Won,
        }
    }

    /// Whole seconds since the current game started, 0 before the first game.
    ///
    /// Keeps counting after a win until the next `start_new_game`.
    pub fn elapsed_seconds(&self) -> u64 {
        self.start_time.map_or(0, |t| {
            self.clock.now().saturating_duration_since(t).as_secs()
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn player_position(&self) -> Position {
        self.player
    }

    pub fn start_position(&self) -> Position {
        self.start
    }

    pub fn exit_position(&self) -> Position {
        self.exit
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn generator(&self) -> &MazeGenerator {
        &self.generator
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Directions the player can currently step in
    pub fn available_moves(&self) -> ArrayVec<Direction, 4> {
        if !self.started() {
            return ArrayVec::new();
        }
        self.grid.open_directions(self.player)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.grid.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.player = self.player;
        out.start = self.start;
        out.exit = self.exit;
        out.phase = self.phase();
        out.elapsed_secs = self.elapsed_seconds();
        out.episode_id = self.episode_id;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_player(&mut self, pos: Position) {
        self.player = pos;
    }
}
