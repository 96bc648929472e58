//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains maze generation, player movement and the game
//! lifecycle. It has **no dependencies** on terminals or input devices:
//!
//! - **Deterministic**: Same seed produces the same sequence of mazes
//! - **Injectable**: Randomness comes from a [`RandomSource`], time from a [`Clock`]
//! - **Testable**: Every rule is covered by unit tests
//!
//! # Module Structure
//!
//! - [`grid`]: N x N cell storage and the validated [`MazeSize`]
//! - [`generator`]: depth-first carving that yields a perfect maze and an exit
//! - [`game_state`]: player position, win flag, timer, restarts
//! - [`rng`]: LCG random source
//! - [`clock`]: system and manual clocks
//! - [`snapshot`]: plain data handed to renderers
//!
//! # Example
//!
//! ```
//! use tui_maze_core::GameState;
//! use tui_maze_types::{Direction, GamePhase};
//!
//! let mut game = GameState::new(15, 12345).unwrap();
//! assert_eq!(game.phase(), GamePhase::NotStarted);
//!
//! game.start_new_game();
//! assert_eq!(game.player_position(), game.start_position());
//!
//! // Every direction is either a legal step or leaves the player in place.
//! for dir in Direction::ALL {
//!     let before = game.player_position();
//!     if !game.move_in(dir) {
//!         assert_eq!(game.player_position(), before);
//!     }
//! }
//! assert!(game.elapsed_seconds() < 5);
//! ```

pub mod clock;
pub mod error;
pub mod game_state;
pub mod generator;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::MazeError;
pub use game_state::GameState;
pub use generator::{generate, CarveOrder, Maze, MazeGenerator, FIXED_CARVE_ORDER};
pub use grid::{Grid, MazeSize};
pub use rng::{RandomSource, SimpleRng};
pub use snapshot::GameSnapshot;
