//! Error types raised by the maze core.

use thiserror::Error;

/// Errors surfaced when constructing a maze or a game.
///
/// Moves never fail with an error; a rejected move is reported as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze size {size} is too small (minimum is {min})")]
    SizeTooSmall { size: usize, min: usize },

    #[error("maze size {size} is too large (maximum is {max})")]
    SizeTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
