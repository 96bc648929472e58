//! Render-side copy of the game state.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{Cell, GamePhase, Position};

/// Everything a view needs to draw one frame.
///
/// `cells` is row-major and `size * size` long. The player is not baked
/// into the cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameSnapshot {
    pub size: usize,
    pub cells: Vec<Cell>,
    pub player: Position,
    pub start: Position,
    pub exit: Position,
    pub phase: GamePhase,
    pub elapsed_secs: u64,
    pub episode_id: u32,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        self.cells.get(pos.index(self.size)).copied()
    }

    /// Text form with the player drawn as `@`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for (i, cell) in self.cells.iter().enumerate() {
            let pos = Position::new(i / self.size, i % self.size);
            out.push(if pos == self.player && self.phase != GamePhase::NotStarted {
                '@'
            } else {
                cell.as_char()
            });
            if pos.col + 1 == self.size {
                out.push('\n');
            }
        }
        out
    }
}
