//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. Views render into a plain
//! framebuffer; the renderer diffs framebuffers and flushes the changed runs
//! through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so they can be asserted on cell by cell
//! - Allow precise control over aspect ratio (2 chars wide per maze cell)

pub mod fb;
pub mod game_view;
pub mod menu_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, SessionStatusView, Viewport};
pub use menu_view::{MenuItem, MenuView, INSTRUCTIONS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
