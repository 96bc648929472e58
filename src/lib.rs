//! TUI Maze (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_maze::{core,input,term,types}` and
//! adds the pieces that glue them into a binary: configuration, the screen
//! flow and `--print` output.

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;

pub mod app;
pub mod config;
pub mod print;
