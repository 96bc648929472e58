//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] while playing and
//! into [`MenuCommand`] on menu screens.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, handle_menu_key, should_quit, MenuCommand};
