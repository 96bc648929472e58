//! Command-line and environment configuration.
//!
//! Every flag can also be set through a `TUI_MAZE_*` environment variable.
//! Flags win over the environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::{CarveOrder, MazeSize};
use crate::types::DEFAULT_MAZE_SIZE;

/// Terminal maze game
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze side length
    #[arg(long, env = "TUI_MAZE_SIZE", default_value_t = DEFAULT_MAZE_SIZE)]
    pub size: usize,

    /// Random seed (random when omitted)
    #[arg(long, env = "TUI_MAZE_SEED")]
    pub seed: Option<u32>,

    /// Carve order: fixed or shuffled
    #[arg(long, env = "TUI_MAZE_CARVE", default_value = "fixed", value_parser = parse_carve_order)]
    pub carve: CarveOrder,

    /// Stay on a solved maze instead of starting the next one
    #[arg(long, env = "TUI_MAZE_NO_AUTO_RESTART")]
    pub no_auto_restart: bool,

    /// Directory for the log file
    #[arg(long, env = "TUI_MAZE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print one maze to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// With --print, emit JSON instead of text
    #[arg(long, requires = "print")]
    pub json: bool,
}

/// What the binary should do once configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Interactive,
    Text,
    Json,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub size: MazeSize,
    pub seed: u32,
    pub carve: CarveOrder,
    pub auto_restart: bool,
    pub log_dir: PathBuf,
    pub output: OutputMode,
}

impl Args {
    pub fn into_config(self) -> Result<AppConfig> {
        let size = MazeSize::new(self.size).context("invalid --size")?;
        let output = match (self.print, self.json) {
            (false, _) => OutputMode::Interactive,
            (true, false) => OutputMode::Text,
            (true, true) => OutputMode::Json,
        };
        Ok(AppConfig {
            size,
            seed: self.seed.unwrap_or_else(rand::random),
            carve: self.carve,
            auto_restart: !self.no_auto_restart,
            log_dir: self.log_dir.unwrap_or_else(default_log_dir),
            output,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: MazeSize::default(),
            seed: 1,
            carve: CarveOrder::Fixed,
            auto_restart: true,
            log_dir: default_log_dir(),
            output: OutputMode::Interactive,
        }
    }
}

fn parse_carve_order(s: &str) -> std::result::Result<CarveOrder, String> {
    CarveOrder::from_str(s).ok_or_else(|| format!("unknown carve order '{s}' (expected fixed or shuffled)"))
}

/// Platform cache directory, e.g. `~/.cache/tui-maze/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tui-maze")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("tui-maze").join("logs"))
}
