//! `--print` output: one maze written to stdout, no terminal takeover.

use anyhow::Result;
use serde::Serialize;

use crate::config::{AppConfig, OutputMode};
use crate::core::{GameSnapshot, GameState, MazeGenerator, SimpleRng, SystemClock};

#[derive(Serialize)]
struct PrintedMaze<'a> {
    seed: u32,
    carve: &'static str,
    #[serde(flatten)]
    maze: &'a GameSnapshot,
}

/// Generate the first maze for `config` and format it.
///
/// Text mode draws the start as `@`. JSON mode emits the full snapshot
/// plus the seed and carve order.
pub fn render_maze(config: &AppConfig) -> Result<String> {
    let generator = MazeGenerator::new(config.size).with_carve_order(config.carve);
    let mut game = GameState::with_parts(generator, SimpleRng::new(config.seed), SystemClock);
    game.start_new_game();
    let snap = game.snapshot();

    match config.output {
        OutputMode::Json => {
            let printed = PrintedMaze {
                seed: config.seed,
                carve: config.carve.as_str(),
                maze: &snap,
            };
            Ok(serde_json::to_string_pretty(&printed)?)
        }
        OutputMode::Text | OutputMode::Interactive => Ok(snap.to_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MazeSize;

    fn config(output: OutputMode) -> AppConfig {
        AppConfig {
            size: MazeSize::new(9).unwrap(),
            seed: 4,
            output,
            ..AppConfig::default()
        }
    }

    #[test]
    fn text_output_is_square() {
        let text = render_maze(&config(OutputMode::Text)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| l.chars().count() == 9));
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('E').count(), 1);
    }

    #[test]
    fn json_output_carries_seed_and_cells() {
        let json = render_maze(&config(OutputMode::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["seed"], 4);
        assert_eq!(value["size"], 9);
        assert_eq!(value["carve"], "fixed");
        assert_eq!(value["phase"], "playing");
        assert_eq!(value["cells"].as_array().unwrap().len(), 81);
    }

    #[test]
    fn same_config_prints_same_maze() {
        let a = render_maze(&config(OutputMode::Text)).unwrap();
        let b = render_maze(&config(OutputMode::Text)).unwrap();
        assert_eq!(a, b);
    }
}
