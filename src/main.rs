//! Terminal maze runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_maze::term`. Logs go to a file because the terminal is busy.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tui_maze::app::{App, Control};
use tui_maze::config::{AppConfig, Args, OutputMode};
use tui_maze::term::{FrameBuffer, TerminalRenderer, Viewport};
use tui_maze::types::TICK_MS;

fn main() -> Result<()> {
    let config = Args::parse().into_config()?;

    if config.output != OutputMode::Interactive {
        print!("{}", tui_maze::print::render_maze(&config)?);
        if config.output == OutputMode::Json {
            println!();
        }
        return Ok(());
    }

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _guard = setup_logging(&config.log_dir)?;
    tracing::info!(
        size = config.size.get(),
        seed = config.seed,
        carve = config.carve.as_str(),
        auto_restart = config.auto_restart,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("exited with error: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::from_config(config);
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Poll with a timeout so the timer keeps ticking without input.
        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// File-only logging; anything on stderr would corrupt the alternate screen.
fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "tui-maze.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("log file: {}", log_dir.join("tui-maze.log").display());
    Ok(guard)
}
