//! Screen flow for the terminal front end.
//!
//! The app is the presentation-side collaborator of [`GameState`]: it decides
//! which screen is visible, turns key events into core calls and owns the
//! auto-restart policy. It performs no I/O, so the whole flow is testable
//! by feeding key events.

use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::core::{Clock, GameSnapshot, GameState, MazeGenerator, RandomSource, SimpleRng, SystemClock};
use crate::input::{handle_key_event, handle_menu_key, should_quit, MenuCommand};
use crate::term::{FrameBuffer, GameView, MenuItem, MenuView, SessionStatusView, Viewport};
use crate::types::GameAction;

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu { selected: usize },
    Instructions,
    Playing,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App<R = SimpleRng, C = SystemClock> {
    game: GameState<R, C>,
    screen: Screen,
    auto_restart: bool,
    session: SessionStatusView,
    snapshot: GameSnapshot,
    game_view: GameView,
    menu_view: MenuView,
}

impl App {
    pub fn from_config(config: &AppConfig) -> Self {
        let generator = MazeGenerator::new(config.size).with_carve_order(config.carve);
        let game = GameState::with_parts(generator, SimpleRng::new(config.seed), SystemClock);
        Self::new(game, config.auto_restart)
    }
}

impl<R: RandomSource, C: Clock> App<R, C> {
    pub fn new(game: GameState<R, C>, auto_restart: bool) -> Self {
        Self {
            game,
            screen: Screen::Menu { selected: 0 },
            auto_restart,
            session: SessionStatusView::default(),
            snapshot: GameSnapshot::default(),
            game_view: GameView::default(),
            menu_view: MenuView,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState<R, C> {
        &self.game
    }

    pub fn session(&self) -> &SessionStatusView {
        &self.session
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if should_quit(key) {
            info!("quit requested");
            return Control::Quit;
        }

        match self.screen {
            Screen::Menu { selected } => self.handle_menu(selected, handle_menu_key(key)),
            Screen::Instructions => {
                self.screen = Screen::Menu { selected: 1 };
                Control::Continue
            }
            Screen::Playing => {
                if let Some(action) = handle_key_event(key) {
                    self.apply(action);
                }
                Control::Continue
            }
        }
    }

    fn handle_menu(&mut self, selected: usize, command: Option<MenuCommand>) -> Control {
        let count = MenuItem::ALL.len();
        match command {
            Some(MenuCommand::Up) => {
                self.screen = Screen::Menu {
                    selected: (selected + count - 1) % count,
                };
            }
            Some(MenuCommand::Down) => {
                self.screen = Screen::Menu {
                    selected: (selected + 1) % count,
                };
            }
            Some(MenuCommand::Select) => match MenuItem::ALL[selected % count] {
                MenuItem::StartGame => {
                    self.game.start_new_game();
                    self.screen = Screen::Playing;
                }
                MenuItem::Instructions => self.screen = Screen::Instructions,
                MenuItem::Exit => return Control::Quit,
            },
            Some(MenuCommand::Back) | None => {}
        }
        Control::Continue
    }

    fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::Menu => {
                self.screen = Screen::Menu { selected: 0 };
            }
            GameAction::NewGame => self.game.start_new_game(),
            GameAction::Move(dir) => {
                let was_won = self.game.is_won();
                let moved = self.game.move_in(dir);
                debug!(?dir, moved, "move");
                if !was_won && self.game.is_won() {
                    self.record_solve();
                    if self.auto_restart {
                        self.game.start_new_game();
                    }
                }
            }
        }
    }

    fn record_solve(&mut self) {
        let secs = self.game.elapsed_seconds();
        self.session.solved = self.session.solved.saturating_add(1);
        self.session.last_solve_secs = Some(secs);
        self.session.best_solve_secs = Some(self.session.best_solve_secs.map_or(secs, |b| b.min(secs)));
    }

    /// Render the current screen into `fb`.
    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu { selected } => self.menu_view.render_menu_into(selected, viewport, fb),
            Screen::Instructions => self.menu_view.render_instructions_into(viewport, fb),
            Screen::Playing => {
                self.game.snapshot_into(&mut self.snapshot);
                self.game_view
                    .render_into(&self.snapshot, Some(&self.session), viewport, fb);
            }
        }
    }
}
