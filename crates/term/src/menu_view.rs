//! Main menu and instructions screens.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartGame,
    Instructions,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::StartGame, MenuItem::Instructions, MenuItem::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::StartGame => "Start Game",
            MenuItem::Instructions => "Instructions",
            MenuItem::Exit => "Exit",
        }
    }
}

pub const INSTRUCTIONS: [&str; 5] = [
    "Instructions",
    "",
    "Use the arrow keys to move the player (@) through the maze.",
    "Reach the green E block to win. A new maze starts right away.",
    "Press N for a fresh maze, Esc for the menu, Q to quit.",
];

const TITLE: CellStyle = CellStyle::new(Rgb::new(80, 220, 120), Rgb::new(0, 0, 0)).bold();
const ITEM: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const SELECTED: CellStyle = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(220, 220, 220)).bold();

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn render_menu_into(&self, selected: usize, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let rows = 2 + MenuItem::ALL.len() as u16 * 2;
        let mut y = viewport.height.saturating_sub(rows) / 2;
        centered(fb, viewport, y, "M A Z E", TITLE);
        y = y.saturating_add(2);

        let width = MenuItem::ALL
            .iter()
            .map(|item| item.label().len())
            .max()
            .unwrap_or(0) as u16
            + 4;
        let x = viewport.width.saturating_sub(width) / 2;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let style = if i == selected { SELECTED } else { ITEM };
            fb.fill_rect(x, y, width, 1, ' ', style);
            fb.put_str(x.saturating_add(2), y, item.label(), style);
            y = y.saturating_add(2);
        }
    }

    pub fn render_instructions_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let rows = INSTRUCTIONS.len() as u16 + 2;
        let mut y = viewport.height.saturating_sub(rows) / 2;
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            centered(fb, viewport, y, line, if i == 0 { TITLE } else { ITEM });
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);
        centered(fb, viewport, y, "press any key", ITEM.dim());
    }

    pub fn render_menu(&self, selected: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_menu_into(selected, viewport, &mut fb);
        fb
    }

    pub fn render_instructions(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_instructions_into(viewport, &mut fb);
        fb
    }
}

fn centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}
