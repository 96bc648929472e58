//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GamePhase, Position};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session counters shown next to the maze. Owned by the app, not the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStatusView {
    pub solved: u32,
    pub last_solve_secs: Option<u64>,
    pub best_solve_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const WALL: CellStyle = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(0, 0, 0));
const PATH: CellStyle = CellStyle::new(Rgb::new(40, 40, 40), Rgb::new(235, 235, 235));
const EXIT: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 170, 60)).bold();
const PLAYER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(210, 40, 40)).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Renders the maze, the player and a side panel.
pub struct GameView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered maze frame for a maze of `size`.
    pub fn frame_size(&self, size: usize) -> (u16, u16) {
        let size = size.min(u16::MAX as usize) as u16;
        (
            size.saturating_mul(self.cell_w).saturating_add(2),
            size.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport as needed.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        session: Option<&SessionStatusView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.size {
            for col in 0..snap.size {
                let pos = Position::new(row, col);
                let cell = snap.cell(pos).unwrap_or(Cell::Wall);
                self.draw_maze_cell(fb, start_x, start_y, pos, cell);
            }
        }

        if snap.phase != GamePhase::NotStarted {
            self.fill_cell(fb, start_x, start_y, snap.player, '@', PLAYER);
        }

        self.draw_side_panel(fb, snap, session, viewport, start_x, start_y, frame_w);

        match snap.phase {
            GamePhase::NotStarted => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS N")
            }
            GamePhase::Won => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "SOLVED!")
            }
            GamePhase::Playing => {}
        }

        let hint = "arrows move  n new  esc menu  q quit";
        let hint_y = start_y.saturating_add(frame_h);
        if hint_y < viewport.height && (hint.len() as u16) <= viewport.width {
            let x = viewport.width.saturating_sub(hint.len() as u16) / 2;
            fb.put_str(x, hint_y, hint, VALUE.dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        session: Option<&SessionStatusView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(right, y, '┐', BORDER);
        fb.put_char(x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', BORDER);
            fb.put_char(x.saturating_add(dx), bottom, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', BORDER);
            fb.put_char(right, y.saturating_add(dy), '│', BORDER);
        }
    }

    fn draw_maze_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, pos: Position, cell: Cell) {
        match cell {
            Cell::Wall => self.fill_cell(fb, start_x, start_y, pos, ' ', WALL),
            Cell::Path => self.fill_cell(fb, start_x, start_y, pos, ' ', PATH),
            Cell::Exit => self.fill_cell(fb, start_x, start_y, pos, 'E', EXIT),
        }
    }

    /// Paint one maze cell. `glyph` goes in the top-left column, the rest is blank.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Position,
        glyph: char,
        style: CellStyle,
    ) {
        let px = (start_x as usize + 1 + pos.col * self.cell_w as usize).min(u16::MAX as usize) as u16;
        let py = (start_y as usize + 1 + pos.row * self.cell_h as usize).min(u16::MAX as usize) as u16;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, glyph, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        session: Option<&SessionStatusView>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "TIME", LABEL);
        y = y.saturating_add(1);
        let end = fb.put_u64(panel_x, y, snap.elapsed_secs, VALUE);
        fb.put_char(end, y, 's', VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MAZE", LABEL);
        y = y.saturating_add(1);
        fb.put_char(panel_x, y, '#', VALUE);
        fb.put_u32(panel_x.saturating_add(1), y, snap.episode_id, VALUE);
        y = y.saturating_add(2);

        let Some(st) = session else {
            return;
        };

        fb.put_str(panel_x, y, "SOLVED", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, st.solved, VALUE);
        y = y.saturating_add(2);

        for (label, secs) in [("LAST", st.last_solve_secs), ("BEST", st.best_solve_secs)] {
            fb.put_str(panel_x, y, label, LABEL);
            y = y.saturating_add(1);
            match secs {
                Some(s) => {
                    let end = fb.put_u64(panel_x, y, s, VALUE);
                    fb.put_char(end, y, 's', VALUE);
                }
                None => {
                    fb.put_char(panel_x, y, '-', VALUE);
                }
            }
            y = y.saturating_add(2);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> GameSnapshot {
        GameSnapshot {
            size: 3,
            // Top row open, exit in the corner.
            cells: [Cell::Path, Cell::Path, Cell::Exit]
                .into_iter()
                .chain([Cell::Wall; 6])
                .collect(),
            player: Position::new(0, 0),
            phase: GamePhase::Playing,
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn frame_size_includes_border() {
        assert_eq!(GameView::default().frame_size(15), (32, 17));
        assert_eq!(GameView::new(1, 1).frame_size(3), (5, 5));
    }

    #[test]
    fn player_and_exit_glyphs_land_in_cells() {
        let view = GameView::default();
        let fb = view.render(&snap(), None, Viewport::new(8, 5));
        // Frame is 8x5, so it starts at the origin.
        assert_eq!(fb.get(1, 1).unwrap().ch, '@');
        assert_eq!(fb.get(1, 1).unwrap().style, PLAYER);
        assert_eq!(fb.get(5, 1).unwrap().ch, 'E');
        assert_eq!(fb.get(1, 2).unwrap().style, WALL);
    }

    #[test]
    fn not_started_hides_player() {
        let mut s = snap();
        s.phase = GamePhase::NotStarted;
        let fb = GameView::default().render(&s, None, Viewport::new(8, 5));
        assert_ne!(fb.get(1, 1).unwrap().ch, '@');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let _ = view.render(&snap(), None, Viewport::new(1, 1));
        let _ = view.render(&snap(), None, Viewport::new(0, 0));
    }
}
