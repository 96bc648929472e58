//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw. Later frames only emit runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame flushed to the terminal; `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw. Call on resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer and swap it with the previous frame.
    ///
    /// After the call `fb` holds the previous frame's buffer, ready to be
    /// re-rendered into without a fresh allocation.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if same_dims(&prev, fb) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;

    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        if y > 0 {
            pen.newline()?;
        }
        for x in 0..fb.width() {
            pen.draw(fb.get(x, y).unwrap_or_default())?;
        }
    }
    pen.finish()
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::new(out);
    for run in changed_runs(prev, next) {
        pen.move_to(run.x, run.y)?;
        for x in run.x..run.x + run.len {
            pen.draw(next.get(x, run.y).unwrap_or_default())?;
        }
    }
    pen.finish()
}

/// Writes cells to a command buffer, re-emitting style only when it changes.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        queue!(self.out, Print("\r\n"))?;
        Ok(())
    }

    fn draw(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            self.set_style(cell.style)?;
        }
        queue!(self.out, Print(cell.ch))?;
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(style.fg.into()),
            SetBackgroundColor(style.bg.into())
        )?;
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// A horizontal span of cells that differ between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

fn same_dims(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Every changed run, row by row. Frames of different size diff as whole rows.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> impl Iterator<Item = Run> + 'a {
    let width = next.width();
    let whole_rows = !same_dims(prev, next);

    (0..next.height()).flat_map(move |y| {
        let mut x = 0;
        std::iter::from_fn(move || {
            if whole_rows {
                if x == 0 && width > 0 {
                    x = width;
                    return Some(Run { x: 0, y, len: width });
                }
                return None;
            }
            while x < width && prev.get(x, y) == next.get(x, y) {
                x += 1;
            }
            if x == width {
                return None;
            }
            let start = x;
            while x < width && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            Some(Run {
                x: start,
                y,
                len: x - start,
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ch: char) -> Cell {
        CellStyle::default().into_cell(ch)
    }

    #[test]
    fn rgb_converts_to_crossterm_color() {
        let color: Color = Rgb::new(1, 2, 3).into();
        assert_eq!(color, Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn adjacent_changes_coalesce_into_one_run() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.set(x, 0, cell('X'));
        }
        b.set(5, 1, cell('@'));

        let runs: Vec<Run> = changed_runs(&a, &b).collect();
        assert_eq!(
            runs,
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 5, y: 1, len: 1 }]
        );
    }

    #[test]
    fn resized_frames_diff_as_whole_rows() {
        let a = FrameBuffer::new(2, 2);
        let b = FrameBuffer::new(3, 2);
        let runs: Vec<Run> = changed_runs(&a, &b).collect();
        assert_eq!(
            runs,
            vec![Run { x: 0, y: 0, len: 3 }, Run { x: 0, y: 1, len: 3 }]
        );
    }

    #[test]
    fn identical_frames_encode_only_the_reset() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();

        let mut reset_only = Vec::new();
        queue!(reset_only, ResetColor, SetAttribute(Attribute::Reset)).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "@#E", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("@#E"));
    }

    #[test]
    fn style_is_emitted_once_per_change() {
        let mut fb = FrameBuffer::new(4, 1);
        let bold = CellStyle::default().bold();
        fb.put_str(0, 0, "ab", CellStyle::default());
        fb.put_str(2, 0, "cd", bold);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let mut bold_seq = Vec::new();
        queue!(bold_seq, SetAttribute(Attribute::Bold)).unwrap();
        let hits = out.windows(bold_seq.len()).filter(|w| *w == bold_seq.as_slice()).count();
        assert_eq!(hits, 1);
    }
}
