//! TerminalRenderer: flushes glyph frames to a real terminal.
//!
//! Frames arrive through [`DisplaySink::present`], are laid out by
//! [`FrameView`] and then written as either a full redraw (first frame and
//! size changes) or a diff of changed runs against the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::DisplaySink;
use crate::view::{FrameView, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: FrameView,
    viewport: Viewport,
    next: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_view(FrameView::default())
    }

    pub fn with_view(view: FrameView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            viewport: Viewport::new(0, 0),
            next: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            release_events: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    ///
    /// Key release reporting is requested when the terminal supports it; see
    /// [`TerminalRenderer::release_events`].
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;

        let (w, h) = terminal::size()?;
        self.resize(w, h);
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.release_events {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Whether the terminal will report key release events.
    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track a terminal resize; the next draw is a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.invalidate();
    }

    /// Drop the diff base; the next draw repaints every cell.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush `fb` and keep it as the diff base for the next draw.
    ///
    /// On return `fb` holds the previous frame's buffer, ready to be
    /// overwritten, so steady-state drawing never allocates a new buffer.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev =
                    stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                std::mem::swap(&mut prev, fb);
                prev
            }
        };
        self.flush_buf()?;
        self.last = Some(prev);
        Ok(())
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

impl DisplaySink for TerminalRenderer {
    type Error = anyhow::Error;

    fn present(&mut self, glyphs: &[char], width: u16, height: u16) -> Result<()> {
        let mut next = std::mem::replace(&mut self.next, FrameBuffer::new(0, 0));
        self.view
            .render_into(glyphs, width, height, self.viewport, &mut next);
        let result = self.draw_swap(&mut next);
        self.next = next;
        result
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut writer = CellWriter::new(out);
    for y in 0..fb.height() {
        if y > 0 {
            writer.newline()?;
        }
        writer.cells(row(fb, y))?;
    }
    writer.finish()
}

/// Encode only the runs of cells that differ from `prev`.
///
/// A size mismatch rewrites every row in place.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut writer = CellWriter::new(out);
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    for y in 0..next.height() {
        let cells = row(next, y);
        if !same_size {
            writer.move_to(0, y)?;
            writer.cells(cells)?;
            continue;
        }
        for (start, end) in changed_runs(row(prev, y), cells) {
            writer.move_to(start as u16, y)?;
            writer.cells(&cells[start..end])?;
        }
    }
    writer.finish()
}

fn row(fb: &FrameBuffer, y: u16) -> &[Cell] {
    let w = fb.width() as usize;
    let start = y as usize * w;
    &fb.cells()[start..start + w]
}

/// Half-open `[start, end)` spans where two equal-length rows differ.
fn changed_runs<'a>(prev: &'a [Cell], next: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < next.len() && prev[x] == next[x] {
            x += 1;
        }
        if x >= next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && prev[x] != next[x] {
            x += 1;
        }
        Some((start, x))
    })
}

/// Queues cells, emitting style commands only when the style changes.
struct CellWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        self.out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn cells(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                self.apply_style(cell.style)?;
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.out
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?
            .queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
