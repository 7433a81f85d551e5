//! FrameView: maps a glyph frame into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::FRAME_TERMINATOR;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Places the glyph frame inside the terminal and styles each glyph.
#[derive(Debug, Clone)]
pub struct FrameView {
    anchor_y: AnchorY,
    base: CellStyle,
}

impl Default for FrameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            base: CellStyle::default(),
        }
    }
}

impl FrameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Grey level follows the distance ladder: near walls are bright and
    /// bold, the farthest are dim.
    fn cell_for(&self, glyph: char) -> Cell {
        let style = match glyph {
            '#' => self.base.with_fg(Rgb::grey(250)).bold(),
            '+' => self.base.with_fg(Rgb::grey(205)),
            '=' => self.base.with_fg(Rgb::grey(165)),
            '-' => self.base.with_fg(Rgb::grey(125)),
            '.' => self.base.with_fg(Rgb::grey(90)).dim(),
            FRAME_TERMINATOR => return self.base.into_cell(' '),
            _ => self.base,
        };
        style.into_cell(glyph)
    }

    /// Render a row-major glyph frame into an existing framebuffer.
    ///
    /// The frame is centered horizontally (and vertically unless anchored to
    /// the top) and clipped when the viewport is smaller. The frame
    /// terminator renders as a blank.
    pub fn render_into(
        &self,
        glyphs: &[char],
        width: u16,
        height: u16,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.base.into_cell(' '));

        if width == 0 {
            return;
        }

        let start_x = viewport.width.saturating_sub(width) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };

        for (y, row) in glyphs.chunks(width as usize).take(height as usize).enumerate() {
            let ty = start_y.saturating_add(y as u16);
            if ty >= viewport.height {
                break;
            }
            fb.blit_row(start_x, ty, row, |glyph| self.cell_for(glyph));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, glyphs: &[char], width: u16, height: u16, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(glyphs, width, height, viewport, &mut fb);
        fb
    }
}
