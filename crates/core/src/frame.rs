//! Frame buffer - the flat glyph grid handed to the display sink
//!
//! Glyphs are stored row-major: `index = row * width + column`. Every render
//! overwrites all cells. [`RenderMode::Parallel`] casts all columns on the
//! rayon pool first, then shades rows in parallel, so each worker writes a
//! disjoint row slice and reads only the pose/grid snapshot taken at the
//! start of the frame.

use std::fmt::Write;

use arrayvec::ArrayString;
use rayon::prelude::*;

use crate::caster::{cast_ray, RayHit};
use crate::grid::TileGrid;
use crate::pose::PlayerPose;
use crate::shade::{shade_column, ColumnShade, BLANK};
use crate::types::FRAME_TERMINATOR;

/// How columns are distributed across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// One column at a time on the calling thread
    Serial,
    /// Columns cast and rows shaded on the rayon pool
    #[default]
    Parallel,
}

/// Fixed-capacity label for the frame-rate overlay.
pub type FpsLabel = ArrayString<40>;

/// Glyph frame plus the per-column scratch used to build it.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
    hits: Vec<RayHit>,
    shades: Vec<ColumnShade>,
    column: Vec<char>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let w = width as usize;
        let h = height as usize;
        Self {
            width,
            height,
            glyphs: vec![BLANK; w * h],
            hits: vec![RayHit::default(); w],
            shades: vec![ColumnShade::default(); w],
            column: vec![BLANK; h],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Ray results from the last render, one per column.
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }

    pub fn get(&self, column: u16, row: u16) -> Option<char> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.glyphs[row as usize * self.width as usize + column as usize])
    }

    pub fn row(&self, row: u16) -> &[char] {
        if row >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = row as usize * w;
        &self.glyphs[start..start + w]
    }

    /// Resize the frame.
    ///
    /// This preserves the underlying allocations when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let w = width as usize;
        let h = height as usize;
        self.glyphs.resize(w * h, BLANK);
        self.hits.resize(w, RayHit::default());
        self.shades.resize(w, ColumnShade::default());
        self.column.resize(h, BLANK);
    }

    /// Cast and shade every column.
    pub fn render(&mut self, pose: &PlayerPose, grid: &TileGrid, mode: RenderMode) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        match mode {
            RenderMode::Serial => self.render_serial(pose, grid),
            RenderMode::Parallel => self.render_parallel(pose, grid),
        }
    }

    fn render_serial(&mut self, pose: &PlayerPose, grid: &TileGrid) {
        let w = self.width as usize;
        for col in 0..self.width {
            let hit = cast_ray(col, self.width, pose, grid);
            self.hits[col as usize] = hit;
            shade_column(hit, pose.depth, &mut self.column);
            for (row, &glyph) in self.column.iter().enumerate() {
                self.glyphs[row * w + col as usize] = glyph;
            }
        }
    }

    fn render_parallel(&mut self, pose: &PlayerPose, grid: &TileGrid) {
        let snapshot = *pose;
        let width = self.width;
        let height = self.height;

        self.hits
            .par_iter_mut()
            .zip(self.shades.par_iter_mut())
            .enumerate()
            .for_each(|(col, (hit, shade))| {
                *hit = cast_ray(col as u16, width, &snapshot, grid);
                *shade = ColumnShade::new(*hit, height, snapshot.depth);
            });

        let shades = &self.shades;
        self.glyphs
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(row, line)| {
                for (glyph, shade) in line.iter_mut().zip(shades) {
                    *glyph = shade.glyph(row as u16);
                }
            });
    }

    /// Write `text` over the first cells of the buffer, clipped to its length.
    pub fn overlay_text(&mut self, text: &str) {
        for (cell, ch) in self.glyphs.iter_mut().zip(text.chars()) {
            *cell = ch;
        }
    }

    /// Overlay the frame rate for a frame that took `dt` seconds.
    pub fn overlay_fps(&mut self, dt: f64) {
        let label = fps_label(dt);
        self.overlay_text(&label);
    }

    /// Mark the final cell with the frame terminator.
    pub fn terminate(&mut self) {
        if let Some(last) = self.glyphs.last_mut() {
            *last = FRAME_TERMINATOR;
        }
    }
}

/// `"FPS=<rate> "` with two decimals.
pub fn fps_label(dt: f64) -> FpsLabel {
    let mut label = FpsLabel::new();
    if write!(label, "FPS={:3.2} ", 1.0 / dt).is_err() {
        label.clear();
        label.push_str("FPS=? ");
    }
    label
}
