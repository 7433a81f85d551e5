//! Shader - maps a column's ray hit to glyphs
//!
//! Each column splits into three bands: sky above the projected ceiling, a
//! wall strip between ceiling and floor, and floor below. The wall glyph comes
//! from a distance ladder; the floor glyph depends only on the row.
//!
//! | Wall distance | Glyph |
//! |---------------|-------|
//! | `<= depth/4` | `#` |
//! | `< depth/3` | `+` |
//! | `< depth/2` | `=` |
//! | `< depth` | `-` |
//! | otherwise | `.` |
//!
//! Edge hits render as a blank seam regardless of distance.

use crate::caster::RayHit;
use crate::types::MIN_WALL_DISTANCE;

/// Glyph used for sky rows and wall seams.
pub const BLANK: char = ' ';

/// Wall glyphs ordered from densest (nearest) to sparsest (farthest).
pub const WALL_LADDER: [char; 5] = ['#', '+', '=', '-', '.'];

/// Floor glyphs ordered from densest (nearest the viewer) to blank (horizon).
pub const FLOOR_LADDER: [char; 5] = ['#', '+', '=', '-', BLANK];

/// Wall glyph for a hit at `distance` with view depth `depth`.
pub fn wall_glyph(distance: f64, depth: f64) -> char {
    let tier = if distance <= depth / 4.0 {
        0
    } else if distance < depth / 3.0 {
        1
    } else if distance < depth / 2.0 {
        2
    } else if distance < depth {
        3
    } else {
        4
    };
    WALL_LADDER[tier]
}

/// Floor glyph for screen row `row`.
pub fn floor_glyph(row: u16, screen_height: u16) -> char {
    let half = screen_height as f64 / 2.0;
    let b = 1.0 - (row as f64 - half) / half;
    let tier = if b < 0.25 {
        0
    } else if b < 0.5 {
        1
    } else if b < 0.75 {
        2
    } else if b < 0.9 {
        3
    } else {
        4
    };
    FLOOR_LADDER[tier]
}

/// Projected band boundaries and wall glyph for one column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnShade {
    /// Last sky row (may be negative when the wall fills the column)
    pub ceiling: i64,
    /// Last wall row
    pub floor: i64,
    pub wall: char,
    screen_height: u16,
}

impl ColumnShade {
    pub fn new(hit: RayHit, screen_height: u16, depth: f64) -> Self {
        let h = screen_height as f64;
        let distance = hit.distance.max(MIN_WALL_DISTANCE);
        let ceiling = (h / 2.0 - h / distance) as i64;
        let floor = screen_height as i64 - ceiling;

        let wall = if hit.is_edge {
            BLANK
        } else {
            wall_glyph(hit.distance, depth)
        };

        Self {
            ceiling,
            floor,
            wall,
            screen_height,
        }
    }

    /// Glyph for screen row `row`.
    #[inline]
    pub fn glyph(&self, row: u16) -> char {
        let y = row as i64;
        if y <= self.ceiling {
            BLANK
        } else if y <= self.floor {
            self.wall
        } else {
            floor_glyph(row, self.screen_height)
        }
    }
}

/// Fill `out` (one glyph per row, top to bottom) for a column's ray hit.
///
/// `out.len()` is taken as the screen height.
pub fn shade_column(hit: RayHit, depth: f64, out: &mut [char]) {
    let screen_height = out.len().min(u16::MAX as usize) as u16;
    let shade = ColumnShade::new(hit, screen_height, depth);
    for (row, glyph) in out.iter_mut().enumerate() {
        *glyph = shade.glyph(row as u16);
    }
}
