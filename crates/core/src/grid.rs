//! Tile grid - the immutable wall/empty map the rays march through
//!
//! Storage is a flat vector in row-major order: `index = y * width + x`, where
//! `y` is the map text line and `x` the character within that line. Ray hit
//! testing and movement collision both go through [`TileGrid::tile_at_point`],
//! which floors real coordinates, so the two always agree on which cell a
//! point occupies.

use thiserror::Error;

use crate::types::{Tile, DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};

/// Errors raised while building a grid from map input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error(
        "invalid map dimensions: expected {expected_width}x{expected_height}, found {found_width}x{found_height}"
    )]
    InvalidMapDimensions {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },
    #[error("map row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map is empty")]
    Empty,
}

const BUILTIN_MAP: &str = "\
################
#..............#
#.......########
#..............#
#......##......#
#......##......#
#..............#
###............#
##.............#
#......####..###
#......#.......#
#......#.......#
#..............#
#......#########
#..............#
################
";

/// Fixed-size 2D grid of wall/empty tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<Tile>,
}

impl TileGrid {
    /// Build a grid from row-major cells.
    pub fn new(width: usize, height: usize, cells: Vec<Tile>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        if cells.len() != width * height {
            return Err(MapError::InvalidMapDimensions {
                expected_width: width,
                expected_height: height,
                found_width: cells.len() / height,
                found_height: height,
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid of the given size with no walls.
    pub fn open(width: usize, height: usize) -> Result<Self, MapError> {
        Self::new(width, height, vec![Tile::Empty; width * height])
    }

    /// Parse map text with known dimensions.
    ///
    /// Extra lines and characters past `width` are ignored; anything smaller
    /// than `width` x `height` is rejected instead of being read past its end.
    pub fn parse(text: &str, width: usize, height: usize) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }

        let lines = map_lines(text);
        let found_width = lines
            .iter()
            .take(height)
            .map(|line| line.chars().count())
            .min()
            .unwrap_or(0);
        if lines.len() < height || found_width < width {
            return Err(MapError::InvalidMapDimensions {
                expected_width: width,
                expected_height: height,
                found_width,
                found_height: lines.len(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for line in lines.iter().take(height) {
            cells.extend(line.chars().take(width).map(Tile::from_char));
        }
        Self::new(width, height, cells)
    }

    /// Parse map text, deriving dimensions from the first line and the line count.
    pub fn from_text(text: &str) -> Result<Self, MapError> {
        let lines = map_lines(text);
        let width = match lines.first() {
            Some(first) => first.chars().count(),
            None => return Err(MapError::Empty),
        };

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Self::parse(text, width, lines.len())
    }

    /// The built-in 16x16 map.
    pub fn default_map() -> Self {
        let cells = BUILTIN_MAP
            .lines()
            .flat_map(|line| line.chars().map(Tile::from_char))
            .collect();
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Tile at integer cell coordinates, `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Option<Tile> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Integer cell containing a real-valued point.
    #[inline]
    pub fn cell_of(x: f64, y: f64) -> (i64, i64) {
        (x.floor() as i64, y.floor() as i64)
    }

    /// Tile under a real-valued point, `None` outside the grid.
    #[inline]
    pub fn tile_at_point(&self, x: f64, y: f64) -> Option<Tile> {
        let (cx, cy) = Self::cell_of(x, y);
        self.get(cx, cy)
    }

    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        matches!(self.get(x, y), Some(Tile::Wall))
    }

    /// Whether a point can not be occupied: inside a wall or off the grid.
    pub fn blocks_point(&self, x: f64, y: f64) -> bool {
        !matches!(self.tile_at_point(x, y), Some(Tile::Empty))
    }

    /// Render back to map text (`'#'` walls, `'.'` floor).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter().map(Tile::as_char));
            out.push('\n');
        }
        out
    }
}

fn map_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}
