//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (ray casting, terminal output, input handling).
//!
//! # Default Dimensions
//!
//! - **Screen**: 120 columns by 40 rows of glyphs
//! - **Map**: 16x16 tiles
//!
//! # Ray Marching Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RAY_STEP` | 0.05 | Fixed marching increment in grid units |
//! | `EDGE_THRESHOLD` | 0.01 | Corner angle (radians) below which a hit is a seam |
//! | `ROTATION_FACTOR` | 0.75 | Turn rate as a fraction of movement speed |
//! | `MIN_WALL_DISTANCE` | 0.05 | Distance clamp for the ceiling/floor projection |
//!
//! # Examples
//!
//! ```
//! use tui_raycaster_types::{Action, Tile};
//!
//! assert_eq!(Tile::from_char('#'), Tile::Wall);
//! assert_eq!(Tile::from_char('.'), Tile::Empty);
//!
//! let action = Action::from_str("moveForward").unwrap();
//! assert_eq!(action, Action::MoveForward);
//! assert_eq!(action.as_str(), "moveForward");
//! ```

/// Screen width in glyph columns (120).
pub const DEFAULT_SCREEN_WIDTH: u16 = 120;

/// Screen height in glyph rows (40).
pub const DEFAULT_SCREEN_HEIGHT: u16 = 40;

/// Built-in map width in tiles.
pub const DEFAULT_MAP_WIDTH: usize = 16;

/// Built-in map height in tiles.
pub const DEFAULT_MAP_HEIGHT: usize = 16;

/// Fixed ray marching increment, in grid units.
pub const RAY_STEP: f64 = 0.05;

/// Angle (radians) between the ray and a corner below which the hit renders as a seam.
pub const EDGE_THRESHOLD: f64 = 0.01;

/// Turn rate relative to movement speed.
pub const ROTATION_FACTOR: f64 = 0.75;

/// Smallest distance used when projecting wall height.
///
/// The marcher never reports a wall hit closer than one step, so clamping to
/// the same value keeps the projection finite without changing real hits.
pub const MIN_WALL_DISTANCE: f64 = RAY_STEP;

/// Map character that denotes a wall.
pub const WALL_CHAR: char = '#';

/// Sentinel written to the last cell of a completed frame.
pub const FRAME_TERMINATOR: char = '\0';

/// Default player start X (grid units).
pub const DEFAULT_START_X: f64 = 14.7;

/// Default player start Y (grid units).
pub const DEFAULT_START_Y: f64 = 5.09;

/// Default heading (radians). Zero faces along +Y.
pub const DEFAULT_THETA: f64 = 0.0;

/// Default field of view (radians, a quarter turn of pi).
pub const DEFAULT_FOV: f64 = std::f64::consts::FRAC_PI_4;

/// Default maximum ray travel distance (grid units).
pub const DEFAULT_DEPTH: f64 = 16.0;

/// Default movement speed (cells per second).
pub const DEFAULT_SPEED: f64 = 5.0;


/// A single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
}

impl Tile {
    /// Map loader convention: `'#'` is a wall, every other character is empty.
    pub fn from_char(ch: char) -> Self {
        if ch == WALL_CHAR {
            Tile::Wall
        } else {
            Tile::Empty
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Tile::Wall => WALL_CHAR,
            Tile::Empty => '.',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Logical player actions polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Turn heading counter-clockwise (decreasing theta)
    RotateLeft,
    /// Turn heading clockwise (increasing theta)
    RotateRight,
    /// Step along the heading
    MoveForward,
    /// Step against the heading
    MoveBackward,
}

impl Action {
    /// Every action, in a fixed order.
    pub const ALL: [Action; 4] = [
        Action::RotateLeft,
        Action::RotateRight,
        Action::MoveForward,
        Action::MoveBackward,
    ];

    /// Parse an action name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycaster_types::Action;
    ///
    /// assert_eq!(Action::from_str("rotateLeft"), Some(Action::RotateLeft));
    /// assert_eq!(Action::from_str("movebackward"), Some(Action::MoveBackward));
    /// assert_eq!(Action::from_str("strafe"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotateleft" => Some(Action::RotateLeft),
            "rotateright" => Some(Action::RotateRight),
            "moveforward" => Some(Action::MoveForward),
            "movebackward" => Some(Action::MoveBackward),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::RotateLeft => "rotateLeft",
            Action::RotateRight => "rotateRight",
            Action::MoveForward => "moveForward",
            Action::MoveBackward => "moveBackward",
        }
    }
}

/// Source of instantaneous pressed/released state for each [`Action`].
pub trait InputProvider {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Fixed input state, mostly useful for tests and scripted runs.
impl InputProvider for [Action] {
    fn is_pressed(&self, action: Action) -> bool {
        self.contains(&action)
    }
}

/// No keys held.
impl InputProvider for () {
    fn is_pressed(&self, _action: Action) -> bool {
        false
    }
}

/// Receives a completed glyph frame and presents it.
///
/// `glyphs` is row-major with `glyphs.len() == width * height`; the final
/// cell holds [`FRAME_TERMINATOR`].
pub trait DisplaySink {
    type Error;

    fn present(&mut self, glyphs: &[char], width: u16, height: u16) -> Result<(), Self::Error>;
}
