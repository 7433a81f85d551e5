//! Core ray-casting logic - pure, deterministic, and testable
//!
//! This crate contains the whole rendering pipeline from player pose to glyph
//! frame. It has **no dependencies** on terminals, input devices, or I/O:
//!
//! - **Deterministic**: identical pose, grid and column always give the same ray hit
//! - **Testable**: every stage is a plain function over plain data
//! - **Parallel-safe**: columns are independent, so frames can be rendered on a thread pool
//!
//! # Module Structure
//!
//! - [`grid`]: immutable wall/empty tile grid and map text parsing
//! - [`pose`]: player position, heading and view parameters
//! - [`caster`]: per-column fixed-step ray marching with corner seam detection
//! - [`shade`]: distance-to-glyph ladders and ceiling/wall/floor banding
//! - [`motion`]: heading and position updates with predict-and-revert collision
//! - [`frame`]: the row-major glyph buffer and serial/parallel rendering
//!
//! # Example
//!
//! ```
//! use tui_raycaster_core::{Frame, PlayerPose, RenderMode, TileGrid};
//!
//! let grid = TileGrid::default_map();
//! let pose = PlayerPose::default();
//!
//! let mut frame = Frame::new(120, 40);
//! frame.render(&pose, &grid, RenderMode::Serial);
//! frame.overlay_fps(1.0 / 60.0);
//! frame.terminate();
//!
//! assert_eq!(frame.glyphs().len(), 120 * 40);
//! assert_eq!(frame.get(0, 0), Some('F'));
//! ```

pub mod caster;
pub mod frame;
pub mod grid;
pub mod motion;
pub mod pose;
pub mod shade;

pub use tui_raycaster_types as types;

// Re-export commonly used types for convenience
pub use caster::{cast_ray, cast_ray_at, ray_angle, RayHit};
pub use frame::{fps_label, Frame, RenderMode};
pub use grid::{MapError, TileGrid};
pub use motion::{apply_movement, apply_rotation, MoveOutcome};
pub use pose::PlayerPose;
pub use shade::{floor_glyph, shade_column, wall_glyph, ColumnShade};
