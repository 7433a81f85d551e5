//! Frame loop orchestration.
//!
//! Glues the pure ray-casting core to whatever provides input and presents
//! frames. The binary drives it from a terminal; tests drive it with fixed
//! input and recording sinks.
//!
//! - [`frame_loop`]: owns grid, pose and frame; one `tick` per frame
//! - [`clock`]: elapsed-time measurement, optional frame cap, fps stats
//! - [`config`]: environment-driven settings and map loading

pub mod clock;
pub mod config;
pub mod frame_loop;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use clock::{FrameClock, FramePacer, FrameStats};
pub use config::{ConfigError, EngineConfig};
pub use frame_loop::FrameLoop;
