//! TUI ray caster (workspace facade crate).
//!
//! This package exposes `tui_raycaster::{core,engine,input,term,types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;
