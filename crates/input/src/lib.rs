//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Action`] and tracks which
//! actions are held, implementing [`crate::types::InputProvider`] for the frame
//! loop (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use tui_raycaster_types as types;

pub use handler::KeyState;
pub use map::{action_for_key, handle_key_event, should_quit};
