//! Terminal display sink.
//!
//! This is a small, game-oriented rendering layer for terminal output.
//! It intentionally avoids widget/layout libraries and instead renders the
//! glyph frame into a simple framebuffer that is flushed to the terminal as a
//! diff against the previous frame.
//!
//! Goals:
//! - Keep the ray-casting core free of terminal concerns
//! - Present any row-major glyph frame through [`crate::types::DisplaySink`]
//! - Keep steady-state frames cheap (only changed runs are written)

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{AnchorY, FrameView, Viewport};
