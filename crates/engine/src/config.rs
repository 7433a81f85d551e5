//! Runtime configuration from environment variables.
//!
//! Every setting has a default; unset or unparsable variables fall back to it.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RAYCASTER_MAP` | built-in 16x16 map |
//! | `RAYCASTER_MAP_WIDTH` / `RAYCASTER_MAP_HEIGHT` | derived from the map text |
//! | `RAYCASTER_SCREEN_WIDTH` / `RAYCASTER_SCREEN_HEIGHT` | 120 / 40 |
//! | `RAYCASTER_START_X` / `RAYCASTER_START_Y` / `RAYCASTER_START_THETA` | 14.7 / 5.09 / 0 |
//! | `RAYCASTER_FOV_DEG` | 45 |
//! | `RAYCASTER_DEPTH` | 16 |
//! | `RAYCASTER_SPEED` | 5 |
//! | `RAYCASTER_PARALLEL` | true |
//! | `RAYCASTER_SHOW_FPS` | true |
//! | `RAYCASTER_MAX_FPS` | 0 (uncapped) |
//! | `RAYCASTER_KEY_RELEASE_MS` | 200 (0 disables the timeout) |
//! | `RAYCASTER_LOG_PATH` | none (logging off) |

use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::{PlayerPose, RenderMode, TileGrid};
use crate::types::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen dimensions must be non-zero, got {width}x{height}")]
    InvalidScreen { width: u16, height: u16 },
    #[error("view depth must be positive, got {0}")]
    InvalidDepth(f64),
    #[error("movement speed must be positive, got {0}")]
    InvalidSpeed(f64),
    #[error("field of view must be within (0, pi) radians, got {0}")]
    InvalidFov(f64),
    #[error("start position ({x}, {y}) is inside a wall or outside the map")]
    BlockedStart { x: f64, y: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub map_path: Option<PathBuf>,
    /// Fixed map dimensions; derived from the map text when `None`.
    pub map_size: Option<(usize, usize)>,
    pub screen_width: u16,
    pub screen_height: u16,
    pub pose: PlayerPose,
    pub render_mode: RenderMode,
    pub show_fps: bool,
    /// Frame cap; 0 renders as fast as possible.
    pub max_fps: u32,
    /// Key auto-release timeout; `None` relies on release events.
    pub key_release_ms: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            map_path: None,
            map_size: None,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            pose: PlayerPose::default(),
            render_mode: RenderMode::Parallel,
            show_fps: true,
            max_fps: 0,
            key_release_ms: Some(200),
            log_path: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment-shaped).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parse = |key: &str| lookup(key).map(|s| s.trim().to_string());
        let path = |key: &str| {
            parse(key)
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
                .map(PathBuf::from)
        };
        let num = |key: &str| parse(key).and_then(|s| s.parse::<f64>().ok());
        let flag = |key: &str, default: bool| {
            parse(key)
                .map(|v| match v.to_lowercase().as_str() {
                    "1" | "true" | "yes" | "on" => true,
                    "0" | "false" | "no" | "off" => false,
                    _ => default,
                })
                .unwrap_or(default)
        };

        let map_size = match (
            parse("RAYCASTER_MAP_WIDTH").and_then(|s| s.parse::<usize>().ok()),
            parse("RAYCASTER_MAP_HEIGHT").and_then(|s| s.parse::<usize>().ok()),
        ) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        };

        let mut pose = defaults.pose;
        if let Some(x) = num("RAYCASTER_START_X") {
            pose.x = x;
        }
        if let Some(y) = num("RAYCASTER_START_Y") {
            pose.y = y;
        }
        if let Some(theta) = num("RAYCASTER_START_THETA") {
            pose.theta = theta;
        }
        if let Some(fov) = num("RAYCASTER_FOV_DEG") {
            pose.fov = fov.to_radians();
        }
        if let Some(depth) = num("RAYCASTER_DEPTH") {
            pose.depth = depth;
        }
        if let Some(speed) = num("RAYCASTER_SPEED") {
            pose.speed = speed;
        }

        let render_mode = if flag("RAYCASTER_PARALLEL", true) {
            RenderMode::Parallel
        } else {
            RenderMode::Serial
        };

        let key_release_ms = match parse("RAYCASTER_KEY_RELEASE_MS").and_then(|s| s.parse::<u64>().ok()) {
            Some(0) => None,
            Some(ms) => Some(ms),
            None => defaults.key_release_ms,
        };

        Self {
            map_path: path("RAYCASTER_MAP"),
            map_size,
            screen_width: parse("RAYCASTER_SCREEN_WIDTH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.screen_width),
            screen_height: parse("RAYCASTER_SCREEN_HEIGHT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.screen_height),
            pose,
            render_mode,
            show_fps: flag("RAYCASTER_SHOW_FPS", defaults.show_fps),
            max_fps: parse("RAYCASTER_MAX_FPS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_fps),
            key_release_ms,
            log_path: path("RAYCASTER_LOG_PATH"),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.pose.depth > 0.0) {
            return Err(ConfigError::InvalidDepth(self.pose.depth));
        }
        if !(self.pose.speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.pose.speed));
        }
        if !(self.pose.fov > 0.0 && self.pose.fov < std::f64::consts::PI) {
            return Err(ConfigError::InvalidFov(self.pose.fov));
        }
        Ok(())
    }

    /// Load the configured map, or the built-in one when no path is set.
    pub fn load_grid(&self) -> Result<TileGrid> {
        let Some(path) = &self.map_path else {
            return Ok(TileGrid::default_map());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading map {}", path.display()))?;
        let grid = match self.map_size {
            Some((w, h)) => TileGrid::parse(&text, w, h),
            None => TileGrid::from_text(&text),
        }
        .with_context(|| format!("parsing map {}", path.display()))?;
        Ok(grid)
    }
}
