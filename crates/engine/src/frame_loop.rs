//! Frame loop: input -> motion -> per-column ray casting -> display sink.
//!
//! The loop owns the tile grid, the player pose and the frame buffer, and
//! threads them explicitly through the motion controller, ray caster and
//! shader. Each [`FrameLoop::tick`] fully overwrites the frame before it is
//! handed to a [`DisplaySink`].

use log::{debug, trace};

use crate::clock::FrameStats;
use crate::config::{ConfigError, EngineConfig};
use crate::core::{apply_movement, apply_rotation, Frame, PlayerPose, RenderMode, TileGrid};
use crate::types::{Action, DisplaySink, InputProvider};

pub struct FrameLoop {
    grid: TileGrid,
    pose: PlayerPose,
    frame: Frame,
    mode: RenderMode,
    show_fps: bool,
    frames: u64,
    stats: FrameStats,
}

impl FrameLoop {
    /// Fails when the start position is not an open cell.
    pub fn new(
        grid: TileGrid,
        pose: PlayerPose,
        width: u16,
        height: u16,
    ) -> Result<Self, ConfigError> {
        if grid.blocks_point(pose.x, pose.y) {
            return Err(ConfigError::BlockedStart {
                x: pose.x,
                y: pose.y,
            });
        }
        Ok(Self {
            grid,
            pose,
            frame: Frame::new(width, height),
            mode: RenderMode::default(),
            show_fps: true,
            frames: 0,
            stats: FrameStats::default(),
        })
    }

    pub fn from_config(config: &EngineConfig, grid: TileGrid) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(grid, config.pose, config.screen_width, config.screen_height)?
            .with_mode(config.render_mode)
            .with_fps_overlay(config.show_fps))
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_fps_overlay(mut self, show_fps: bool) -> Self {
        self.show_fps = show_fps;
        self
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn pose(&self) -> &PlayerPose {
        &self.pose
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.frame.resize(width, height);
    }

    /// Advance one frame of `dt` seconds with the given input state.
    pub fn tick<I: InputProvider + ?Sized>(&mut self, dt: f64, input: &I) -> &Frame {
        apply_rotation(
            &mut self.pose,
            input.is_pressed(Action::RotateLeft),
            input.is_pressed(Action::RotateRight),
            dt,
        );
        let outcome = apply_movement(
            &mut self.pose,
            input.is_pressed(Action::MoveForward),
            input.is_pressed(Action::MoveBackward),
            dt,
            &self.grid,
        );
        if outcome.blocked {
            trace!("move blocked at ({:.2}, {:.2})", self.pose.x, self.pose.y);
        }

        self.frame.render(&self.pose, &self.grid, self.mode);
        if self.show_fps {
            self.frame.overlay_fps(dt);
        }
        self.frame.terminate();

        self.frames += 1;
        if let Some(fps) = self.stats.record(dt) {
            debug!(
                "{:.1} fps, pose ({:.2}, {:.2}) theta {:.2}",
                fps, self.pose.x, self.pose.y, self.pose.theta
            );
        }
        &self.frame
    }

    /// Hand the completed frame to a display sink.
    pub fn present<S: DisplaySink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.present(self.frame.glyphs(), self.frame.width(), self.frame.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FRAME_TERMINATOR;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(Vec<char>, u16, u16)>,
    }

    impl DisplaySink for RecordingSink {
        type Error = std::convert::Infallible;

        fn present(&mut self, glyphs: &[char], width: u16, height: u16) -> Result<(), Self::Error> {
            self.frames.push((glyphs.to_vec(), width, height));
            Ok(())
        }
    }

    #[test]
    fn blocked_start_is_rejected() {
        let grid = TileGrid::from_text("###\n#.#\n###\n").unwrap();
        assert!(FrameLoop::new(grid.clone(), PlayerPose::at(0.5, 0.5, 0.0), 8, 4).is_err());
        assert!(FrameLoop::new(grid, PlayerPose::at(1.5, 1.5, 0.0), 8, 4).is_ok());
    }

    #[test]
    fn tick_fills_terminates_and_presents() {
        let mut fl = FrameLoop::new(TileGrid::default_map(), PlayerPose::default(), 40, 12)
            .unwrap()
            .with_mode(RenderMode::Serial);
        fl.tick(0.5, &());

        let mut sink = RecordingSink::default();
        fl.present(&mut sink).unwrap();

        let (glyphs, w, h) = &sink.frames[0];
        assert_eq!((*w, *h), (40, 12));
        assert_eq!(glyphs.len(), 480);
        assert_eq!(glyphs.last(), Some(&FRAME_TERMINATOR));
        assert_eq!(&glyphs[..9], &['F', 'P', 'S', '=', '2', '.', '0', '0', ' ']);
        assert_eq!(fl.frames(), 1);
    }

    #[test]
    fn fps_overlay_can_be_disabled() {
        let mut fl = FrameLoop::new(TileGrid::default_map(), PlayerPose::default(), 40, 12)
            .unwrap()
            .with_fps_overlay(false);
        let frame = fl.tick(0.5, &());
        assert_ne!(frame.get(0, 0), Some('F'));
    }

    #[test]
    fn input_drives_pose() {
        let grid = TileGrid::open(8, 8).unwrap();
        let mut fl = FrameLoop::new(grid, PlayerPose::at(4.5, 2.5, 0.0).with_speed(2.0), 20, 10)
            .unwrap();

        fl.tick(0.5, &[Action::MoveForward][..]);
        assert!((fl.pose().y - 3.5).abs() < 1e-9);

        fl.tick(0.5, &[Action::RotateRight][..]);
        assert!((fl.pose().theta - 0.75).abs() < 1e-9);
    }
}
