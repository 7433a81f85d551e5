use std::convert::Infallible;

use tui_raycaster::core::{PlayerPose, RenderMode, TileGrid};
use tui_raycaster::engine::{EngineConfig, FrameLoop};
use tui_raycaster::types::{Action, DisplaySink, FRAME_TERMINATOR};

#[derive(Default)]
struct CountingSink {
    presented: usize,
    last_len: usize,
}

impl DisplaySink for CountingSink {
    type Error = Infallible;

    fn present(&mut self, glyphs: &[char], width: u16, height: u16) -> Result<(), Self::Error> {
        assert_eq!(glyphs.len(), width as usize * height as usize);
        assert_eq!(glyphs.last(), Some(&FRAME_TERMINATOR));
        self.presented += 1;
        self.last_len = glyphs.len();
        Ok(())
    }
}

#[test]
fn engine_scripted_walk_never_enters_a_wall() {
    let grid = TileGrid::default_map();
    let mut frame_loop = FrameLoop::new(grid.clone(), PlayerPose::default(), 60, 20).unwrap();
    let mut sink = CountingSink::default();

    // Turn for a while, then push forward; repeat.
    let script: [&[Action]; 4] = [
        &[Action::MoveForward],
        &[Action::RotateLeft, Action::MoveForward],
        &[Action::MoveBackward],
        &[Action::RotateRight, Action::MoveForward],
    ];
    for step in 0..600 {
        let input = script[(step / 40) % script.len()];
        frame_loop.tick(1.0 / 30.0, input);
        frame_loop.present(&mut sink).unwrap();

        let pose = frame_loop.pose();
        assert!(
            !grid.blocks_point(pose.x, pose.y),
            "step {step}: ended inside a wall at ({}, {})",
            pose.x,
            pose.y
        );
    }

    assert_eq!(sink.presented, 600);
    assert_eq!(frame_loop.frames(), 600);
    assert_eq!(sink.last_len, 1200);
}

#[test]
fn engine_modes_render_identical_frames() {
    let mut serial = FrameLoop::new(TileGrid::default_map(), PlayerPose::default(), 80, 24)
        .unwrap()
        .with_mode(RenderMode::Serial);
    let mut parallel = FrameLoop::new(TileGrid::default_map(), PlayerPose::default(), 80, 24)
        .unwrap()
        .with_mode(RenderMode::Parallel);

    for _ in 0..30 {
        let input: &[Action] = &[Action::RotateRight, Action::MoveForward];
        let a = serial.tick(0.02, input).glyphs().to_vec();
        let b = parallel.tick(0.02, input).glyphs().to_vec();
        assert_eq!(a, b);
    }
}

#[test]
fn engine_from_config_uses_screen_size() {
    let config = EngineConfig::from_lookup(|key| match key {
        "RAYCASTER_SCREEN_WIDTH" => Some("32".to_string()),
        "RAYCASTER_SCREEN_HEIGHT" => Some("9".to_string()),
        "RAYCASTER_SHOW_FPS" => Some("off".to_string()),
        _ => None,
    });
    let grid = config.load_grid().unwrap();
    let mut frame_loop = FrameLoop::from_config(&config, grid).unwrap();
    let frame = frame_loop.tick(0.1, &());
    assert_eq!((frame.width(), frame.height()), (32, 9));
    assert_ne!(frame.get(0, 0), Some('F'));
}

#[test]
fn engine_rejects_start_inside_wall() {
    let config = EngineConfig {
        pose: PlayerPose::at(0.5, 0.5, 0.0),
        ..EngineConfig::default()
    };
    assert!(FrameLoop::from_config(&config, TileGrid::default_map()).is_err());
}
