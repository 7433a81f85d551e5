//! Terminal ray caster (default binary).
//!
//! Renders a first-person view of the tile map into the terminal using
//! crossterm for input and a framebuffer-based diff renderer for output.
//! Configuration comes from `RAYCASTER_*` environment variables; see
//! [`tui_raycaster::engine::EngineConfig`].

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_raycaster::engine::{EngineConfig, FrameClock, FrameLoop, FramePacer};
use tui_raycaster::input::{should_quit, KeyState};
use tui_raycaster::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    let grid = config.load_grid()?;
    info!(
        "map {}x{} ({}), screen {}x{}, {:?} rendering",
        grid.width(),
        grid.height(),
        config
            .map_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        config.screen_width,
        config.screen_height,
        config.render_mode,
    );
    let mut frame_loop = FrameLoop::from_config(&config, grid).context("invalid configuration")?;

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .context("entering terminal raw mode")
        .and_then(|()| run(&mut term, &mut frame_loop, &config));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {e:#}");
    }
    info!("exiting after {} frames", frame_loop.frames());
    result
}

fn run(term: &mut TerminalRenderer, frame_loop: &mut FrameLoop, config: &EngineConfig) -> Result<()> {
    let release_timeout = if term.release_events() {
        None
    } else {
        config.key_release_ms
    };
    info!(
        "key release events {}",
        if term.release_events() {
            "reported by terminal"
        } else {
            "unavailable, using timeout"
        }
    );

    let mut keys = KeyState::new().with_key_release_timeout_ms(release_timeout);
    let pacer = FramePacer::new(config.max_fps);
    let mut clock = FrameClock::new();

    loop {
        // Drain input, waiting out whatever is left of the frame budget.
        while event::poll(pacer.remaining(clock.since_tick()))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    keys.handle_key_event(key, clock.now_ms());
                }
                Event::Resize(w, h) => term.resize(w, h),
                _ => {}
            }
        }
        keys.expire(clock.now_ms());

        let dt = clock.tick();
        frame_loop.tick(dt, &keys);
        frame_loop.present(term)?;
    }
}

/// Log to a file when `RAYCASTER_LOG_PATH` is set; the terminal is in raw
/// alternate-screen mode, so stderr is not an option.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
