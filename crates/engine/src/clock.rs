//! Frame timing: elapsed time between frames and an optional frame cap.

use std::time::{Duration, Instant};

/// Measures wall-clock time between successive frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Seconds since the previous tick (or since construction on the first tick).
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f64()
    }

    /// Time since the last tick, without resetting it.
    pub fn since_tick(&self) -> Duration {
        self.last.elapsed()
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional frame cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget: Option<Duration>,
}

impl FramePacer {
    /// `max_fps == 0` disables the cap.
    pub fn new(max_fps: u32) -> Self {
        let budget = if max_fps == 0 {
            None
        } else {
            Some(Duration::from_secs(1) / max_fps)
        };
        Self { budget }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time left in the current frame's budget; zero when uncapped or overdue.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget
            .and_then(|budget| budget.checked_sub(elapsed))
            .unwrap_or(Duration::ZERO)
    }
}

/// Rolling frame-rate counter used for periodic logging.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    frames: u32,
    elapsed: f64,
}

impl FrameStats {
    /// Record a frame; returns the average rate once at least a second has accumulated.
    pub fn record(&mut self, dt: f64) -> Option<f64> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < 1.0 {
            return None;
        }
        let fps = self.frames as f64 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_pacer_never_waits() {
        let pacer = FramePacer::new(0);
        assert_eq!(pacer.budget(), None);
        assert_eq!(pacer.remaining(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn capped_pacer_waits_out_the_budget() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.budget(), Some(Duration::from_millis(20)));
        assert_eq!(
            pacer.remaining(Duration::from_millis(5)),
            Duration::from_millis(15)
        );
        assert_eq!(pacer.remaining(Duration::from_millis(25)), Duration::ZERO);
    }

    #[test]
    fn clock_ticks_are_non_negative() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(a >= 0.0 && b >= 0.0);
    }

    #[test]
    fn stats_report_once_per_second() {
        let mut stats = FrameStats::default();
        for _ in 0..3 {
            assert_eq!(stats.record(0.25), None);
        }
        let fps = stats.record(0.25).unwrap();
        assert!((fps - 4.0).abs() < 1e-12);
        assert_eq!(stats.record(0.25), None);
    }
}
