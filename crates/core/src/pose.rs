//! Player pose - the only state that changes from frame to frame.

use crate::types::{
    DEFAULT_DEPTH, DEFAULT_FOV, DEFAULT_SPEED, DEFAULT_START_X, DEFAULT_START_Y, DEFAULT_THETA,
};

/// Position and view parameters of the player.
///
/// `x`/`y` are in grid-cell units and need not be integral. `theta` is the
/// heading in radians; zero faces along +Y and the forward vector is
/// `(sin(theta), cos(theta))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    /// Field of view in radians
    pub fov: f64,
    /// Maximum ray travel distance in grid units
    pub depth: f64,
    /// Movement speed in cells per second
    pub speed: f64,
}

impl Default for PlayerPose {
    fn default() -> Self {
        Self {
            x: DEFAULT_START_X,
            y: DEFAULT_START_Y,
            theta: DEFAULT_THETA,
            fov: DEFAULT_FOV,
            depth: DEFAULT_DEPTH,
            speed: DEFAULT_SPEED,
        }
    }
}

impl PlayerPose {
    /// Pose at `(x, y)` facing `theta`, with default view parameters.
    pub fn at(x: f64, y: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            theta,
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_fov(mut self, fov: f64) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Unit vector along the heading.
    #[inline]
    pub fn forward(&self) -> (f64, f64) {
        direction(self.theta)
    }
}

/// Unit direction for an angle, using the `(sin, cos)` convention.
#[inline]
pub fn direction(angle: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    (sin, cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_heading_faces_positive_y() {
        let pose = PlayerPose::at(1.0, 1.0, 0.0);
        let (dx, dy) = pose.forward();
        assert_eq!(dx, 0.0);
        assert_eq!(dy, 1.0);
    }

    #[test]
    fn builders_keep_position() {
        let pose = PlayerPose::at(2.5, 3.5, 1.0)
            .with_depth(8.0)
            .with_fov(1.2)
            .with_speed(2.0);
        assert_eq!((pose.x, pose.y, pose.theta), (2.5, 3.5, 1.0));
        assert_eq!((pose.depth, pose.fov, pose.speed), (8.0, 1.2, 2.0));
    }
}
