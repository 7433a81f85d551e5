//! Motion controller - rotation and predict-and-revert movement
//!
//! Movement tentatively applies the full step, then restores the previous
//! position if the destination is blocked. There is no sliding along walls and
//! no sub-stepping. Forward is applied before backward, so holding both nets out
//! to no movement in open space.

use crate::grid::TileGrid;
use crate::pose::PlayerPose;
use crate::types::ROTATION_FACTOR;

/// Outcome of a single movement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// At least one step was attempted
    pub attempted: bool,
    /// At least one step was rolled back
    pub blocked: bool,
}

/// Turn the heading by `speed * ROTATION_FACTOR * dt` per pressed key.
pub fn apply_rotation(pose: &mut PlayerPose, pressed_left: bool, pressed_right: bool, dt: f64) {
    let turn = pose.speed * ROTATION_FACTOR * dt;
    if pressed_left {
        pose.theta -= turn;
    }
    if pressed_right {
        pose.theta += turn;
    }
}

/// Move along the heading, rolling back any step that lands in a wall or off the grid.
pub fn apply_movement(
    pose: &mut PlayerPose,
    pressed_forward: bool,
    pressed_backward: bool,
    dt: f64,
    grid: &TileGrid,
) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    let (sin, cos) = pose.forward();
    let dx = sin * pose.speed * dt;
    let dy = cos * pose.speed * dt;

    if pressed_forward {
        outcome.attempted = true;
        outcome.blocked |= try_step(pose, dx, dy, grid);
    }
    if pressed_backward {
        outcome.attempted = true;
        outcome.blocked |= try_step(pose, -dx, -dy, grid);
    }
    outcome
}

/// Returns true when the step was reverted.
fn try_step(pose: &mut PlayerPose, dx: f64, dy: f64, grid: &TileGrid) -> bool {
    let (x, y) = (pose.x, pose.y);
    pose.x += dx;
    pose.y += dy;
    if grid.blocks_point(pose.x, pose.y) {
        pose.x = x;
        pose.y = y;
        return true;
    }
    false
}
