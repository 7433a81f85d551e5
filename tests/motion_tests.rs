//! Motion controller tests - rotation and predict-and-revert collision

use tui_raycaster::core::{apply_movement, apply_rotation, PlayerPose, TileGrid};

const EPS: f64 = 1e-9;

fn corridor() -> TileGrid {
    // Wall row at y = 3.
    TileGrid::from_text(".....\n.....\n.....\n#####\n.....\n").unwrap()
}

#[test]
fn test_move_into_wall_is_rolled_back() {
    let grid = corridor();
    let mut pose = PlayerPose::at(2.5, 2.8, 0.0).with_speed(5.0);
    let before = pose;

    let outcome = apply_movement(&mut pose, true, false, 0.1, &grid);
    assert!(outcome.blocked);
    assert!((pose.x - before.x).abs() < EPS);
    assert!((pose.y - before.y).abs() < EPS);
}

#[test]
fn test_backward_mirrors_forward() {
    let grid = TileGrid::open(6, 6).unwrap();
    let mut pose = PlayerPose::at(3.0, 3.0, 0.7).with_speed(2.0);

    apply_movement(&mut pose, true, false, 0.25, &grid);
    apply_movement(&mut pose, false, true, 0.25, &grid);
    assert!((pose.x - 3.0).abs() < EPS);
    assert!((pose.y - 3.0).abs() < EPS);
}

#[test]
fn test_backward_into_wall_is_rolled_back() {
    let grid = corridor();
    // Facing away from the wall, stepping backward toward it.
    let mut pose = PlayerPose::at(1.5, 2.9, std::f64::consts::PI).with_speed(5.0);
    let outcome = apply_movement(&mut pose, false, true, 0.1, &grid);
    assert!(outcome.blocked);
    assert!((pose.y - 2.9).abs() < EPS);
}

#[test]
fn test_both_movement_keys_net_cancel() {
    let grid = TileGrid::open(6, 6).unwrap();
    let mut pose = PlayerPose::at(3.0, 3.0, 1.1);
    let outcome = apply_movement(&mut pose, true, true, 0.05, &grid);
    assert!(outcome.attempted);
    assert!(!outcome.blocked);
    assert!((pose.x - 3.0).abs() < EPS);
    assert!((pose.y - 3.0).abs() < EPS);
}

#[test]
fn test_forward_blocked_then_backward_applies() {
    // Forward is reverted, backward still moves: order is fixed.
    let grid = corridor();
    let mut pose = PlayerPose::at(2.5, 2.9, 0.0).with_speed(1.0);
    apply_movement(&mut pose, true, true, 0.5, &grid);
    assert!((pose.y - 2.4).abs() < EPS);
}

#[test]
fn test_rotation_is_reversible() {
    let mut pose = PlayerPose::at(1.0, 1.0, 0.4);
    apply_rotation(&mut pose, true, false, 0.016);
    assert!(pose.theta < 0.4);
    apply_rotation(&mut pose, false, true, 0.016);
    assert!((pose.theta - 0.4).abs() < EPS);
}

#[test]
fn test_rotation_does_not_move() {
    let mut pose = PlayerPose::at(1.25, 2.75, 0.0);
    apply_rotation(&mut pose, false, true, 1.0);
    assert_eq!((pose.x, pose.y), (1.25, 2.75));
    assert!((pose.theta - pose.speed * 0.75).abs() < EPS);
}

#[test]
fn test_walking_into_wall_never_enters_it() {
    let grid = corridor();
    let mut pose = PlayerPose::at(2.5, 0.5, 0.0);
    for _ in 0..200 {
        apply_movement(&mut pose, true, false, 1.0 / 60.0, &grid);
        assert!(!grid.blocks_point(pose.x, pose.y));
    }
    assert!(pose.y > 2.5 && pose.y < 3.0);
}
