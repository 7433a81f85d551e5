//! Ray caster - fixed-step marching from the player through the tile grid
//!
//! One ray is cast per screen column. Rays are spread evenly across the field
//! of view, left to right, and advance in [`RAY_STEP`] increments until they
//! hit a wall, leave the grid, or travel `depth` units.
//!
//! Leaving the grid counts as a hit at `depth` with no seam. A real wall hit
//! additionally checks the hit cell's corners: when the ray passes within
//! [`EDGE_THRESHOLD`] radians of one of the three corners nearest the player,
//! the hit is flagged as an edge so the shader can draw a mortar line.

use crate::grid::TileGrid;
use crate::pose::{direction, PlayerPose};
use crate::types::{Tile, EDGE_THRESHOLD, RAY_STEP};

/// Result of casting one column's ray.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RayHit {
    /// Distance travelled, capped at the pose depth
    pub distance: f64,
    /// The ray struck near a cell corner
    pub is_edge: bool,
}

impl RayHit {
    /// A ray that saw nothing within `depth`.
    pub fn miss(depth: f64) -> Self {
        Self {
            distance: depth,
            is_edge: false,
        }
    }
}

/// Angle of the ray for `column` on a screen `screen_width` columns wide.
#[inline]
pub fn ray_angle(column: u16, screen_width: u16, pose: &PlayerPose) -> f64 {
    (pose.theta - pose.fov / 2.0) + (column as f64 / screen_width as f64) * pose.fov
}

/// Cast the ray for one screen column.
pub fn cast_ray(column: u16, screen_width: u16, pose: &PlayerPose, grid: &TileGrid) -> RayHit {
    cast_ray_at(ray_angle(column, screen_width, pose), pose, grid)
}

/// Cast a ray from the player along an absolute angle.
pub fn cast_ray_at(angle: f64, pose: &PlayerPose, grid: &TileGrid) -> RayHit {
    let dir = direction(angle);
    let mut distance = 0.0;

    while distance < pose.depth {
        distance += RAY_STEP;
        let (cx, cy) = TileGrid::cell_of(pose.x + dir.0 * distance, pose.y + dir.1 * distance);

        match grid.get(cx, cy) {
            None => return RayHit::miss(pose.depth),
            Some(Tile::Wall) => {
                return RayHit {
                    distance: distance.min(pose.depth),
                    is_edge: near_corner(cx, cy, pose, dir),
                };
            }
            Some(Tile::Empty) => {}
        }
    }

    RayHit::miss(pose.depth)
}

/// Whether the ray passes close to one of the three nearest corners of the hit cell.
///
/// Corners are visited in scan order `(0,0), (0,1), (1,0), (1,1)` and the
/// stable sort by distance keeps that order on ties.
fn near_corner(cell_x: i64, cell_y: i64, pose: &PlayerPose, dir: (f64, f64)) -> bool {
    let mut corners = [(0.0_f64, 0.0_f64); 4];
    let mut i = 0;
    for tx in 0..2 {
        for ty in 0..2 {
            let vx = (cell_x + tx) as f64 - pose.x;
            let vy = (cell_y + ty) as f64 - pose.y;
            corners[i] = corner_angle(vx, vy, dir);
            i += 1;
        }
    }

    corners.sort_by(|a, b| a.0.total_cmp(&b.0));
    corners[..3].iter().any(|&(_, angle)| angle < EDGE_THRESHOLD)
}

/// `(distance, angle)` from the player to a corner offset `(vx, vy)`.
#[inline]
fn corner_angle(vx: f64, vy: f64, dir: (f64, f64)) -> (f64, f64) {
    let d = vx.hypot(vy);
    if d <= f64::EPSILON {
        // Standing on the corner.
        return (0.0, 0.0);
    }
    let dot = (dir.0 * vx + dir.1 * vy) / d;
    (d, dot.clamp(-1.0, 1.0).acos())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> TileGrid {
        TileGrid::from_text(text).unwrap()
    }

    #[test]
    fn center_column_angle_is_heading() {
        let pose = PlayerPose::at(1.0, 1.0, 0.3);
        assert!((ray_angle(60, 120, &pose) - 0.3).abs() < 1e-12);
        assert!((ray_angle(0, 120, &pose) - (0.3 - pose.fov / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn distance_is_capped_at_depth() {
        // Wall sits just past the depth limit.
        let g = grid("...\n...\n...\n...\n###\n");
        let pose = PlayerPose::at(1.5, 0.5, 0.0).with_depth(3.52);
        let hit = cast_ray_at(0.0, &pose, &g);
        assert!(hit.distance <= pose.depth);
    }

    #[test]
    fn corner_on_ray_is_edge() {
        // Ray runs along x = 2.0, straight into the corner of cell (2, 3).
        let g = grid(".....\n.....\n.....\n..#..\n.....\n");
        let pose = PlayerPose::at(2.0, 0.5, 0.0);
        assert!(near_corner(2, 3, &pose, (0.0, 1.0)));
        let hit = cast_ray_at(0.0, &pose, &g);
        assert!(hit.is_edge);
    }

    #[test]
    fn standing_on_corner_counts_as_angle_zero() {
        assert_eq!(corner_angle(0.0, 0.0, (0.0, 1.0)), (0.0, 0.0));
    }

    #[test]
    fn only_the_three_nearest_corners_count() {
        // The ray points exactly at the farthest corner (1,1) of cell (0,0);
        // the three nearer corners are all well off-axis.
        let pose = PlayerPose::at(0.2, -3.0, 0.0);
        let (vx, vy) = (1.0 - pose.x, 1.0 - pose.y);
        let len = vx.hypot(vy);
        assert!(!near_corner(0, 0, &pose, (vx / len, vy / len)));

        // Aiming at the nearest corner (0,0) instead is a seam.
        let (vx, vy) = (0.0 - pose.x, 0.0 - pose.y);
        let len = vx.hypot(vy);
        assert!(near_corner(0, 0, &pose, (vx / len, vy / len)));
    }
}
