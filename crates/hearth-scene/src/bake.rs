//! Static geometry to passability
//!
//! Hearth never looks at meshes. Whatever owns the terrain reduces it to
//! axis-aligned obstacle boxes on the ground plane, and this module rasterizes
//! those boxes into a [`PassabilityMap`].

use hearth_core::Vec2;
use hearth_level::{GridSize, PassabilityMap};
use serde::{Deserialize, Serialize};

/// An axis-aligned box on the ground plane, in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub min: Vec2,
    pub max: Vec2,
}

impl Obstacle {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }
}

/// Build a map where everything is open except cells touched by an obstacle
pub fn bake_passability(size: GridSize, resolution: u32, obstacles: &[Obstacle]) -> PassabilityMap {
    let mut map = PassabilityMap::new(size, resolution);
    for y in 0..map.grid_height() {
        for x in 0..map.grid_width() {
            map.set_cell(x, y, true);
        }
    }
    block_obstacles(&mut map, obstacles);
    map
}

/// Mark every sub-tile overlapped by an obstacle as impassable.
///
/// The covered range is `floor(min * res)..ceil(max * res)` on each axis,
/// clipped to the grid. Returns how many cells were written.
pub fn block_obstacles(map: &mut PassabilityMap, obstacles: &[Obstacle]) -> usize {
    let res = map.resolution() as f32;
    let width = i64::from(map.grid_width());
    let height = i64::from(map.grid_height());
    let mut written = 0;

    for obstacle in obstacles {
        if !obstacle.min.is_finite() || !obstacle.max.is_finite() {
            continue;
        }

        let min_x = ((obstacle.min.x * res).floor() as i64).max(0);
        let min_y = ((obstacle.min.y * res).floor() as i64).max(0);
        let max_x = ((obstacle.max.x * res).ceil() as i64).min(width);
        let max_y = ((obstacle.max.y * res).ceil() as i64).min(height);

        for y in min_y..max_y {
            for x in min_x..max_x {
                map.set_cell(x as u32, y as u32, false);
                written += 1;
            }
        }
    }

    written
}
