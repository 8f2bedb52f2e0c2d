//! Sub-tile passability grid

use hearth_core::{HearthError, Result, Vec2};
use serde::{Deserialize, Serialize};

/// World size in whole tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Center of the world in world units
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

/// Boolean walkability grid at sub-tile resolution.
///
/// Cells are stored row-major: `index = x + y * width * resolution`. A new map
/// is entirely impassable, and anything outside the grid is impassable.
#[derive(Debug, Clone, PartialEq)]
pub struct PassabilityMap {
    size: GridSize,
    resolution: u32,
    tiles: Vec<bool>,
}

impl PassabilityMap {
    /// Create an all-impassable map. A resolution of zero is treated as one.
    pub fn new(size: GridSize, resolution: u32) -> Self {
        let resolution = resolution.max(1);
        let len = Self::len_for(size, resolution);
        Self {
            size,
            resolution,
            tiles: vec![false; len],
        }
    }

    fn len_for(size: GridSize, resolution: u32) -> usize {
        size.width as usize * size.height as usize * resolution as usize * resolution as usize
    }

    /// Number of cells the grid must hold
    pub fn expected_len(&self) -> usize {
        Self::len_for(self.size, self.resolution)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Sub-tile cells per tile edge
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Width of the grid in sub-tile cells
    pub fn grid_width(&self) -> u32 {
        self.size.width * self.resolution
    }

    /// Height of the grid in sub-tile cells
    pub fn grid_height(&self) -> u32 {
        self.size.height * self.resolution
    }

    /// Replace the whole grid. On a size mismatch the old grid is kept.
    pub fn set_tiles(&mut self, tiles: Vec<bool>) -> Result<()> {
        let expected = self.expected_len();
        if tiles.len() != expected {
            return Err(HearthError::PassabilitySizeMismatch {
                expected,
                got: tiles.len(),
            });
        }
        self.tiles = tiles;
        Ok(())
    }

    /// Whether a world-space point lies on a walkable sub-tile
    pub fn is_passable(&self, position: Vec2) -> bool {
        if !position.is_finite() {
            return false;
        }

        let res = self.resolution as f32;
        let sx = (position.x * res).floor();
        let sy = (position.y * res).floor();
        if sx < 0.0 || sy < 0.0 || sx >= self.grid_width() as f32 || sy >= self.grid_height() as f32 {
            return false;
        }

        self.cell(sx as u32, sy as u32)
    }

    /// Read a cell by sub-tile coordinates; out of range reads as impassable
    pub fn cell(&self, x: u32, y: u32) -> bool {
        self.index(x, y).map(|i| self.tiles[i]).unwrap_or(false)
    }

    /// Write a cell by sub-tile coordinates. Returns false if out of range.
    pub fn set_cell(&mut self, x: u32, y: u32, passable: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = passable;
                true
            }
            None => false,
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.grid_width() || y >= self.grid_height() {
            return None;
        }
        Some(x as usize + y as usize * self.grid_width() as usize)
    }

    pub fn tiles(&self) -> &[bool] {
        &self.tiles
    }

    pub fn passable_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t).count()
    }
}
