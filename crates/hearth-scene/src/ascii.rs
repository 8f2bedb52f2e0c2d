//! Plain-text passability maps
//!
//! One character per sub-tile, `#` for blocked and `.` for open. The first
//! line is the top row (highest y), so the text reads like a top-down view.

use hearth_core::{HearthError, Result};
use hearth_level::{GridSize, PassabilityMap};

pub const BLOCKED: char = '#';
pub const OPEN: char = '.';

/// Draw the map, top row first
pub fn render_ascii(map: &PassabilityMap) -> String {
    let width = map.grid_width() as usize;
    let height = map.grid_height();
    let mut out = String::with_capacity((width + 1) * height as usize);

    for y in (0..height).rev() {
        for x in 0..map.grid_width() {
            out.push(if map.cell(x, y) { OPEN } else { BLOCKED });
        }
        out.push('\n');
    }
    out
}

/// Parse a map drawn by [`render_ascii`]. Spaces also count as open.
pub fn parse_ascii(text: &str, size: GridSize, resolution: u32) -> Result<PassabilityMap> {
    let mut map = PassabilityMap::new(size, resolution);
    let width = map.grid_width() as usize;
    let height = map.grid_height() as usize;

    let rows: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .collect();

    if rows.len() != height {
        return Err(HearthError::ParseError(format!(
            "map has {} rows, expected {}",
            rows.len(),
            height
        )));
    }

    let mut tiles = vec![false; map.expected_len()];
    for (row, line) in rows.iter().enumerate() {
        let y = height - 1 - row;
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != width {
            return Err(HearthError::ParseError(format!(
                "map row {} has {} cells, expected {}",
                row + 1,
                cells.len(),
                width
            )));
        }
        for (x, c) in cells.into_iter().enumerate() {
            tiles[x + y * width] = match c {
                OPEN | ' ' => true,
                BLOCKED => false,
                other => {
                    return Err(HearthError::ParseError(format!(
                        "unexpected map character '{}' at row {}, column {}",
                        other,
                        row + 1,
                        x + 1
                    )))
                }
            };
        }
    }

    map.set_tiles(tiles)?;
    Ok(map)
}
