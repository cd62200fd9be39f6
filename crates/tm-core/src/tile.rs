use std::fmt;

use serde::{Deserialize, Serialize};

/// A global tile id as stored in a grid cell.
pub type TileId = u32;

/// The global id of an empty cell.
pub const EMPTY_TILE: TileId = 0;

/// A cell coordinate on the grid.
///
/// Ordering is row-major (`y` first), matching the order the grid is scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    /// Column, counted from the left edge.
    pub x: u32,
    /// Row, counted from the top edge.
    pub y: u32,
}

impl TilePos {
    /// Create a position from a column and a row.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl PartialOrd for TilePos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TilePos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifies one layer of a tile map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LayerId(pub usize);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_sort_row_major() {
        let mut cells = vec![TilePos::new(1, 1), TilePos::new(3, 0), TilePos::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![TilePos::new(3, 0), TilePos::new(0, 1), TilePos::new(1, 1)]
        );
    }

    #[test]
    fn display_formats() {
        assert_eq!(TilePos::new(2, 3).to_string(), "(2, 3)");
        assert_eq!(LayerId(1).to_string(), "layer 1");
    }
}
