use bitflags::bitflags;

use crate::tile::{EMPTY_TILE, TileId};

bitflags! {
    /// Exposed sides of an occupied cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Faces: u8 {
        /// Neighbour above is empty or off-grid.
        const TOP = 1 << 0;
        /// Neighbour below is empty or off-grid.
        const BOTTOM = 1 << 1;
        /// Neighbour to the left is empty or off-grid.
        const LEFT = 1 << 2;
        /// Neighbour to the right is empty or off-grid.
        const RIGHT = 1 << 3;
    }
}

/// Compute the faces of every cell of a row-major layer.
///
/// Empty cells have no faces. An occupied cell gets a face on each side
/// whose neighbour is empty or outside the grid.
pub fn compute_faces(width: u32, height: u32, tiles: &[TileId]) -> Vec<Faces> {
    let (w, h) = (width as usize, height as usize);
    let occupied = |x: usize, y: usize| tiles.get(y * w + x).is_some_and(|t| *t != EMPTY_TILE);

    let mut faces = vec![Faces::empty(); tiles.len()];
    for y in 0..h {
        for x in 0..w {
            if !occupied(x, y) {
                continue;
            }
            let mut f = Faces::empty();
            if y == 0 || !occupied(x, y - 1) {
                f |= Faces::TOP;
            }
            if y + 1 >= h || !occupied(x, y + 1) {
                f |= Faces::BOTTOM;
            }
            if x == 0 || !occupied(x - 1, y) {
                f |= Faces::LEFT;
            }
            if x + 1 >= w || !occupied(x + 1, y) {
                f |= Faces::RIGHT;
            }
            faces[y * w + x] = f;
        }
    }
    faces
}
