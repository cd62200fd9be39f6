use crate::tile::{LayerId, TileId, TilePos};
use crate::tileset::Tileset;

/// The grid operations the animation engine depends on.
///
/// Implementations must be synchronous: a `set_tile` is visible to the next
/// `tile` read within the same tick. The engine never assumes anything else
/// about how cells, dirty flags, or derived data are stored.
pub trait TileGrid {
    /// Width of the grid in cells.
    fn width(&self) -> u32;

    /// Height of the grid in cells.
    fn height(&self) -> u32;

    /// Global tile id at `pos` on `layer`.
    fn tile(&self, layer: LayerId, pos: TilePos) -> TileId;

    /// Overwrite the tile at `pos` on `layer`.
    fn set_tile(&mut self, layer: LayerId, pos: TilePos, tile: TileId);

    /// Flag `layer` as needing its derived data recomputed.
    fn mark_layer_dirty(&mut self, layer: LayerId);

    /// Recompute derived layer data (adjacency, collision faces).
    fn recompute_derived(&mut self, layer: LayerId);

    /// Iterate every cell position in row-major order.
    fn positions(&self) -> Box<dyn Iterator<Item = TilePos> + '_> {
        let width = self.width();
        Box::new((0..self.height()).flat_map(move |y| (0..width).map(move |x| TilePos::new(x, y))))
    }
}

/// Lookup of tilesets by name, used when resolving map metadata.
pub trait TilesetCatalog {
    /// Find a tileset by its exact name.
    fn tileset_by_name(&self, name: &str) -> Option<&Tileset>;
}
