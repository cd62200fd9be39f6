use std::collections::HashSet;

use tm_core::{LayerId, TileGrid, TileId, TilePos, Tileset};

/// Find every cell of `layer` currently showing one of `frames`.
///
/// A cell matches when its global id equals `tileset.first_gid + f` for some
/// local frame id `f`. Each cell appears at most once, in row-major order,
/// even when a frame id repeats. Frames whose global id would overflow match
/// nothing. The grid is read, never written.
///
/// This walks the whole layer and is meant for registration time only.
pub fn index_locations<G>(grid: &G, layer: LayerId, tileset: &Tileset, frames: &[u32]) -> Vec<TilePos>
where
    G: TileGrid + ?Sized,
{
    let wanted: HashSet<TileId> = frames.iter().filter_map(|f| tileset.global_id(*f)).collect();
    grid.positions()
        .filter(|pos| wanted.contains(&grid.tile(layer, *pos)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_core::TileMap;

    fn grid() -> TileMap {
        let mut map = TileMap::new(4, 3);
        #[rustfmt::skip]
        let tiles = vec![
            11, 0, 12, 0,
            0, 13, 0, 11,
            5, 0, 0, 12,
        ];
        map.add_layer("ground", tiles).unwrap();
        map.add_empty_layer("sky");
        map
    }

    #[test]
    fn finds_cells_for_every_frame() {
        let map = grid();
        let set = Tileset::new("water", 10);
        let cells = index_locations(&map, LayerId(0), &set, &[1, 2]);
        assert_eq!(
            cells,
            vec![
                TilePos::new(0, 0),
                TilePos::new(2, 0),
                TilePos::new(3, 1),
                TilePos::new(3, 2),
            ]
        );
    }

    #[test]
    fn repeated_frames_capture_a_cell_once() {
        let map = grid();
        let set = Tileset::new("water", 10);
        let cells = index_locations(&map, LayerId(0), &set, &[3, 1, 3, 1]);
        assert_eq!(
            cells,
            vec![TilePos::new(0, 0), TilePos::new(1, 1), TilePos::new(3, 1)]
        );
    }

    #[test]
    fn respects_base_offset() {
        let map = grid();
        // Local 1 in a set starting at 4 is global 5.
        let set = Tileset::new("other", 4);
        let cells = index_locations(&map, LayerId(0), &set, &[1]);
        assert_eq!(cells, vec![TilePos::new(0, 2)]);
    }

    #[test]
    fn other_layers_are_not_scanned() {
        let map = grid();
        let set = Tileset::new("water", 10);
        assert!(index_locations(&map, LayerId(1), &set, &[1, 2, 3]).is_empty());
    }

    #[test]
    fn overflowing_frames_match_nothing() {
        let map = grid();
        let set = Tileset::new("water", 10);
        let cells = index_locations(&map, LayerId(0), &set, &[u32::MAX, 1]);
        assert_eq!(cells, vec![TilePos::new(0, 0), TilePos::new(3, 1)]);
    }

    #[test]
    fn no_matches_yields_empty() {
        let map = grid();
        let set = Tileset::new("water", 100);
        assert!(index_locations(&map, LayerId(0), &set, &[0, 1]).is_empty());
    }
}
