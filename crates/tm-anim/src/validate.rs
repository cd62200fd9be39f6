use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tm_core::{TileId, TilePos};

use crate::definition::DefinitionHandle;
use crate::registry::AnimationRegistry;

/// Two definitions that claim the same cell or frame tile.
///
/// Overlaps are legal: on a shared cell the later registration's write wins
/// each tick. They usually point at a mistake in the map metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlap {
    /// Both definitions captured the same cell.
    SharedCell {
        /// The earlier registration.
        first: DefinitionHandle,
        /// The later registration, whose writes win.
        second: DefinitionHandle,
        /// The contested cell.
        pos: TilePos,
    },
    /// Both definitions list the same global tile id among their frames.
    SharedTile {
        /// The earlier registration.
        first: DefinitionHandle,
        /// The later registration.
        second: DefinitionHandle,
        /// The contested global tile id.
        tile: TileId,
    },
}

impl fmt::Display for Overlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SharedCell { first, second, pos } => {
                write!(f, "{first} and {second} both animate cell {pos}; {second} wins")
            }
            Self::SharedTile {
                first,
                second,
                tile,
            } => write!(f, "{first} and {second} both use tile {tile}"),
        }
    }
}

/// Report every pair of definitions sharing a cell or a global frame id.
///
/// Results are ordered by kind (cells first), then by position or tile id,
/// then by registration order.
pub fn find_overlaps(registry: &AnimationRegistry) -> Vec<Overlap> {
    let mut by_cell: BTreeMap<TilePos, Vec<DefinitionHandle>> = BTreeMap::new();
    let mut by_tile: BTreeMap<TileId, Vec<DefinitionHandle>> = BTreeMap::new();

    for (handle, definition) in registry.iter() {
        for pos in definition.locations() {
            by_cell.entry(*pos).or_default().push(handle);
        }
        // A definition repeating its own frame is not an overlap.
        let mut seen = HashSet::new();
        for tile in definition.global_frames() {
            if seen.insert(tile) {
                by_tile.entry(tile).or_default().push(handle);
            }
        }
    }

    let mut overlaps = Vec::new();
    for (pos, owners) in &by_cell {
        for_each_pair(owners, |first, second| {
            overlaps.push(Overlap::SharedCell {
                first,
                second,
                pos: *pos,
            });
        });
    }
    for (tile, owners) in &by_tile {
        for_each_pair(owners, |first, second| {
            overlaps.push(Overlap::SharedTile {
                first,
                second,
                tile: *tile,
            });
        });
    }
    overlaps
}

fn for_each_pair(owners: &[DefinitionHandle], mut f: impl FnMut(DefinitionHandle, DefinitionHandle)) {
    for (i, first) in owners.iter().enumerate() {
        for second in &owners[i + 1..] {
            f(*first, *second);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_core::{LayerId, TileGrid, TileMap, Tileset};

    fn map_with(cells: &[(u32, u32, TileId)]) -> TileMap {
        let mut map = TileMap::new(6, 6);
        map.add_empty_layer("ground");
        for (x, y, t) in cells {
            map.set_tile(LayerId(0), TilePos::new(*x, *y), *t);
        }
        map
    }

    #[test]
    fn disjoint_definitions_do_not_overlap() {
        let map = map_with(&[(0, 0, 1), (1, 0, 5)]);
        let mut registry = AnimationRegistry::new(LayerId(0));
        let set = Tileset::new("t", 0);
        registry.add_animation(&map, vec![1, 2], 100, &set).unwrap();
        registry.add_animation(&map, vec![5, 6], 100, &set).unwrap();

        assert!(find_overlaps(&registry).is_empty());
    }

    #[test]
    fn shared_cell_and_tile_are_flagged() {
        let map = map_with(&[(4, 4, 20)]);
        let mut registry = AnimationRegistry::new(LayerId(0));
        let set = Tileset::new("t", 0);
        let a = registry.add_animation(&map, vec![20, 21], 500, &set).unwrap();
        let b = registry.add_animation(&map, vec![20, 30], 500, &set).unwrap();

        let overlaps = find_overlaps(&registry);

        assert_eq!(
            overlaps,
            vec![
                Overlap::SharedCell {
                    first: a,
                    second: b,
                    pos: TilePos::new(4, 4),
                },
                Overlap::SharedTile {
                    first: a,
                    second: b,
                    tile: 20,
                },
            ]
        );
        assert!(overlaps[0].to_string().contains("#1 wins"));
    }

    #[test]
    fn repeated_frames_within_one_definition_are_fine() {
        let map = map_with(&[(0, 0, 3)]);
        let mut registry = AnimationRegistry::new(LayerId(0));
        registry
            .add_animation(&map, vec![3, 4, 3, 4], 100, &Tileset::new("t", 0))
            .unwrap();

        assert!(find_overlaps(&registry).is_empty());
    }

    #[test]
    fn same_local_ids_in_different_tilesets_do_not_collide() {
        let map = map_with(&[(0, 0, 1), (1, 0, 11)]);
        let mut registry = AnimationRegistry::new(LayerId(0));
        registry
            .add_animation(&map, vec![0], 100, &Tileset::new("a", 1))
            .unwrap();
        registry
            .add_animation(&map, vec![0], 100, &Tileset::new("b", 11))
            .unwrap();

        assert!(find_overlaps(&registry).is_empty());
    }
}
