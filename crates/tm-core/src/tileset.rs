use serde::{Deserialize, Serialize};

use crate::tile::TileId;

/// A named collection of tiles occupying a contiguous range of global ids.
///
/// Frame ids in animation definitions are local to a tileset; the global id
/// written into the grid is `first_gid + local`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tileset {
    /// Tileset name, used to resolve references from map metadata.
    pub name: String,
    /// Global id of the tileset's first tile (its base offset).
    pub first_gid: TileId,
    /// Number of tiles in the set, when known.
    pub tile_count: Option<u32>,
}

impl Tileset {
    /// Create a tileset with an unknown tile count.
    pub fn new(name: impl Into<String>, first_gid: TileId) -> Self {
        Self {
            name: name.into(),
            first_gid,
            tile_count: None,
        }
    }

    /// Set the number of tiles in the set.
    pub fn with_tile_count(mut self, count: u32) -> Self {
        self.tile_count = Some(count);
        self
    }

    /// Translate a local tile id into a global one.
    ///
    /// Returns `None` when the sum does not fit in a [`TileId`].
    pub fn global_id(&self, local: u32) -> Option<TileId> {
        self.first_gid.checked_add(local)
    }

    /// Translate a global tile id into a local one, if it belongs to this set.
    ///
    /// Without a known tile count every id at or above `first_gid` matches.
    pub fn local_id(&self, gid: TileId) -> Option<u32> {
        let local = gid.checked_sub(self.first_gid)?;
        match self.tile_count {
            Some(count) if local >= count => None,
            _ => Some(local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_id_adds_base_offset() {
        let set = Tileset::new("terrain", 17);
        assert_eq!(set.global_id(0), Some(17));
        assert_eq!(set.global_id(5), Some(22));
    }

    #[test]
    fn global_id_overflow_is_none() {
        let set = Tileset::new("terrain", 2);
        assert_eq!(set.global_id(u32::MAX - 2), Some(u32::MAX));
        assert_eq!(set.global_id(u32::MAX), None);
    }

    #[test]
    fn local_id_respects_range() {
        let set = Tileset::new("terrain", 10).with_tile_count(4);
        assert_eq!(set.local_id(9), None);
        assert_eq!(set.local_id(10), Some(0));
        assert_eq!(set.local_id(13), Some(3));
        assert_eq!(set.local_id(14), None);

        let open = Tileset::new("open", 1);
        assert_eq!(open.local_id(1000), Some(999));
    }
}
