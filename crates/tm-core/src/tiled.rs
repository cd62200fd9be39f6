use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TmResult;
use crate::tile::TileId;

/// A Tiled JSON map document (the subset the engine consumes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiledMap {
    /// Map width in cells.
    pub width: u32,
    /// Map height in cells.
    pub height: u32,
    /// Layers in document order.
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
    /// Tilesets in document order.
    #[serde(default)]
    pub tilesets: Vec<TiledTileset>,
}

impl TiledMap {
    /// Parse a map document from a JSON string.
    pub fn from_json(source: &str) -> TmResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a map document from disk.
    pub fn from_path(path: &Path) -> TmResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Layers that carry tile data.
    pub fn tile_layers(&self) -> impl Iterator<Item = &TiledLayer> {
        self.layers.iter().filter(|l| l.is_tile_layer())
    }
}

/// One layer of a Tiled map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiledLayer {
    /// Layer name.
    #[serde(default)]
    pub name: String,
    /// Tiled layer type (`tilelayer`, `objectgroup`, ...).
    #[serde(rename = "type", default = "default_layer_kind")]
    pub kind: String,
    /// Row-major global tile ids.
    #[serde(default)]
    pub data: Vec<TileId>,
}

fn default_layer_kind() -> String {
    "tilelayer".to_string()
}

impl TiledLayer {
    /// Return `true` if this layer holds a tile grid.
    pub fn is_tile_layer(&self) -> bool {
        self.kind == "tilelayer"
    }
}

/// A tileset entry embedded in a map document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiledTileset {
    /// Tileset name. External tileset references carry none.
    #[serde(default)]
    pub name: String,
    /// Global id of the tileset's first tile.
    #[serde(rename = "firstgid")]
    pub first_gid: TileId,
    /// Number of tiles in the set.
    #[serde(rename = "tilecount", default)]
    pub tile_count: Option<u32>,
    /// Per-tile metadata, in either of Tiled's historical shapes.
    #[serde(default)]
    pub tiles: Option<TiledTiles>,
}

impl TiledTileset {
    /// Tiles with a non-empty animation, in ascending local id order.
    pub fn animated_tiles(&self) -> Vec<(u32, &[TiledFrame])> {
        let mut tiles: Vec<(u32, &[TiledFrame])> = match &self.tiles {
            None => Vec::new(),
            // Records without an id cannot be placed and are skipped.
            Some(TiledTiles::List(list)) => list
                .iter()
                .filter_map(|t| Some((t.id?, t.animation.as_slice())))
                .collect(),
            Some(TiledTiles::Map(map)) => map
                .iter()
                .filter_map(|(key, t)| {
                    let id = t.id.or_else(|| key.parse().ok())?;
                    Some((id, t.animation.as_slice()))
                })
                .collect(),
        };
        tiles.retain(|(_, frames)| !frames.is_empty());
        tiles.sort_by_key(|(id, _)| *id);
        tiles
    }
}

/// Per-tile metadata: an array of records (current Tiled) or an object keyed
/// by local tile id (older Tiled).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TiledTiles {
    /// `[{ "id": 3, "animation": [...] }, ...]`
    List(Vec<TiledTile>),
    /// `{ "3": { "animation": [...] }, ... }`
    Map(BTreeMap<String, TiledTile>),
}

/// Metadata for a single tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiledTile {
    /// Local tile id (present in the array shape).
    #[serde(default)]
    pub id: Option<u32>,
    /// Ordered animation frames, empty for static tiles.
    #[serde(default)]
    pub animation: Vec<TiledFrame>,
}

/// One frame of a tile animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiledFrame {
    /// Local tile id shown during this frame.
    #[serde(rename = "tileid")]
    pub tile_id: u32,
    /// How long this frame is shown, in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}
