use crate::error::{TmError, TmResult};
use crate::faces::{Faces, compute_faces};
use crate::grid::{TileGrid, TilesetCatalog};
use crate::tile::{EMPTY_TILE, LayerId, TileId, TilePos};
use crate::tiled::TiledMap;
use crate::tileset::Tileset;

/// One layer of a [`TileMap`].
#[derive(Debug, Clone)]
pub struct TileLayer {
    /// Layer name.
    pub name: String,
    tiles: Vec<TileId>,
    faces: Vec<Faces>,
    dirty: bool,
    recompute_count: u64,
}

impl TileLayer {
    /// All tile ids in row-major order.
    pub fn tiles(&self) -> &[TileId] {
        &self.tiles
    }

    /// Whether the layer has been written since its last recomputation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many times derived data has been recomputed since the map was built.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }
}

/// In-memory tile map: a fixed-size grid of layers plus the tilesets they use.
///
/// Cells are addressed through the [`TileGrid`] trait. Reads outside the grid
/// yield [`EMPTY_TILE`]; writes outside the grid are dropped.
#[derive(Debug, Clone)]
pub struct TileMap {
    width: u32,
    height: u32,
    layers: Vec<TileLayer>,
    tilesets: Vec<Tileset>,
}

impl TileMap {
    /// Create an empty map with no layers.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
            tilesets: Vec::new(),
        }
    }

    /// Build a map from a Tiled document: one layer per tile layer and one
    /// tileset per named tileset entry.
    pub fn from_tiled(doc: &TiledMap) -> TmResult<Self> {
        let mut map = Self::new(doc.width, doc.height);
        for layer in doc.tile_layers() {
            map.add_layer(layer.name.clone(), layer.data.clone())?;
        }
        for set in doc.tilesets.iter().filter(|s| !s.name.is_empty()) {
            let mut tileset = Tileset::new(set.name.clone(), set.first_gid);
            tileset.tile_count = set.tile_count;
            map.add_tileset(tileset);
        }
        Ok(map)
    }

    /// Add a layer from row-major tile data. Returns the new layer's id.
    pub fn add_layer(&mut self, name: impl Into<String>, tiles: Vec<TileId>) -> TmResult<LayerId> {
        let name = name.into();
        let expected = self.cell_count();
        if tiles.len() != expected {
            return Err(TmError::LayerSizeMismatch {
                name,
                expected,
                actual: tiles.len(),
                width: self.width,
                height: self.height,
            });
        }

        let faces = compute_faces(self.width, self.height, &tiles);
        let id = LayerId(self.layers.len());
        self.layers.push(TileLayer {
            name,
            tiles,
            faces,
            dirty: false,
            recompute_count: 0,
        });
        Ok(id)
    }

    /// Add a layer with every cell empty.
    pub fn add_empty_layer(&mut self, name: impl Into<String>) -> LayerId {
        let id = LayerId(self.layers.len());
        let cells = self.cell_count();
        self.layers.push(TileLayer {
            name: name.into(),
            tiles: vec![EMPTY_TILE; cells],
            faces: vec![Faces::empty(); cells],
            dirty: false,
            recompute_count: 0,
        });
        id
    }

    /// Register a tileset.
    pub fn add_tileset(&mut self, tileset: Tileset) {
        self.tilesets.push(tileset);
    }

    /// Get a layer by id.
    pub fn layer(&self, id: LayerId) -> Option<&TileLayer> {
        self.layers.get(id.0)
    }

    /// Find a layer id by name.
    pub fn layer_id(&self, name: &str) -> TmResult<LayerId> {
        self.layers
            .iter()
            .position(|l| l.name == name)
            .map(LayerId)
            .ok_or_else(|| TmError::LayerNameNotFound(name.to_string()))
    }

    /// All layers in insertion order.
    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// All tilesets in insertion order.
    pub fn tilesets(&self) -> &[Tileset] {
        &self.tilesets
    }

    /// Derived faces of the cell at `pos`, as of the last recomputation.
    pub fn faces(&self, layer: LayerId, pos: TilePos) -> Faces {
        self.index_of(pos)
            .and_then(|i| self.layer(layer).map(|l| l.faces[i]))
            .unwrap_or_default()
    }

    fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn index_of(&self, pos: TilePos) -> Option<usize> {
        if pos.x < self.width && pos.y < self.height {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }
}

impl TileGrid for TileMap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn tile(&self, layer: LayerId, pos: TilePos) -> TileId {
        self.index_of(pos)
            .and_then(|i| self.layer(layer).map(|l| l.tiles[i]))
            .unwrap_or(EMPTY_TILE)
    }

    fn set_tile(&mut self, layer: LayerId, pos: TilePos, tile: TileId) {
        let Some(i) = self.index_of(pos) else {
            tracing::warn!(%layer, %pos, "tile write outside the grid ignored");
            return;
        };
        match self.layers.get_mut(layer.0) {
            Some(l) => l.tiles[i] = tile,
            None => tracing::warn!(%layer, %pos, "tile write to unknown layer ignored"),
        }
    }

    fn mark_layer_dirty(&mut self, layer: LayerId) {
        if let Some(l) = self.layers.get_mut(layer.0) {
            l.dirty = true;
        }
    }

    fn recompute_derived(&mut self, layer: LayerId) {
        let (width, height) = (self.width, self.height);
        if let Some(l) = self.layers.get_mut(layer.0) {
            l.faces = compute_faces(width, height, &l.tiles);
            l.dirty = false;
            l.recompute_count += 1;
        }
    }
}

impl TilesetCatalog for TileMap {
    fn tileset_by_name(&self, name: &str) -> Option<&Tileset> {
        self.tilesets.iter().find(|t| t.name == name)
    }
}
