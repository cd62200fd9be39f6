//! Tile grid model for Tilemotion: tile ids, layers, tilesets, and maps.
//!
//! This crate defines the grid the animation engine reads and writes. The
//! engine only talks to the [`TileGrid`] and [`TilesetCatalog`] traits, so a
//! host can plug in its own grid; [`TileMap`] is the in-memory implementation
//! used by the CLI and the tests. Maps can be built programmatically or loaded
//! from a Tiled JSON document via [`tiled::TiledMap`].

/// Error types used throughout the crate.
pub mod error;
/// Collision faces derived from a layer's occupied cells.
pub mod faces;
/// The grid collaborator traits consumed by the animation engine.
pub mod grid;
/// In-memory tile map with per-layer dirty tracking.
pub mod map;
/// Tile ids, grid positions, and layer identifiers.
pub mod tile;
/// serde model of Tiled JSON map documents.
pub mod tiled;
/// Tilesets and global/local tile id translation.
pub mod tileset;

/// Re-export error types.
pub use error::{TmError, TmResult};
/// Re-export derived face flags.
pub use faces::Faces;
/// Re-export the grid collaborator traits.
pub use grid::{TileGrid, TilesetCatalog};
/// Re-export the in-memory map types.
pub use map::{TileLayer, TileMap};
/// Re-export tile addressing types.
pub use tile::{EMPTY_TILE, LayerId, TileId, TilePos};
/// Re-export the tileset record.
pub use tileset::Tileset;
