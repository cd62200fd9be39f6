use crate::tile::LayerId;

/// Alias for `Result<T, TmError>`.
pub type TmResult<T> = Result<T, TmError>;

/// Errors that can occur when building or loading a tile map.
#[derive(Debug, thiserror::Error)]
pub enum TmError {
    /// The requested layer does not exist in the map.
    #[error("layer not found: {0}")]
    LayerNotFound(LayerId),

    /// No layer with the given name exists in the map.
    #[error("layer not found: \"{0}\"")]
    LayerNameNotFound(String),

    /// A layer's tile data does not cover the map exactly.
    #[error("layer \"{name}\" has {actual} tiles, expected {expected} ({width}x{height})")]
    LayerSizeMismatch {
        /// The layer name.
        name: String,
        /// Number of tiles the map dimensions require.
        expected: usize,
        /// Number of tiles actually supplied.
        actual: usize,
        /// Map width in cells.
        width: u32,
        /// Map height in cells.
        height: u32,
    },

    /// The map document could not be parsed.
    #[error("invalid map document: {0}")]
    Json(#[from] serde_json::Error),

    /// The map document could not be read.
    #[error("cannot read map document: {0}")]
    Io(#[from] std::io::Error),
}
