use std::fmt;

use tm_core::tiled::{TiledFrame, TiledMap};
use tm_core::{TileGrid, TilesetCatalog};

use crate::definition::DefinitionHandle;
use crate::error::AnimError;
use crate::registry::AnimationRegistry;

/// One animated tile extracted from map metadata, before tileset resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSpec {
    /// Name of the tileset the tile belongs to.
    pub tileset: String,
    /// Local id of the animated tile.
    pub tile: u32,
    /// Local frame ids in listed order.
    pub frames: Vec<u32>,
    /// Interval taken from the first listed frame.
    pub interval_ms: u64,
    /// Durations of later frames that differ from the first (unused).
    pub ignored_durations_ms: Vec<u64>,
}

impl AnimationSpec {
    fn from_frames(tileset: &str, tile: u32, frames: &[TiledFrame]) -> Self {
        let interval_ms = frames.first().map_or(0, |f| f.duration_ms);
        let ignored_durations_ms = if frames.iter().all(|f| f.duration_ms == interval_ms) {
            Vec::new()
        } else {
            frames.iter().skip(1).map(|f| f.duration_ms).collect()
        };
        Self {
            tileset: tileset.to_string(),
            tile,
            frames: frames.iter().map(|f| f.tile_id).collect(),
            interval_ms,
            ignored_durations_ms,
        }
    }
}

/// Extract every animated tile from a map document, tileset by tileset.
///
/// Only the first frame's duration is used as the interval. Per-frame timing
/// is not supported; specs whose durations vary record the dropped values in
/// [`AnimationSpec::ignored_durations_ms`].
pub fn animation_specs(doc: &TiledMap) -> Vec<AnimationSpec> {
    doc.tilesets
        .iter()
        .flat_map(|set| {
            set.animated_tiles()
                .into_iter()
                .map(|(tile, frames)| AnimationSpec::from_frames(&set.name, tile, frames))
        })
        .collect()
}

/// An animated tile that could not be registered.
#[derive(Debug)]
pub struct LoadFailure {
    /// Tileset name as written in the document.
    pub tileset: String,
    /// Local id of the animated tile.
    pub tile: u32,
    /// Why registration failed.
    pub error: AnimError,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.tileset, self.tile, self.error)
    }
}

/// Something suspicious that did not stop registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// Frames list different durations; only the first is honoured.
    NonUniformDurations {
        /// The definition that was registered.
        handle: DefinitionHandle,
        /// Tileset name.
        tileset: String,
        /// Local id of the animated tile.
        tile: u32,
        /// The interval actually used.
        used_ms: u64,
        /// Durations listed for the remaining frames.
        ignored_ms: Vec<u64>,
    },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonUniformDurations {
                tileset,
                tile,
                used_ms,
                ignored_ms,
                ..
            } => write!(
                f,
                "{tileset}[{tile}]: frame durations differ, using {used_ms}ms for every frame (ignored {ignored_ms:?})"
            ),
        }
    }
}

/// Outcome of loading animations from map metadata.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Definitions registered, in registration order.
    pub registered: Vec<DefinitionHandle>,
    /// Tiles that were skipped.
    pub failures: Vec<LoadFailure>,
    /// Tiles registered with a caveat.
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    /// Return `true` if every animated tile was registered.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl AnimationRegistry {
    /// Register one definition per animated tile in `doc`.
    ///
    /// Tilesets are resolved by name against `grid`. A tile whose tileset is
    /// unknown or whose definition is invalid is reported in
    /// [`LoadReport::failures`] and the rest keep loading.
    pub fn load_from_tilemap_metadata<G>(&mut self, grid: &G, doc: &TiledMap) -> LoadReport
    where
        G: TileGrid + TilesetCatalog + ?Sized,
    {
        let mut report = LoadReport::default();

        for spec in animation_specs(doc) {
            let result = match grid.tileset_by_name(&spec.tileset) {
                Some(tileset) => {
                    self.add_animation(grid, spec.frames.clone(), spec.interval_ms, tileset)
                }
                None => Err(AnimError::TilesetNotFound(spec.tileset.clone())),
            };

            match result {
                Ok(handle) => {
                    if !spec.ignored_durations_ms.is_empty() {
                        tracing::warn!(
                            tileset = %spec.tileset,
                            tile = spec.tile,
                            used_ms = spec.interval_ms,
                            ignored_ms = ?spec.ignored_durations_ms,
                            "non-uniform frame durations, using the first for every frame"
                        );
                        report.warnings.push(LoadWarning::NonUniformDurations {
                            handle,
                            tileset: spec.tileset,
                            tile: spec.tile,
                            used_ms: spec.interval_ms,
                            ignored_ms: spec.ignored_durations_ms,
                        });
                    }
                    report.registered.push(handle);
                }
                Err(error) => {
                    tracing::warn!(
                        tileset = %spec.tileset,
                        tile = spec.tile,
                        %error,
                        "skipping animated tile"
                    );
                    report.failures.push(LoadFailure {
                        tileset: spec.tileset,
                        tile: spec.tile,
                        error,
                    });
                }
            }
        }

        report
    }
}
