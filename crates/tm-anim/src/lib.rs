//! Time-driven tile animation for Tilemotion.
//!
//! Animated tiles are declared as [`AnimationDefinition`]s: a frame sequence,
//! a frame interval, and a tileset. Registration scans the grid once to
//! capture the cells showing those frames; after that, each tick derives the
//! frame to show from wall-clock time and rewrites only the captured cells,
//! batching the layer's dirty mark and derived recomputation.
//!
//! ```
//! use tm_anim::{AnimatorConfig, TileAnimator};
//! use tm_core::{LayerId, TileGrid, TileMap, TilePos, Tileset};
//!
//! let mut map = TileMap::new(4, 4);
//! map.add_empty_layer("ground");
//! map.set_tile(LayerId(0), TilePos::new(2, 3), 5);
//!
//! let mut animator = TileAnimator::new(AnimatorConfig::default());
//! animator
//!     .add_animation(&map, vec![5, 6, 7], 1000, &Tileset::new("water", 0))
//!     .unwrap();
//!
//! animator.tick(&mut map, 1500);
//! assert_eq!(map.tile(LayerId(0), TilePos::new(2, 3)), 6);
//! ```

/// The engine facade owning registry, scheduler, and lifecycle.
pub mod animator;
/// Configuration types for the animator.
pub mod config;
/// Animation definitions and their handles.
pub mod definition;
/// The periodic driver seam and an in-process manual driver.
pub mod driver;
/// Error types for the animation crate.
pub mod error;
/// One-shot spatial scan capturing animated cells.
pub mod indexer;
/// Idempotent start/stop of the periodic callback.
pub mod lifecycle;
/// Translation of Tiled map metadata into definitions.
pub mod loader;
/// Ordered storage of definitions for one layer.
pub mod registry;
/// Per-tick frame computation and grid writes.
pub mod scheduler;
/// Overlap detection between definitions.
pub mod validate;

/// Re-export of [`animator::TileAnimator`].
pub use animator::TileAnimator;
/// Re-export of [`config::AnimatorConfig`].
pub use config::AnimatorConfig;
/// Re-exports of [`definition::AnimationDefinition`] and [`definition::DefinitionHandle`].
pub use definition::{AnimationDefinition, DefinitionHandle};
/// Re-exports of the driver types.
pub use driver::{Firing, ManualDriver, PeriodicDriver, TimerHandle};
/// Re-exports of [`error::AnimError`] and [`error::AnimResult`].
pub use error::{AnimError, AnimResult};
/// Re-export of [`indexer::index_locations`].
pub use indexer::index_locations;
/// Re-export of [`lifecycle::Lifecycle`].
pub use lifecycle::Lifecycle;
/// Re-exports of the loader result types.
pub use loader::{AnimationSpec, LoadFailure, LoadReport, LoadWarning, animation_specs};
/// Re-export of [`registry::AnimationRegistry`].
pub use registry::AnimationRegistry;
/// Re-exports of [`scheduler::FrameScheduler`] and [`scheduler::TickReport`].
pub use scheduler::{FrameScheduler, TickReport};
/// Re-exports of [`validate::find_overlaps`] and [`validate::Overlap`].
pub use validate::{Overlap, find_overlaps};
