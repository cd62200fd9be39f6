use tm_core::tiled::TiledMap;
use tm_core::{TileGrid, Tileset, TilesetCatalog};

use crate::config::AnimatorConfig;
use crate::definition::DefinitionHandle;
use crate::driver::{PeriodicDriver, TimerHandle};
use crate::error::AnimResult;
use crate::lifecycle::Lifecycle;
use crate::loader::LoadReport;
use crate::registry::AnimationRegistry;
use crate::scheduler::{FrameScheduler, TickReport};

/// The animation engine for one layer of one grid.
///
/// Owns the registry, the scheduler, and the periodic timer. The grid is
/// not stored: the host lends it to each call, so the single execution
/// context that drives gameplay also drives animation.
///
/// Typical use: register during scene setup, [`start`](Self::start) the
/// driver, and forward each timer firing to [`on_timer`](Self::on_timer).
#[derive(Debug, Clone)]
pub struct TileAnimator {
    registry: AnimationRegistry,
    scheduler: FrameScheduler,
    lifecycle: Lifecycle,
}

impl TileAnimator {
    /// Create an animator with no definitions.
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            registry: AnimationRegistry::new(config.layer),
            scheduler: FrameScheduler::new(),
            lifecycle: Lifecycle::new(config.tick_period),
        }
    }

    /// Register an animation. See [`AnimationRegistry::add_animation`].
    pub fn add_animation<G>(
        &mut self,
        grid: &G,
        frames: Vec<u32>,
        interval_ms: u64,
        tileset: &Tileset,
    ) -> AnimResult<DefinitionHandle>
    where
        G: TileGrid + ?Sized,
    {
        self.registry.add_animation(grid, frames, interval_ms, tileset)
    }

    /// Register every animated tile of a map document.
    /// See [`AnimationRegistry::load_from_tilemap_metadata`].
    pub fn load_from_tilemap_metadata<G>(&mut self, grid: &G, doc: &TiledMap) -> LoadReport
    where
        G: TileGrid + TilesetCatalog + ?Sized,
    {
        self.registry.load_from_tilemap_metadata(grid, doc)
    }

    /// Arm the periodic driver. Does nothing if already running.
    pub fn start<D: PeriodicDriver + ?Sized>(&mut self, driver: &mut D) {
        if self.lifecycle.start(driver) {
            tracing::info!(
                period_ms = self.lifecycle.period().as_millis() as u64,
                definitions = self.registry.len(),
                "tile animation started"
            );
        }
    }

    /// Cancel the periodic driver. Does nothing if not running.
    pub fn stop<D: PeriodicDriver + ?Sized>(&mut self, driver: &mut D) {
        if self.lifecycle.stop(driver) {
            tracing::info!(ticks = self.scheduler.ticks(), "tile animation stopped");
        }
    }

    /// Return `true` while the driver is armed.
    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    /// The armed timer, if running.
    pub fn timer(&self) -> Option<TimerHandle> {
        self.lifecycle.timer()
    }

    /// Handle a driver firing. Ticks only if `handle` is this animator's
    /// armed timer; stale or foreign handles are ignored.
    pub fn on_timer<G>(&mut self, handle: TimerHandle, grid: &mut G, now_ms: u64) -> Option<TickReport>
    where
        G: TileGrid + ?Sized,
    {
        if self.lifecycle.timer() != Some(handle) {
            return None;
        }
        Some(self.tick(grid, now_ms))
    }

    /// Run one tick at `now_ms`, regardless of lifecycle state.
    pub fn tick<G>(&mut self, grid: &mut G, now_ms: u64) -> TickReport
    where
        G: TileGrid + ?Sized,
    {
        self.scheduler.tick(&mut self.registry, grid, now_ms)
    }

    /// The registered definitions.
    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    /// Running tick counters.
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }
}
