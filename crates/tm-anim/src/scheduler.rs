use tm_core::TileGrid;

use crate::definition::DefinitionHandle;
use crate::registry::AnimationRegistry;

/// What a single tick changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The time the tick was evaluated at.
    pub now_ms: u64,
    /// Definitions that switched frame, in registration order.
    pub changed: Vec<DefinitionHandle>,
    /// Number of cell writes issued.
    pub cells_written: usize,
    /// Whether derived layer data was recomputed.
    pub recomputed: bool,
}

impl TickReport {
    /// Return `true` if the tick left the grid untouched.
    pub fn is_idle(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Applies registered animations to the grid from the current time.
///
/// Each tick derives every definition's frame from `now_ms` alone and writes
/// only definitions whose frame differs from the one last applied. All writes
/// of a tick share one dirty mark and one derived recomputation.
#[derive(Debug, Default, Clone)]
pub struct FrameScheduler {
    ticks: u64,
    cells_written: u64,
    recomputes: u64,
}

impl FrameScheduler {
    /// Create a scheduler with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one tick at `now_ms`.
    pub fn tick<G>(&mut self, registry: &mut AnimationRegistry, grid: &mut G, now_ms: u64) -> TickReport
    where
        G: TileGrid + ?Sized,
    {
        let layer = registry.layer();
        let mut report = TickReport {
            now_ms,
            ..TickReport::default()
        };

        for (handle, definition) in registry.iter_mut() {
            let frame = definition.frame_index_at(now_ms);
            if frame == definition.current_frame() {
                continue;
            }

            let tile = definition.global_frame(frame);
            for pos in definition.locations() {
                grid.set_tile(layer, *pos, tile);
            }
            report.cells_written += definition.locations().len();
            definition.set_current_frame(frame);
            grid.mark_layer_dirty(layer);
            report.changed.push(handle);
        }

        if !report.changed.is_empty() {
            grid.recompute_derived(layer);
            report.recomputed = true;
            self.recomputes += 1;
            tracing::trace!(
                now_ms,
                changed = report.changed.len(),
                cells = report.cells_written,
                "applied tile animation frames"
            );
        }

        self.ticks += 1;
        self.cells_written += report.cells_written as u64;
        report
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Cell writes issued so far.
    pub fn cells_written(&self) -> u64 {
        self.cells_written
    }

    /// Derived recomputations triggered so far.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}
