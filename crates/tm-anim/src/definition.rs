use std::fmt;

use tm_core::{TileId, TilePos, Tileset};

use crate::error::{AnimError, AnimResult};

/// Identifies a registered animation. Handles are registration indices and
/// stay valid for the lifetime of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionHandle(pub usize);

impl fmt::Display for DefinitionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A group of grid cells that cycle through the same frame sequence.
#[derive(Debug, Clone)]
pub struct AnimationDefinition {
    frames: Vec<u32>,
    global_frames: Vec<TileId>,
    interval_ms: u64,
    tileset: Tileset,
    locations: Vec<TilePos>,
    current_frame: usize,
}

impl AnimationDefinition {
    /// Create a definition with no captured locations.
    ///
    /// Fails if `frames` is empty or `interval_ms` is zero: either would make
    /// the frame computation divide by zero. Also fails if a frame's global id
    /// would not fit in a [`TileId`].
    pub fn new(frames: Vec<u32>, interval_ms: u64, tileset: Tileset) -> AnimResult<Self> {
        if frames.is_empty() {
            return Err(AnimError::invalid("frame list is empty"));
        }
        if interval_ms == 0 {
            return Err(AnimError::invalid("frame interval must be positive"));
        }
        let global_frames = frames
            .iter()
            .map(|f| {
                tileset.global_id(*f).ok_or_else(|| {
                    AnimError::invalid(format!(
                        "frame {f} overflows the tile id range of tileset \"{}\" (first id {})",
                        tileset.name, tileset.first_gid
                    ))
                })
            })
            .collect::<AnimResult<Vec<_>>>()?;
        Ok(Self {
            frames,
            global_frames,
            interval_ms,
            tileset,
            locations: Vec::new(),
            current_frame: 0,
        })
    }

    /// Frame that should be showing at `now_ms`.
    ///
    /// Depends only on `now_ms` and this definition's frames and interval, so
    /// a late or skipped tick lands on the same frame a punctual one would.
    pub fn frame_index_at(&self, now_ms: u64) -> usize {
        ((now_ms / self.interval_ms) % self.frames.len() as u64) as usize
    }

    /// Global tile id for frame `index`.
    pub fn global_frame(&self, index: usize) -> TileId {
        self.global_frames[index]
    }

    /// Global ids of every frame, in frame order.
    pub fn global_frames(&self) -> impl Iterator<Item = TileId> + '_ {
        self.global_frames.iter().copied()
    }

    /// Local frame ids in display order.
    pub fn frames(&self) -> &[u32] {
        &self.frames
    }

    /// How long each frame is shown.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// The tileset frames are numbered in.
    pub fn tileset(&self) -> &Tileset {
        &self.tileset
    }

    /// Cells captured at registration time.
    pub fn locations(&self) -> &[TilePos] {
        &self.locations
    }

    /// The frame last written to the grid.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub(crate) fn set_locations(&mut self, locations: Vec<TilePos>) {
        self.locations = locations;
    }

    pub(crate) fn set_current_frame(&mut self, frame: usize) {
        self.current_frame = frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn water() -> Tileset {
        Tileset::new("water", 1)
    }

    #[test]
    fn empty_frames_rejected() {
        let err = AnimationDefinition::new(vec![], 100, water()).unwrap_err();
        assert!(matches!(err, AnimError::InvalidDefinition(_)));
    }

    #[test]
    fn zero_interval_rejected() {
        let err = AnimationDefinition::new(vec![1, 2], 0, water()).unwrap_err();
        assert!(matches!(err, AnimError::InvalidDefinition(_)));
    }

    #[test]
    fn overflowing_frame_rejected() {
        let set = Tileset::new("edge", 2);
        let err = AnimationDefinition::new(vec![0, u32::MAX], 100, set).unwrap_err();
        assert!(matches!(err, AnimError::InvalidDefinition(ref msg) if msg.contains("overflows")));
    }

    #[test]
    fn starts_on_first_frame_without_locations() {
        let def = AnimationDefinition::new(vec![5, 6, 7], 1000, water()).unwrap();
        assert_eq!(def.current_frame(), 0);
        assert!(def.locations().is_empty());
    }

    #[test]
    fn frame_index_follows_wall_clock() {
        let def = AnimationDefinition::new(vec![5, 6, 7], 1000, water()).unwrap();
        assert_eq!(def.frame_index_at(0), 0);
        assert_eq!(def.frame_index_at(999), 0);
        assert_eq!(def.frame_index_at(1000), 1);
        assert_eq!(def.frame_index_at(1500), 1);
        assert_eq!(def.frame_index_at(2999), 2);
        assert_eq!(def.frame_index_at(3000), 0);
    }

    #[test]
    fn global_frames_add_base_offset() {
        let def = AnimationDefinition::new(vec![5, 6, 7], 1000, water()).unwrap();
        assert_eq!(def.global_frame(1), 7);
        assert_eq!(def.global_frames().collect::<Vec<_>>(), vec![6, 7, 8]);
    }

    proptest! {
        #[test]
        fn boundary_law(
            frames in prop::collection::vec(0u32..64, 1..8),
            interval in 1u64..5_000,
            k in 0u64..10_000,
        ) {
            let len = frames.len() as u64;
            let def = AnimationDefinition::new(frames, interval, water()).unwrap();
            prop_assert_eq!(def.frame_index_at(k * interval) as u64, k % len);
        }

        #[test]
        fn frame_is_constant_within_an_interval(
            frames in prop::collection::vec(0u32..64, 1..8),
            interval in 1u64..5_000,
            k in 0u64..10_000,
            offset in 0u64..5_000,
        ) {
            let def = AnimationDefinition::new(frames, interval, water()).unwrap();
            let start = k * interval;
            prop_assert_eq!(
                def.frame_index_at(start),
                def.frame_index_at(start + offset % interval)
            );
        }
    }
}
