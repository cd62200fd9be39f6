use tm_core::{LayerId, TileGrid, Tileset};

use crate::definition::{AnimationDefinition, DefinitionHandle};
use crate::error::AnimResult;
use crate::indexer::index_locations;

/// Owns the animation definitions of one animated layer.
///
/// Definitions are kept in registration order, which is also the order the
/// scheduler applies them in. There is no way to remove a definition.
#[derive(Debug, Clone)]
pub struct AnimationRegistry {
    layer: LayerId,
    definitions: Vec<AnimationDefinition>,
}

impl AnimationRegistry {
    /// Create an empty registry for `layer`.
    pub fn new(layer: LayerId) -> Self {
        Self {
            layer,
            definitions: Vec::new(),
        }
    }

    /// Register an animation and capture the cells it currently occupies.
    ///
    /// Scans the whole layer once, so registration costs
    /// `O(width * height)`; ticks only ever touch the captured cells.
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
        let mut definition = AnimationDefinition::new(frames, interval_ms, tileset.clone())?;
        definition.set_locations(index_locations(
            grid,
            self.layer,
            tileset,
            definition.frames(),
        ));

        let handle = DefinitionHandle(self.definitions.len());
        tracing::debug!(
            %handle,
            tileset = %tileset.name,
            frames = ?definition.frames(),
            interval_ms,
            locations = definition.locations().len(),
            "registered tile animation"
        );
        self.definitions.push(definition);
        Ok(handle)
    }

    /// The animated layer.
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// Get a definition by handle.
    pub fn get(&self, handle: DefinitionHandle) -> Option<&AnimationDefinition> {
        self.definitions.get(handle.0)
    }

    /// Iterate definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (DefinitionHandle, &AnimationDefinition)> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (DefinitionHandle(i), d))
    }

    pub(crate) fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (DefinitionHandle, &mut AnimationDefinition)> {
        self.definitions
            .iter_mut()
            .enumerate()
            .map(|(i, d)| (DefinitionHandle(i), d))
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Return `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Total number of captured cells across all definitions.
    pub fn location_count(&self) -> usize {
        self.definitions.iter().map(|d| d.locations().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnimError;
    use tm_core::{TileMap, TilePos};

    fn test_map() -> TileMap {
        let mut map = TileMap::new(5, 5);
        map.add_empty_layer("ground");
        map.set_tile(LayerId(0), TilePos::new(2, 3), 5);
        map.set_tile(LayerId(0), TilePos::new(0, 0), 6);
        map
    }

    #[test]
    fn add_animation_captures_locations() {
        let map = test_map();
        let mut registry = AnimationRegistry::new(LayerId(0));
        let set = Tileset::new("water", 0);

        let handle = registry.add_animation(&map, vec![5, 6, 7], 1000, &set).unwrap();

        assert_eq!(handle, DefinitionHandle(0));
        let def = registry.get(handle).unwrap();
        assert_eq!(def.locations(), &[TilePos::new(0, 0), TilePos::new(2, 3)]);
        assert_eq!(registry.location_count(), 2);
    }

    #[test]
    fn registration_order_is_preserved() {
        let map = test_map();
        let mut registry = AnimationRegistry::new(LayerId(0));
        let set = Tileset::new("water", 0);

        let a = registry.add_animation(&map, vec![5], 100, &set).unwrap();
        let b = registry.add_animation(&map, vec![6], 200, &set).unwrap();

        let order: Vec<_> = registry.iter().map(|(h, d)| (h, d.interval_ms())).collect();
        assert_eq!(order, vec![(a, 100), (b, 200)]);
    }

    #[test]
    fn empty_frames_leave_registry_unchanged() {
        let map = test_map();
        let mut registry = AnimationRegistry::new(LayerId(0));
        let set = Tileset::new("water", 0);
        registry.add_animation(&map, vec![5], 100, &set).unwrap();

        let err = registry.add_animation(&map, vec![], 100, &set).unwrap_err();

        assert!(matches!(err, AnimError::InvalidDefinition(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn zero_matches_is_valid() {
        let map = test_map();
        let mut registry = AnimationRegistry::new(LayerId(0));
        let set = Tileset::new("lava", 50);

        let handle = registry.add_animation(&map, vec![0, 1], 250, &set).unwrap();

        assert!(registry.get(handle).unwrap().locations().is_empty());
        assert!(!registry.is_empty());
    }

    #[test]
    fn locations_are_a_snapshot() {
        let mut map = test_map();
        let mut registry = AnimationRegistry::new(LayerId(0));
        let set = Tileset::new("water", 0);
        let handle = registry.add_animation(&map, vec![5], 100, &set).unwrap();

        map.set_tile(LayerId(0), TilePos::new(4, 4), 5);
        map.set_tile(LayerId(0), TilePos::new(2, 3), 0);

        assert_eq!(
            registry.get(handle).unwrap().locations(),
            &[TilePos::new(2, 3)]
        );
    }
}
