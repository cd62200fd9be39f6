use std::time::Duration;

use tm_core::LayerId;

/// Configuration for a [`TileAnimator`](crate::TileAnimator).
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    /// How often the periodic driver should fire the animator.
    pub tick_period: Duration,
    /// The layer whose cells are animated.
    pub layer: LayerId,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(20),
            layer: LayerId(0),
        }
    }
}

impl AnimatorConfig {
    /// Set the period the driver is armed with.
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Set the animated layer.
    pub fn with_layer(mut self, layer: LayerId) -> Self {
        self.layer = layer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = AnimatorConfig::default();
        assert_eq!(config.tick_period, Duration::from_millis(20));
        assert_eq!(config.layer, LayerId(0));
    }

    #[test]
    fn config_builder_chain() {
        let config = AnimatorConfig::default()
            .with_tick_period(Duration::from_millis(50))
            .with_layer(LayerId(2));
        assert_eq!(config.tick_period, Duration::from_millis(50));
        assert_eq!(config.layer, LayerId(2));
    }
}
