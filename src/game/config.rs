use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::grid::Grid;

/// Problems with a [`GameConfig`] that would leave no playable grid or loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tile size must be at least one pixel")]
    ZeroTileSize,

    #[error("surface {width}x{height} cannot hold a single {tile_size}px tile")]
    SurfaceTooSmall {
        width: u32,
        height: u32,
        tile_size: u32,
    },

    #[error("grid {width}x{height} has no cells")]
    EmptyGrid { width: usize, height: usize },

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the drawing surface in pixels
    pub surface_width: u32,
    /// Height of the drawing surface in pixels
    pub surface_height: u32,
    /// Edge length of one grid tile in pixels
    pub tile_size: u32,
    /// Period between two update steps
    pub tick_interval_ms: u64,
    /// Seed for food placement; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 400,
            surface_height: 400,
            tile_size: 20,
            tick_interval_ms: 100,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.grid().map(|_| ())
    }

    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::from_surface(self.surface_width, self.surface_height, self.tile_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid().unwrap(), Grid::new(20, 20).unwrap());
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_seed() {
        let config = GameConfig::default().with_seed(7);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_zero_tick() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_validate_rejects_tiny_surface() {
        let config = GameConfig {
            surface_width: 10,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SurfaceTooSmall { width: 10, .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::SurfaceTooSmall {
            width: 10,
            height: 400,
            tile_size: 20,
        };
        assert_eq!(
            err.to_string(),
            "surface 10x400 cannot hold a single 20px tile"
        );
    }
}
