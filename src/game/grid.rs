use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use super::state::Cell;

/// Fixed-size lattice the game is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// A grid needs at least one cell in each dimension
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        Ok(Self { width, height })
    }

    /// Derive the grid from a drawing surface measured in pixels.
    ///
    /// Floor division: a strip narrower than one tile on the right or bottom
    /// edge is left unused.
    pub fn from_surface(
        surface_width: u32,
        surface_height: u32,
        tile_size: u32,
    ) -> Result<Self, ConfigError> {
        if tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }

        let width = surface_width / tile_size;
        let height = surface_height / tile_size;

        Self::new(width as usize, height as usize).map_err(|_| ConfigError::SurfaceTooSmall {
            width: surface_width,
            height: surface_height,
            tile_size,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a cell is within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// Starting cell of a fresh snake
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}
