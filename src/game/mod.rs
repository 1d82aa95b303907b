//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine can be stepped directly, with no timer involved.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, StepResult};
pub use food::FoodPlacer;
pub use grid::Grid;
pub use state::{Cell, CollisionType, GameState, Snake, Status};
