//! Grid Snake - the classic single-player Snake game
//!
//! This library provides:
//! - Core game logic, free of I/O and timers (game module)
//! - A cancellable tick scheduler (scheduler module)
//! - TUI rendering and keyboard input (render and input modules)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scheduler;
