//! Repeating timer that drives the update step

pub mod ticker;

pub use ticker::Ticker;
