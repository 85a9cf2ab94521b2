//! Core types: card IDs, RNG, configuration.
//!
//! These are the building blocks every other module uses. Nothing here
//! knows about rounds or levels.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::CardId;
pub use rng::GameRng;
pub use config::{GameConfig, RoundTiming, TimerMode};
