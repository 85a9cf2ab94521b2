//! Level content and progression.
//!
//! - `GameLevelData` / `LevelData` / `CardDetails`: authored levels and the
//!   data-side editing operations (add/delete levels, add/remove cards)
//! - `ProgressStore`: where the current level index is persisted

pub mod data;
pub mod progress;

pub use data::{CardDetails, FaceOff, FaceOn, GameLevelData, LevelData};
pub use progress::{MemoryProgress, ProgressStore};
