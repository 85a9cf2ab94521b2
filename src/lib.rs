//! # flip-pair
//!
//! Game core for a card-matching ("memory") game.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The core never renders. It accepts clicks, emits
//!    events, and exposes state for a presentation layer to draw.
//!
//! 2. **Tick-Driven**: All pacing (flip-back, destroy, blast and settle
//!    delays, flip animations, the level clock) advances through explicit
//!    `advance(dt)` calls. No threads, no async runtime.
//!
//! 3. **Owned, Not Global**: The host owns a `RoundController` (or a
//!    `Session`) and passes clicks to it directly.
//!
//! ## Modules
//!
//! - `core`: Card IDs, deal RNG, configuration
//! - `cards`: Card identities, instances, flip animation
//! - `table`: Dealt cards and their order
//! - `round`: Selection tracking, pair evaluation, round controller
//! - `levels`: Authored level data and progress storage
//! - `timer`: Elapsed/countdown level clock
//! - `session`: Level progression

pub mod core;
pub mod cards;
pub mod table;
pub mod round;
pub mod levels;
pub mod timer;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{CardId, GameConfig, GameRng, RoundTiming, TimerMode};

pub use crate::cards::{CardIdentity, CardInstance, FaceKind, FaceOffType, FlipAnimation, SpriteRef, Visibility};

pub use crate::table::Table;

pub use crate::round::{
    evaluate, FailReason, GameEvent, IgnoreReason, LevelOutcome, LevelStatus, MatchOutcome,
    Offer, RoundController, RoundPhase, RoundRecord, Selection, SelectionTracker,
};

pub use crate::levels::{CardDetails, FaceOff, FaceOn, GameLevelData, LevelData, MemoryProgress, ProgressStore};

pub use crate::timer::LevelTimer;

pub use crate::session::Session;

pub use crate::error::{LevelError, Result};
