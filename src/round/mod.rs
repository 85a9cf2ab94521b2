//! Round resolution: the matching game loop.
//!
//! - [`SelectionTracker`]: which cards are revealed and whether input is open
//! - [`evaluate`]: pure comparison of two revealed cards
//! - [`RoundController`]: sequences evaluations into timed effects
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use flip_pair::cards::CardIdentity;
//! use flip_pair::core::{CardId, GameConfig};
//! use flip_pair::round::{Offer, RoundController, RoundPhase};
//! use flip_pair::table::Table;
//!
//! let config = GameConfig::new();
//! let table = Table::deal(
//!     vec![CardIdentity::face(1), CardIdentity::face(2)],
//!     config.flip_duration,
//!     None,
//! );
//! let mut game = RoundController::new(table, 1, &config);
//!
//! assert_eq!(game.offer(CardId::new(0)), Offer::First);
//! assert_eq!(game.offer(CardId::new(1)), Offer::Second);
//!
//! // Flip-back delay, then the settle delay
//! game.advance(Duration::from_millis(1000));
//! assert_eq!(game.phase(), RoundPhase::Settling);
//! game.advance(Duration::from_millis(500));
//! assert_eq!(game.phase(), RoundPhase::Idle);
//! ```

mod controller;
mod evaluator;
mod event;
mod outcome;
mod tracker;

pub use controller::{RoundController, RoundPhase};
pub use evaluator::{evaluate, MatchOutcome};
pub use event::{GameEvent, RoundRecord};
pub use outcome::{FailReason, LevelOutcome, LevelStatus};
pub use tracker::{IgnoreReason, Offer, Selection, SelectionTracker};
