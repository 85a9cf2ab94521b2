//! Events emitted for the presentation layer.
//!
//! The controller queues events as it changes state. The host drains the
//! queue once per frame and drives the UI from it: flip cards, destroy
//! matched cards, show the win or loss panel.

use serde::{Deserialize, Serialize};

use super::evaluator::MatchOutcome;
use super::outcome::FailReason;
use crate::core::entity::CardId;

/// Something the presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An offer was accepted and the card turned face up.
    CardRevealed(CardId),

    /// A pair was evaluated. Effects follow after the outcome's delay.
    PairEvaluated {
        first: CardId,
        second: CardId,
        outcome: MatchOutcome,
    },

    /// A matched pair left play.
    CardsRemoved(CardId, CardId),

    /// A mismatched pair turned face down.
    CardsHidden(CardId, CardId),

    /// The round settled and input is accepted again.
    InputReopened,

    /// The last required pair was confirmed.
    LevelComplete { confirmed_pairs: u32 },

    /// The level was lost.
    LevelFailed(FailReason),
}

impl GameEvent {
    /// Does this event end the level?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::LevelComplete { .. } | GameEvent::LevelFailed(_))
    }
}

/// One resolved pair, kept in the controller's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,
    pub first: CardId,
    pub second: CardId,
    pub outcome: MatchOutcome,
}
