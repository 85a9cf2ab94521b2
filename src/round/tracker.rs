//! Selection tracking.
//!
//! The tracker holds the revealed-but-unresolved cards of the current
//! round (at most two) and the input gate. It decides which offers are
//! accepted; it never evaluates or applies anything.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardIdentity;
use crate::core::entity::CardId;

/// A revealed card waiting for resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub card: CardId,
    pub identity: CardIdentity,
}

/// Why an offer was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// A round is resolving or settling.
    GateClosed,
    /// The card is already the first selection.
    SameCard,
    /// The card has been removed from play.
    NotInPlay,
    /// The card is still mid-flip.
    Rotating,
    /// No card with that ID was dealt.
    UnknownCard,
    /// The level has already been won or lost.
    LevelOver,
}

/// What the tracker did with an offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Offer {
    /// Stored as the first selection; waiting for a second.
    First,
    /// Stored as the second selection; the gate is now closed.
    Second,
    /// Dropped without any state change.
    Ignored(IgnoreReason),
}

/// Current round's selections and the input gate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectionTracker {
    entries: SmallVec<[Selection; 2]>,
    gate_open: bool,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
            gate_open: true,
        }
    }
}

impl SelectionTracker {
    /// Create an empty tracker with the gate open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a clicked card.
    ///
    /// - empty and open: stored as first
    /// - one stored and a different card: stored as second, gate closes
    /// - anything else: ignored
    pub fn offer(&mut self, card: CardId, identity: &CardIdentity) -> Offer {
        if !self.gate_open {
            return Offer::Ignored(IgnoreReason::GateClosed);
        }

        match self.entries.len() {
            0 => {
                self.entries.push(Selection {
                    card,
                    identity: identity.clone(),
                });
                Offer::First
            }
            1 if self.entries[0].card == card => Offer::Ignored(IgnoreReason::SameCard),
            1 => {
                self.entries.push(Selection {
                    card,
                    identity: identity.clone(),
                });
                self.gate_open = false;
                Offer::Second
            }
            // Two entries always means the gate is closed
            _ => Offer::Ignored(IgnoreReason::GateClosed),
        }
    }

    /// The stored pair, once both selections are in.
    #[must_use]
    pub fn pair(&self) -> Option<(&Selection, &Selection)> {
        match self.entries.as_slice() {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// The first selection, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Selection> {
        self.entries.first()
    }

    /// Number of stored selections (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Is input currently accepted?
    #[must_use]
    pub fn is_gate_open(&self) -> bool {
        self.gate_open
    }

    /// Drop all selections. The gate is left as it is.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Close the gate without a pair (level over).
    pub fn close_gate(&mut self) {
        self.gate_open = false;
    }

    /// Reopen the gate after a round has settled.
    pub fn open_gate(&mut self) {
        debug_assert!(self.entries.is_empty(), "gate reopened with pending selections");
        self.gate_open = true;
    }
}
