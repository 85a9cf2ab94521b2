//! Card instances - live cards on the table.
//!
//! `CardInstance` couples an immutable [`CardIdentity`] with the mutable
//! state of one dealt card: whether it is face up, whether a match has
//! consumed it, and its flip animation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::flip::FlipAnimation;
use super::identity::CardIdentity;
use crate::core::entity::CardId;

/// Logical visibility of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Face down.
    #[default]
    Hidden,
    /// Face up.
    Revealed,
}

/// A dealt card.
///
/// `visibility` is the logical state the round controller reasons about.
/// `flip` is the visual state. It may lag behind while a flip runs, but
/// always settles on the face `visibility` asks for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this instance.
    pub id: CardId,

    identity: CardIdentity,

    /// Face up or face down.
    pub visibility: Visibility,

    /// Set once a confirmed match removes this card from play.
    pub removed: bool,

    /// Flip animation for the presentation layer.
    pub flip: FlipAnimation,
}

impl CardInstance {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, identity: CardIdentity, flip_duration: Duration) -> Self {
        Self {
            id,
            identity,
            visibility: Visibility::Hidden,
            removed: false,
            flip: FlipAnimation::new(flip_duration),
        }
    }

    /// The card's face-up identity.
    #[must_use]
    pub fn identity(&self) -> &CardIdentity {
        &self.identity
    }

    /// Is the card still on the table?
    #[must_use]
    pub fn in_play(&self) -> bool {
        !self.removed
    }

    /// Is the card face down and still in play?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.in_play() && self.visibility == Visibility::Hidden
    }

    /// Turn the card face up and start its flip.
    pub fn reveal(&mut self) {
        self.visibility = Visibility::Revealed;
        self.sync_flip();
    }

    /// Turn the card face down and start its flip back.
    ///
    /// If a flip is still running, the flip back starts once it ends.
    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
        self.sync_flip();
    }

    /// Advance the flip animation by one frame.
    pub fn advance(&mut self, dt: Duration) {
        self.flip.advance(dt);
        self.sync_flip();
    }

    /// Start a flip if the drawn face disagrees with `visibility` and no
    /// flip is running.
    fn sync_flip(&mut self) {
        let wants_front = self.visibility == Visibility::Revealed;
        if self.flip.showing_front() != wants_front {
            self.flip.start();
        }
    }

    /// Take the card out of play.
    pub fn remove(&mut self) {
        self.removed = true;
    }
}
