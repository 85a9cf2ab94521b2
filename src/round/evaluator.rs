//! Pair evaluation.

use serde::{Deserialize, Serialize};

use crate::cards::CardIdentity;

/// Result of comparing two revealed cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Two bombs: the level is lost.
    Lose,
    /// Same face: both cards leave play.
    Match,
    /// Different faces: both cards flip back.
    Mismatch,
}

impl MatchOutcome {
    /// Does this outcome end the level regardless of progress?
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, MatchOutcome::Lose)
    }
}

/// Compare two revealed identities.
///
/// The bomb check runs first, so two bombs lose even though their faces
/// are equal. A bomb paired with an ordinary face is a plain mismatch.
///
/// ```
/// use flip_pair::cards::CardIdentity;
/// use flip_pair::round::{evaluate, MatchOutcome};
///
/// let a = CardIdentity::face(1);
/// assert_eq!(evaluate(&a, &CardIdentity::face(1)), MatchOutcome::Match);
/// assert_eq!(evaluate(&a, &CardIdentity::face(2)), MatchOutcome::Mismatch);
/// assert_eq!(evaluate(&CardIdentity::bomb(), &CardIdentity::bomb()), MatchOutcome::Lose);
/// ```
#[must_use]
pub fn evaluate(first: &CardIdentity, second: &CardIdentity) -> MatchOutcome {
    if first.is_bomb() && second.is_bomb() {
        MatchOutcome::Lose
    } else if first.same_face(second) {
        MatchOutcome::Match
    } else {
        MatchOutcome::Mismatch
    }
}
