//! Level progress and status.

use serde::{Deserialize, Serialize};

/// Why a level was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailReason {
    /// Two bombs were paired.
    Bomb,
    /// The countdown ran out.
    TimeUp,
}

/// Where the level stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelStatus {
    /// Still being played.
    #[default]
    Playing,
    /// All required pairs confirmed.
    Complete,
    /// Lost; no further input until the level is reloaded.
    Failed(FailReason),
}

impl LevelStatus {
    /// Has the level ended (won or lost)?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, LevelStatus::Playing)
    }
}

/// Confirmed pairs versus the level's requirement.
///
/// The counter only moves up, and only through [`LevelOutcome::record_match`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelOutcome {
    confirmed_pairs: u32,
    required_pairs: u32,
}

impl LevelOutcome {
    /// Start a level needing `required_pairs` matches.
    #[must_use]
    pub const fn new(required_pairs: u32) -> Self {
        Self {
            confirmed_pairs: 0,
            required_pairs,
        }
    }

    /// Matches confirmed so far.
    #[must_use]
    pub const fn confirmed_pairs(&self) -> u32 {
        self.confirmed_pairs
    }

    /// Matches needed to complete the level.
    #[must_use]
    pub const fn required_pairs(&self) -> u32 {
        self.required_pairs
    }

    /// Has the requirement been met?
    ///
    /// A level requiring zero pairs is never complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.required_pairs > 0 && self.confirmed_pairs >= self.required_pairs
    }

    /// Count one confirmed match.
    ///
    /// Returns `true` only for the match that first meets the requirement.
    pub fn record_match(&mut self) -> bool {
        let was_complete = self.is_complete();
        self.confirmed_pairs += 1;
        !was_complete && self.is_complete()
    }
}
