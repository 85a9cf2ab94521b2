//! Game configuration types.
//!
//! - `RoundTiming`: the fixed delays that pace round resolution
//! - `TimerMode`: whether the level clock counts up or down
//! - `GameConfig`: combines all configuration
//!
//! Level *content* (which cards, how many pairs) lives in
//! [`crate::levels::LevelData`]; this module only covers how the game plays.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delays applied while a revealed pair is resolving.
///
/// Every non-terminal round waits its outcome delay (`flip_back` or
/// `destroy`), then `settle`, before the input gate reopens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTiming {
    /// Wait before a mismatched pair is flipped face down.
    pub flip_back: Duration,

    /// Wait before a matched pair is removed from play.
    pub destroy: Duration,

    /// Wait before a bomb pair fails the level.
    pub blast: Duration,

    /// Extra wait after a round clears, before input reopens.
    ///
    /// Keeps a click landing on the last frame of the flip-back from
    /// starting a new pair.
    pub settle: Duration,
}

impl Default for RoundTiming {
    fn default() -> Self {
        Self {
            flip_back: Duration::from_millis(1000),
            destroy: Duration::from_millis(1500),
            blast: Duration::from_millis(1500),
            settle: Duration::from_millis(500),
        }
    }
}

impl RoundTiming {
    /// Create the default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve everything on the next tick. Handy for tests and replays.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            flip_back: Duration::ZERO,
            destroy: Duration::ZERO,
            blast: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_flip_back(mut self, delay: Duration) -> Self {
        self.flip_back = delay;
        self
    }

    /// Set the match destroy delay.
    #[must_use]
    pub fn with_destroy(mut self, delay: Duration) -> Self {
        self.destroy = delay;
        self
    }

    /// Set the bomb blast delay.
    #[must_use]
    pub fn with_blast(mut self, delay: Duration) -> Self {
        self.blast = delay;
        self
    }

    /// Set the settle delay.
    #[must_use]
    pub fn with_settle(mut self, delay: Duration) -> Self {
        self.settle = delay;
        self
    }
}

/// How the level clock runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMode {
    /// Count up from zero with no limit.
    #[default]
    Elapsed,
    /// Count down from the limit; reaching zero fails the level.
    Countdown(Duration),
}

/// Complete game configuration.
///
/// ```
/// use std::time::Duration;
/// use flip_pair::core::{GameConfig, RoundTiming, TimerMode};
///
/// let config = GameConfig::new()
///     .with_timing(RoundTiming::new().with_settle(Duration::from_millis(250)))
///     .with_timer_mode(TimerMode::Countdown(Duration::from_secs(90)))
///     .with_shuffle_seed(7);
///
/// assert_eq!(config.timing.settle, Duration::from_millis(250));
/// assert_eq!(config.shuffle_seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Round resolution delays.
    pub timing: RoundTiming,

    /// Duration of one card flip (half turn).
    pub flip_duration: Duration,

    /// Level clock mode.
    pub timer_mode: TimerMode,

    /// Seed for shuffling the deal. `None` keeps the authored order.
    pub shuffle_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timing: RoundTiming::default(),
            flip_duration: Duration::from_millis(500),
            timer_mode: TimerMode::default(),
            shuffle_seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round timing.
    #[must_use]
    pub fn with_timing(mut self, timing: RoundTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the card flip duration.
    #[must_use]
    pub fn with_flip_duration(mut self, duration: Duration) -> Self {
        assert!(!duration.is_zero(), "Flip duration must be non-zero");
        self.flip_duration = duration;
        self
    }

    /// Set the level clock mode.
    #[must_use]
    pub fn with_timer_mode(mut self, mode: TimerMode) -> Self {
        self.timer_mode = mode;
        self
    }

    /// Shuffle the deal with the given seed.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}
