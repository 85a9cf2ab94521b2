//! Level clock.
//!
//! `LevelTimer` counts up (`TimerMode::Elapsed`) or down
//! (`TimerMode::Countdown`) while running, and formats itself as `MM:SS`
//! for the HUD.
//!
//! ```
//! use std::time::Duration;
//! use flip_pair::core::TimerMode;
//! use flip_pair::timer::LevelTimer;
//!
//! let mut timer = LevelTimer::new(TimerMode::Elapsed);
//! timer.advance(Duration::from_secs(75));
//! assert_eq!(timer.display(), "01:15");
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::TimerMode;

/// Format a duration as `MM:SS`.
///
/// Minutes are not wrapped, so an hour reads `60:00`.
#[must_use]
pub fn format_clock(time: Duration) -> String {
    let total = time.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Clock for one level attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTimer {
    mode: TimerMode,
    elapsed: Duration,
    running: bool,
}

impl LevelTimer {
    /// Create a running timer at zero.
    #[must_use]
    pub fn new(mode: TimerMode) -> Self {
        Self {
            mode,
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    /// The clock mode.
    #[must_use]
    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Time accumulated while running.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Time left on a countdown. `None` in elapsed mode.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        match self.mode {
            TimerMode::Elapsed => None,
            TimerMode::Countdown(limit) => Some(limit.saturating_sub(self.elapsed)),
        }
    }

    /// Has a countdown reached zero?
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }

    /// Is the clock running?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the clock. Further ticks are ignored.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Add one frame's delta.
    pub fn advance(&mut self, dt: Duration) {
        if self.running {
            self.elapsed += dt;
        }
    }

    /// The value the HUD shows: elapsed, or remaining on a countdown.
    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining().unwrap_or(self.elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(60)), "01:00");
        assert_eq!(format_clock(Duration::from_secs(3600)), "60:00");
    }

    #[test]
    fn test_elapsed_mode() {
        let mut timer = LevelTimer::new(TimerMode::Elapsed);
        timer.advance(Duration::from_secs(3));
        timer.advance(Duration::from_millis(500));

        assert_eq!(timer.elapsed(), Duration::from_millis(3500));
        assert_eq!(timer.remaining(), None);
        assert!(!timer.is_expired());
        assert_eq!(timer.display(), "00:03");
    }

    #[test]
    fn test_countdown_mode() {
        let mut timer = LevelTimer::new(TimerMode::Countdown(Duration::from_secs(90)));
        assert_eq!(timer.display(), "01:30");

        timer.advance(Duration::from_secs(30));
        assert_eq!(timer.remaining(), Some(Duration::from_secs(60)));
        assert!(!timer.is_expired());

        timer.advance(Duration::from_secs(120));
        assert_eq!(timer.remaining(), Some(Duration::ZERO));
        assert!(timer.is_expired());
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn test_stop_freezes_clock() {
        let mut timer = LevelTimer::new(TimerMode::Elapsed);
        timer.advance(Duration::from_secs(5));
        timer.stop();
        timer.advance(Duration::from_secs(5));

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::from_secs(5));
    }
}
