//! Level progression across a play session.
//!
//! A `Session` owns the level list, the progress store, and the
//! controller for the level being played. The stored level index is read
//! once when the session starts and written once per advance.

use std::time::Duration;

use log::{info, warn};

use crate::core::config::GameConfig;
use crate::core::entity::CardId;
use crate::error::{LevelError, Result};
use crate::levels::{GameLevelData, LevelData, ProgressStore};
use crate::round::{GameEvent, LevelStatus, Offer, RoundController};

/// A play session over an ordered list of levels.
///
/// ```
/// use std::time::Duration;
/// use flip_pair::cards::FaceKind;
/// use flip_pair::core::{CardId, GameConfig};
/// use flip_pair::levels::{GameLevelData, LevelData, MemoryProgress};
/// use flip_pair::session::Session;
///
/// let mut levels = GameLevelData::new();
/// levels.levels.push(LevelData::new("One").with_pairs(1)
///     .with_card(FaceKind::Face(1)).with_card(FaceKind::Face(1)));
/// levels.levels.push(LevelData::new("Two"));
///
/// let mut session = Session::start(levels, MemoryProgress::new(), GameConfig::new()).unwrap();
/// session.offer(CardId::new(0));
/// session.offer(CardId::new(1));
/// session.tick(Duration::from_secs(2));
///
/// assert_eq!(session.next_level().unwrap(), Some(1));
/// assert_eq!(session.level().level_name, "Two");
/// ```
pub struct Session<S: ProgressStore> {
    levels: GameLevelData,
    store: S,
    config: GameConfig,
    index: usize,
    controller: RoundController,
}

impl<S: ProgressStore> Session<S> {
    /// Start at the stored level (or the first level if none is stored).
    ///
    /// A stored index past the end of the list falls back to level 0.
    pub fn start(levels: GameLevelData, store: S, config: GameConfig) -> Result<Self> {
        let stored = store.load_level_index().unwrap_or(0);
        let index = if stored < levels.len() {
            stored
        } else {
            warn!(
                "Stored level index {} out of range ({} levels), starting at 0",
                stored,
                levels.len()
            );
            0
        };

        let controller = RoundController::for_level(levels.level(index)?, &config)?;

        Ok(Self {
            levels,
            store,
            config,
            index,
            controller,
        })
    }

    /// Index of the level being played.
    #[must_use]
    pub fn level_index(&self) -> usize {
        self.index
    }

    /// The level being played.
    #[must_use]
    pub fn level(&self) -> &LevelData {
        &self.levels.levels[self.index]
    }

    /// The controller for the current level.
    #[must_use]
    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    /// The progress store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Offer a clicked card to the current level.
    pub fn offer(&mut self, card: CardId) -> Offer {
        self.controller.offer(card)
    }

    /// Advance one frame and return the events it produced, including any
    /// queued by offers since the previous tick.
    pub fn tick(&mut self, dt: Duration) -> Vec<GameEvent> {
        self.controller.advance(dt);
        self.controller.drain_events()
    }

    /// Reload the current level from scratch.
    pub fn restart(&mut self) -> Result<()> {
        info!("Restarting level {}", self.index);
        self.controller = RoundController::for_level(self.level(), &self.config)?;
        Ok(())
    }

    /// Move on after a completed level.
    ///
    /// Writes the new index to the store and returns it. Returns `Ok(None)`
    /// without writing when the completed level was the last one.
    pub fn next_level(&mut self) -> Result<Option<usize>> {
        if self.controller.status() != LevelStatus::Complete {
            return Err(LevelError::NotComplete);
        }

        let next = self.index + 1;
        if next >= self.levels.len() {
            info!("Final level complete");
            return Ok(None);
        }

        let controller = RoundController::for_level(self.levels.level(next)?, &self.config)?;
        self.store.save_level_index(next);
        self.index = next;
        self.controller = controller;

        info!("Advanced to level {}", next);
        Ok(Some(next))
    }
}
