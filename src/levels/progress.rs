//! Persisted level progress.
//!
//! The only state that outlives a level is the index of the level to play
//! next. The host decides where it lives (player preferences, a settings
//! file, a browser key); the game only sees [`ProgressStore`].

/// Storage for the current level index.
///
/// Read once when a level starts and written once when the player
/// advances to the next level.
pub trait ProgressStore {
    /// Load the stored index. `None` if nothing has been stored yet.
    fn load_level_index(&self) -> Option<usize>;

    /// Store the index of the level to play next.
    fn save_level_index(&mut self, index: usize);
}

/// In-memory progress store.
///
/// Counts writes so callers (and tests) can check the index is written
/// exactly once per advance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryProgress {
    index: Option<usize>,
    writes: usize,
}

impl MemoryProgress {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `index`.
    #[must_use]
    pub fn with_index(index: usize) -> Self {
        Self {
            index: Some(index),
            writes: 0,
        }
    }

    /// Number of `save_level_index` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ProgressStore for MemoryProgress {
    fn load_level_index(&self) -> Option<usize> {
        self.index
    }

    fn save_level_index(&mut self, index: usize) {
        self.index = Some(index);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryProgress::new();
        assert_eq!(store.load_level_index(), None);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryProgress::with_index(1);
        assert_eq!(store.load_level_index(), Some(1));

        store.save_level_index(2);
        assert_eq!(store.load_level_index(), Some(2));
        assert_eq!(store.writes(), 1);
    }
}
