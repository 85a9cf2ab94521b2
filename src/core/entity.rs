//! Card instance identification.
//!
//! Every card dealt onto the table gets a unique `CardId`. IDs are
//! allocated in deal order starting at 0, so the ID doubles as the card's
//! slot on the table.
//!
//! ```
//! use flip_pair::core::CardId;
//!
//! let card = CardId::new(3);
//! assert_eq!(card.index(), 3);
//! assert_eq!(format!("{}", card), "Card(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a dealt card instance.
///
/// Two instances with the same face still have different `CardId`s.
/// This is what keeps a double-click on one card from pairing with itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the table slot (deal position) of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
