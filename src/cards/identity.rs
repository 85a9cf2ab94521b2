//! Card identities - what a card shows when face up.
//!
//! A `CardIdentity` is a face tag plus an opaque display reference. The
//! tag is all the game logic ever looks at; the `SpriteRef` is carried
//! through for the presentation layer and never interpreted.

use serde::{Deserialize, Serialize};

/// Face-up tag of a card.
///
/// Ordinary faces are numbered. Two cards with the same number form a pair.
/// Two bombs end the level instead of pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    /// An ordinary face value.
    Face(u16),
    /// The special loss-inducing face.
    Bomb,
}

impl FaceKind {
    /// Check if this is the bomb tag.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, FaceKind::Bomb)
    }
}

impl Default for FaceKind {
    fn default() -> Self {
        FaceKind::Face(0)
    }
}

impl std::fmt::Display for FaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceKind::Face(n) => write!(f, "Face {}", n),
            FaceKind::Bomb => write!(f, "Bomb"),
        }
    }
}

/// Back-face style of a card. Purely cosmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceOffType(pub u16);

/// Opaque reference to a display asset (sprite path, atlas key, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteRef(pub String);

impl SpriteRef {
    /// Create a new sprite reference.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Face-up identity of a dealt card.
///
/// Immutable once assigned to a card instance.
///
/// ```
/// use flip_pair::cards::{CardIdentity, FaceKind};
///
/// let a = CardIdentity::face(1).with_sprite("cards/apple.png");
/// let b = CardIdentity::face(1);
///
/// // Display references never take part in matching
/// assert!(a.same_face(&b));
/// assert!(!a.same_face(&CardIdentity::bomb()));
/// assert_eq!(b.kind, FaceKind::Face(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIdentity {
    /// The face tag.
    pub kind: FaceKind,

    /// Display reference, if any.
    #[serde(default)]
    pub sprite: Option<SpriteRef>,
}

impl CardIdentity {
    /// Create an identity with the given tag and no sprite.
    #[must_use]
    pub const fn new(kind: FaceKind) -> Self {
        Self { kind, sprite: None }
    }

    /// Create an ordinary face identity.
    #[must_use]
    pub const fn face(value: u16) -> Self {
        Self::new(FaceKind::Face(value))
    }

    /// Create a bomb identity.
    #[must_use]
    pub const fn bomb() -> Self {
        Self::new(FaceKind::Bomb)
    }

    /// Attach a display reference.
    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = Some(SpriteRef::new(sprite));
        self
    }

    /// Check if this identity carries the bomb tag.
    #[must_use]
    pub const fn is_bomb(&self) -> bool {
        self.kind.is_bomb()
    }

    /// Check if two identities show the same face.
    #[must_use]
    pub fn same_face(&self, other: &CardIdentity) -> bool {
        self.kind == other.kind
    }
}
