//! Card system: identities, instances, and flip animation.
//!
//! ## Key Types
//!
//! - `FaceKind`: Face tag (ordinary value or bomb)
//! - `CardIdentity`: Face tag plus opaque display reference
//! - `CardInstance`: A dealt card (visibility, removed flag, flip)
//! - `FlipAnimation`: Half-turn rotation with a mid-point face swap

pub mod flip;
pub mod identity;
pub mod instance;

pub use flip::FlipAnimation;
pub use identity::{CardIdentity, FaceKind, FaceOffType, SpriteRef};
pub use instance::{CardInstance, Visibility};
