//! Authored level content.
//!
//! The on-disk shape mirrors what the level inspector edits: a list of
//! levels, each with a name, description, required pair count, and an
//! ordered list of cards. Each card has a face-on side (the identity that
//! takes part in matching) and a cosmetic face-off side.
//!
//! ```
//! use flip_pair::levels::GameLevelData;
//!
//! let json = r#"{
//!     "levels": [{
//!         "levelName": "Warm up",
//!         "matchPairCount": 1,
//!         "cardDetails": [
//!             { "faceOn": { "name": { "Face": 1 } } },
//!             { "faceOn": { "name": { "Face": 1 } } }
//!         ]
//!     }]
//! }"#;
//!
//! let data = GameLevelData::from_json_str(json).unwrap();
//! assert_eq!(data.levels[0].available_pairs(), 1);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardIdentity, FaceKind, FaceOffType, SpriteRef};
use crate::error::{LevelError, Result};

/// Face-up side of an authored card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceOn {
    /// Face tag used for matching.
    pub name: FaceKind,
    /// Display reference.
    #[serde(default)]
    pub sprite: Option<SpriteRef>,
}

/// Face-down side of an authored card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceOff {
    /// Back style.
    pub name: FaceOffType,
    /// Display reference.
    #[serde(default)]
    pub sprite: Option<SpriteRef>,
}

/// One authored card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    #[serde(default)]
    pub face_on: FaceOn,
    #[serde(default)]
    pub face_off: FaceOff,
}

impl CardDetails {
    /// The identity this card is dealt with.
    #[must_use]
    pub fn identity(&self) -> CardIdentity {
        CardIdentity {
            kind: self.face_on.name,
            sprite: self.face_on.sprite.clone(),
        }
    }
}

/// One level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelData {
    /// Confirmed pairs needed to complete the level.
    ///
    /// Zero means the level can never be completed, only failed.
    pub match_pair_count: u32,
    pub level_name: String,
    pub level_description: String,
    /// Cards in deal order.
    pub card_details: Vec<CardDetails>,
}

impl Default for LevelData {
    fn default() -> Self {
        Self {
            match_pair_count: 0,
            level_name: "New Level".to_string(),
            level_description: String::new(),
            card_details: Vec::new(),
        }
    }
}

impl LevelData {
    /// Create an empty level with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            level_name: name.into(),
            ..Self::default()
        }
    }

    /// Set the required pair count.
    #[must_use]
    pub fn with_pairs(mut self, count: u32) -> Self {
        self.match_pair_count = count;
        self
    }

    /// Append a card with the given face tag.
    #[must_use]
    pub fn with_card(mut self, kind: FaceKind) -> Self {
        self.card_details.push(CardDetails {
            face_on: FaceOn { name: kind, sprite: None },
            face_off: FaceOff::default(),
        });
        self
    }

    /// Append a default card and return it for editing.
    pub fn add_card(&mut self) -> &mut CardDetails {
        self.card_details.push(CardDetails::default());
        let last = self.card_details.len() - 1;
        &mut self.card_details[last]
    }

    /// Remove the card at `index`. Returns it, or `None` if out of range.
    pub fn remove_card(&mut self, index: usize) -> Option<CardDetails> {
        (index < self.card_details.len()).then(|| self.card_details.remove(index))
    }

    /// Identities in deal order.
    #[must_use]
    pub fn identities(&self) -> Vec<CardIdentity> {
        self.card_details.iter().map(CardDetails::identity).collect()
    }

    /// Number of matchable pairs the card list can form.
    ///
    /// Bomb pairs are not counted: pairing them loses the level.
    #[must_use]
    pub fn available_pairs(&self) -> u32 {
        let mut counts: FxHashMap<FaceKind, u32> = FxHashMap::default();
        for card in &self.card_details {
            if !card.face_on.name.is_bomb() {
                *counts.entry(card.face_on.name).or_default() += 1;
            }
        }
        counts.values().map(|n| n / 2).sum()
    }

    /// Check the level can be completed as authored.
    pub fn validate(&self) -> Result<()> {
        let available = self.available_pairs();
        if self.match_pair_count > available {
            return Err(LevelError::NotEnoughPairs {
                required: self.match_pair_count,
                available,
            });
        }
        Ok(())
    }
}

/// All levels of the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLevelData {
    #[serde(default)]
    pub levels: Vec<LevelData>,
}

impl GameLevelData {
    /// Create an empty level list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode level data from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode level data as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if no levels are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level by index.
    pub fn level(&self, index: usize) -> Result<&LevelData> {
        self.levels.get(index).ok_or(LevelError::UnknownLevel {
            index,
            count: self.levels.len(),
        })
    }

    /// Append a new empty level named `Level {n}` and return it.
    pub fn add_level(&mut self) -> &mut LevelData {
        let name = format!("Level {}", self.levels.len() + 1);
        self.levels.push(LevelData::new(name));
        let last = self.levels.len() - 1;
        &mut self.levels[last]
    }

    /// Remove the last level, if any.
    pub fn delete_last_level(&mut self) -> Option<LevelData> {
        self.levels.pop()
    }

    /// Remove the level at `index`.
    pub fn delete_level(&mut self, index: usize) -> Result<LevelData> {
        if index >= self.levels.len() {
            return Err(LevelError::UnknownLevel {
                index,
                count: self.levels.len(),
            });
        }
        Ok(self.levels.remove(index))
    }
}
