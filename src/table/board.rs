//! Card storage and deal order.

use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::cards::{CardIdentity, CardInstance};
use crate::core::entity::CardId;
use crate::core::rng::GameRng;

/// All cards dealt for a level.
///
/// IDs are allocated in deal order (after any shuffle), so
/// `layout()` yields `Card(0), Card(1), ...`.
///
/// ## Usage
///
/// ```
/// use std::time::Duration;
/// use flip_pair::cards::CardIdentity;
/// use flip_pair::core::CardId;
/// use flip_pair::table::Table;
///
/// let table = Table::deal(
///     vec![CardIdentity::face(1), CardIdentity::face(1)],
///     Duration::from_millis(500),
///     None,
/// );
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get(CardId::new(1)).unwrap().is_hidden());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    /// Card instances by ID.
    cards: FxHashMap<CardId, CardInstance>,

    /// IDs in deal order.
    order: Vec<CardId>,
}

impl Table {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal the given identities face down.
    ///
    /// With an RNG the identities are shuffled first; without one the
    /// authored order is kept.
    #[must_use]
    pub fn deal(
        mut identities: Vec<CardIdentity>,
        flip_duration: Duration,
        rng: Option<&mut GameRng>,
    ) -> Self {
        if let Some(rng) = rng {
            rng.shuffle(&mut identities);
        }

        let mut table = Self::new();
        for (slot, identity) in identities.into_iter().enumerate() {
            let id = CardId::new(slot as u32);
            table.cards.insert(id, CardInstance::new(id, identity, flip_duration));
            table.order.push(id);
        }
        table
    }

    /// Get a card.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardInstance> {
        self.cards.get(&id)
    }

    /// Card IDs in deal order, including removed cards.
    pub fn layout(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }

    /// Cards still in play, in deal order.
    pub fn in_play(&self) -> impl Iterator<Item = &CardInstance> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.cards.get(id))
            .filter(|card| card.in_play())
    }

    /// Number of cards still in play.
    #[must_use]
    pub fn in_play_count(&self) -> usize {
        self.in_play().count()
    }

    /// Number of dealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing was dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reveal a card. Returns `false` if it does not exist.
    pub fn reveal(&mut self, id: CardId) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) => {
                card.reveal();
                true
            }
            None => false,
        }
    }

    /// Hide a card. Returns `false` if it does not exist.
    pub fn hide(&mut self, id: CardId) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) => {
                card.hide();
                true
            }
            None => false,
        }
    }

    /// Remove a card from play. Returns `false` if it does not exist.
    pub fn remove(&mut self, id: CardId) -> bool {
        match self.cards.get_mut(&id) {
            Some(card) => {
                card.remove();
                true
            }
            None => false,
        }
    }

    /// Advance every card's flip animation by one frame.
    pub fn advance(&mut self, dt: Duration) {
        for card in self.cards.values_mut() {
            card.advance(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Visibility;

    fn flip() -> Duration {
        Duration::from_millis(500)
    }

    fn identities() -> Vec<CardIdentity> {
        (0..8).map(|i| CardIdentity::face(i / 2)).collect()
    }

    #[test]
    fn test_deal_keeps_authored_order() {
        let table = Table::deal(identities(), flip(), None);

        assert_eq!(table.len(), 8);
        let faces: Vec<_> = table
            .layout()
            .map(|id| table.get(id).unwrap().identity().clone())
            .collect();
        assert_eq!(faces, identities());
    }

    #[test]
    fn test_deal_ids_follow_slots() {
        let table = Table::deal(identities(), flip(), None);
        let ids: Vec<_> = table.layout().collect();
        assert_eq!(ids, (0..8).map(CardId::new).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_deal_is_deterministic() {
        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);
        let t1 = Table::deal(identities(), flip(), Some(&mut rng1));
        let t2 = Table::deal(identities(), flip(), Some(&mut rng2));

        for id in t1.layout() {
            assert_eq!(t1.get(id).unwrap().identity(), t2.get(id).unwrap().identity());
        }
    }

    #[test]
    fn test_reveal_hide_remove() {
        let mut table = Table::deal(identities(), flip(), None);
        let id = CardId::new(2);

        assert!(table.reveal(id));
        assert_eq!(table.get(id).unwrap().visibility, Visibility::Revealed);

        assert!(table.hide(id));
        assert_eq!(table.get(id).unwrap().visibility, Visibility::Hidden);

        assert!(table.remove(id));
        assert_eq!(table.in_play_count(), 7);
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_unknown_card() {
        let mut table = Table::deal(identities(), flip(), None);
        let missing = CardId::new(99);
        assert!(table.get(missing).is_none());
        assert!(!table.reveal(missing));
        assert!(!table.hide(missing));
        assert!(!table.remove(missing));
    }

    #[test]
    fn test_advance_drives_flips() {
        let mut table = Table::deal(identities(), flip(), None);
        let id = CardId::new(0);
        table.reveal(id);

        for _ in 0..10 {
            table.advance(Duration::from_millis(100));
        }
        let card = table.get(id).unwrap();
        assert!(!card.flip.is_rotating());
        assert!(card.flip.showing_front());
    }

    #[test]
    fn test_empty_table() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.in_play_count(), 0);
    }
}
