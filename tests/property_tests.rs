//! Property tests for pair evaluation and round gating.

use std::time::Duration;

use proptest::prelude::*;

use flip_pair::cards::{CardIdentity, FaceKind};
use flip_pair::core::{CardId, GameConfig};
use flip_pair::round::{evaluate, GameEvent, IgnoreReason, MatchOutcome, Offer, RoundController};
use flip_pair::table::Table;

fn face_kind() -> impl Strategy<Value = FaceKind> {
    prop_oneof![
        1 => Just(FaceKind::Bomb),
        4 => (0u16..6).prop_map(FaceKind::Face),
    ]
}

fn identity() -> impl Strategy<Value = CardIdentity> {
    (face_kind(), proptest::option::of("[a-z]{1,8}")).prop_map(|(kind, sprite)| CardIdentity {
        kind,
        sprite: sprite.map(flip_pair::cards::SpriteRef),
    })
}

proptest! {
    /// Two bombs always lose, whatever their display references.
    #[test]
    fn prop_bomb_pair_loses(a in proptest::option::of("[a-z]{1,8}"), b in proptest::option::of("[a-z]{1,8}")) {
        let mut first = CardIdentity::bomb();
        let mut second = CardIdentity::bomb();
        first.sprite = a.map(flip_pair::cards::SpriteRef);
        second.sprite = b.map(flip_pair::cards::SpriteRef);
        prop_assert_eq!(evaluate(&first, &second), MatchOutcome::Lose);
    }

    /// Non-bomb pairs match iff their faces are equal.
    #[test]
    fn prop_match_iff_equal(a in 0u16..10, b in 0u16..10) {
        let outcome = evaluate(&CardIdentity::face(a), &CardIdentity::face(b));
        if a == b {
            prop_assert_eq!(outcome, MatchOutcome::Match);
        } else {
            prop_assert_eq!(outcome, MatchOutcome::Mismatch);
        }
    }

    /// Evaluation is symmetric.
    #[test]
    fn prop_evaluate_symmetric(a in identity(), b in identity()) {
        prop_assert_eq!(evaluate(&a, &b), evaluate(&b, &a));
    }

    /// Random click and tick sequences keep the round invariants:
    /// - the confirmed counter never decreases and only moves on matches
    /// - at most two cards are selected, and two means the gate is closed
    /// - LevelComplete fires at most once
    #[test]
    fn prop_random_play_keeps_invariants(
        identities in proptest::collection::vec(identity(), 2..12),
        steps in proptest::collection::vec((any::<bool>(), 0u32..14, 0u64..1200), 1..200),
    ) {
        let config = GameConfig::new();
        let card_count = identities.len() as u32;
        let table = Table::deal(identities, config.flip_duration, None);
        let mut game = RoundController::new(table, card_count / 2, &config);

        let mut confirmed = 0;
        let mut completions = 0;

        for (click, card, ms) in steps {
            if click {
                let before = game.selections().len();
                let offer = game.offer(CardId::new(card));
                if card >= card_count {
                    prop_assert_eq!(offer, Offer::Ignored(IgnoreReason::UnknownCard));
                }
                if let Offer::Ignored(_) = offer {
                    prop_assert_eq!(game.selections().len(), before);
                }
            } else {
                game.advance(Duration::from_millis(ms));
            }

            for event in game.drain_events() {
                if let GameEvent::LevelComplete { .. } = event {
                    completions += 1;
                }
            }

            let now = game.confirmed_pairs();
            prop_assert!(now >= confirmed);
            prop_assert!(now - confirmed <= 1);
            if now > confirmed {
                prop_assert_eq!(
                    game.history().last().map(|r| r.outcome),
                    Some(MatchOutcome::Match)
                );
            }
            confirmed = now;

            let selected = game.selections().len();
            prop_assert!(selected <= 2);
            if selected == 2 {
                prop_assert!(!game.is_input_open());
            }
            prop_assert!(completions <= 1);
        }
    }

    /// A third offer while resolving changes nothing.
    #[test]
    fn prop_third_offer_is_noop(third in 2u32..6, wait in 0u64..1499) {
        let identities: Vec<_> = (0..6).map(|i| CardIdentity::face(i % 3)).collect();
        let config = GameConfig::new();
        let table = Table::deal(identities, config.flip_duration, None);
        let mut game = RoundController::new(table, 3, &config);

        game.offer(CardId::new(0));
        game.offer(CardId::new(1));
        game.advance(Duration::from_millis(wait));
        let phase = game.phase();
        game.drain_events();

        prop_assert_eq!(
            game.offer(CardId::new(third)),
            Offer::Ignored(IgnoreReason::GateClosed)
        );
        prop_assert_eq!(game.phase(), phase);
        prop_assert!(game.events().is_empty());
        prop_assert!(game.table().get(CardId::new(third)).unwrap().is_hidden());
    }
}
