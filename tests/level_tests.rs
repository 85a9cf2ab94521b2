//! Level data and session integration tests.

use std::time::Duration;

use flip_pair::cards::FaceKind;
use flip_pair::core::{CardId, GameConfig, TimerMode};
use flip_pair::levels::{GameLevelData, MemoryProgress, ProgressStore};
use flip_pair::round::{FailReason, GameEvent, LevelStatus};
use flip_pair::session::Session;
use flip_pair::LevelError;

const LEVELS_JSON: &str = r#"{
    "levels": [
        {
            "levelName": "Level 1",
            "levelDescription": "Find the twins",
            "matchPairCount": 2,
            "cardDetails": [
                { "faceOn": { "name": { "Face": 1 }, "sprite": "apple.png" } },
                { "faceOn": { "name": { "Face": 2 }, "sprite": "pear.png" } },
                { "faceOn": { "name": { "Face": 1 }, "sprite": "apple.png" } },
                { "faceOn": { "name": { "Face": 2 }, "sprite": "pear.png" } }
            ]
        },
        {
            "levelName": "Level 2",
            "matchPairCount": 1,
            "cardDetails": [
                { "faceOn": { "name": "Bomb" }, "faceOff": { "name": 1 } },
                { "faceOn": { "name": "Bomb" }, "faceOff": { "name": 1 } },
                { "faceOn": { "name": { "Face": 3 } } },
                { "faceOn": { "name": { "Face": 3 } } }
            ]
        }
    ]
}"#;

fn load() -> GameLevelData {
    GameLevelData::from_json_str(LEVELS_JSON).unwrap()
}

/// Tick until the level ends, returning every event.
fn play_out(session: &mut Session<MemoryProgress>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..1000 {
        events.extend(session.tick(Duration::from_millis(50)));
        if session.controller().status().is_terminal() {
            break;
        }
    }
    events
}

// =============================================================================
// Level Data
// =============================================================================

/// Test that authored JSON decodes into identities in deal order.
#[test]
fn test_load_levels_json() {
    let data = load();
    assert_eq!(data.len(), 2);

    let first = data.level(0).unwrap();
    assert_eq!(first.level_description, "Find the twins");
    assert_eq!(first.available_pairs(), 2);

    let identities = first.identities();
    assert_eq!(identities[0].kind, FaceKind::Face(1));
    assert_eq!(identities[0].sprite.as_ref().unwrap().as_str(), "apple.png");

    let second = data.level(1).unwrap();
    assert_eq!(second.available_pairs(), 1);
    assert!(second.card_details[0].face_on.name.is_bomb());
    assert!(second.validate().is_ok());
}

/// Test that editing operations survive a save/load cycle.
#[test]
fn test_edit_and_reload() {
    let mut data = load();
    let level = data.add_level();
    level.match_pair_count = 1;
    level.add_card().face_on.name = FaceKind::Face(9);
    level.add_card().face_on.name = FaceKind::Face(9);

    let json = data.to_json_string().unwrap();
    let reloaded = GameLevelData::from_json_str(&json).unwrap();

    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.levels[2].level_name, "Level 3");
    assert!(reloaded.levels[2].validate().is_ok());
}

/// Test that an unknown level index is reported.
#[test]
fn test_unknown_level() {
    let data = load();
    assert!(matches!(
        data.level(5),
        Err(LevelError::UnknownLevel { index: 5, count: 2 })
    ));
}

// =============================================================================
// Sessions
// =============================================================================

/// Test playing level 1 to completion and advancing to level 2.
#[test]
fn test_session_progression() {
    let mut session = Session::start(load(), MemoryProgress::new(), GameConfig::new()).unwrap();
    assert_eq!(session.level_index(), 0);

    session.offer(CardId::new(0));
    session.offer(CardId::new(2));
    play_out_round(&mut session);
    session.offer(CardId::new(1));
    session.offer(CardId::new(3));
    let events = play_out(&mut session);

    assert!(events.contains(&GameEvent::LevelComplete { confirmed_pairs: 2 }));
    assert_eq!(session.next_level().unwrap(), Some(1));
    assert_eq!(session.store().load_level_index(), Some(1));
    assert_eq!(session.level().level_name, "Level 2");
}

/// Test that a bomb pair on level 2 fails and restart replays it.
#[test]
fn test_session_bomb_and_restart() {
    let store = MemoryProgress::with_index(1);
    let mut session = Session::start(load(), store, GameConfig::new()).unwrap();

    session.offer(CardId::new(0));
    session.offer(CardId::new(1));
    let events = play_out(&mut session);

    assert_eq!(events.last(), Some(&GameEvent::LevelFailed(FailReason::Bomb)));
    assert!(matches!(session.next_level(), Err(LevelError::NotComplete)));

    session.restart().unwrap();
    assert_eq!(session.controller().status(), LevelStatus::Playing);
    assert_eq!(session.store().writes(), 0);
}

/// Test that a countdown level fails once time is up.
#[test]
fn test_session_countdown() {
    let config = GameConfig::new().with_timer_mode(TimerMode::Countdown(Duration::from_secs(10)));
    let mut session = Session::start(load(), MemoryProgress::new(), config).unwrap();

    let events = play_out(&mut session);
    assert_eq!(events, vec![GameEvent::LevelFailed(FailReason::TimeUp)]);
    assert_eq!(session.controller().timer().display(), "00:00");
}

/// Test that a decoded config with a zero flip duration fails to start.
#[test]
fn test_session_rejects_zero_flip_duration() {
    let mut value = serde_json::to_value(GameConfig::new()).unwrap();
    value["flip_duration"] = serde_json::json!({ "secs": 0, "nanos": 0 });
    let config: GameConfig = serde_json::from_value(value).unwrap();

    let result = Session::start(load(), MemoryProgress::new(), config);
    assert!(matches!(result, Err(LevelError::ZeroFlipDuration)));
}

/// Test that a shuffled deal is reproducible from its seed.
#[test]
fn test_session_shuffle_seed() {
    let config = GameConfig::new().with_shuffle_seed(1234);
    let a = Session::start(load(), MemoryProgress::new(), config.clone()).unwrap();
    let b = Session::start(load(), MemoryProgress::new(), config).unwrap();

    let faces = |s: &Session<MemoryProgress>| -> Vec<FaceKind> {
        let table = s.controller().table();
        table.layout().map(|id| table.get(id).unwrap().identity().kind).collect()
    };
    assert_eq!(faces(&a), faces(&b));
}

fn play_out_round(session: &mut Session<MemoryProgress>) {
    for _ in 0..1000 {
        let events = session.tick(Duration::from_millis(50));
        if events.contains(&GameEvent::InputReopened) {
            return;
        }
    }
    panic!("round never settled");
}
