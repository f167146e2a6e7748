use marketmaker::{
    ActiveEffect, Game, GameState, NewsItem, SAVE_FILE_NAME, SaveError, SaveManager,
};
use std::fs;

fn populated_state() -> GameState {
    let mut state = GameState::default();
    state.player_portfolio.cash = 123_456.78;
    state.player_portfolio.coins = 42;
    state.historical_candle_count = 17;
    state.current_growth_rate = 0.78;
    state
        .purchased_upgrade_ids
        .insert("rd_pos_consensus".to_string());
    state
        .triggered_one_time_event_ids
        .insert("review_pos_update".to_string());
    state.active_effects.push(ActiveEffect {
        source_id: "rd_pos_consensus".to_string(),
        duration_remaining: 83,
    });
    state.push_news(NewsItem {
        event_id: "dummy_1".to_string(),
        headline: "something happened".to_string(),
        timestamp: 16,
    });
    state
}

#[test]
fn save_then_load_roundtrips_the_full_state() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveManager::new(dir.path());
    let state = populated_state();

    saves.save(&state).unwrap();
    let loaded = saves.load().unwrap();
    assert_eq!(loaded, Some(state));
}

#[test]
fn loading_a_missing_file_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveManager::new(dir.path());
    assert!(matches!(saves.load(), Ok(None)));
}

#[test]
fn a_corrupt_file_is_reported_as_such() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveManager::new(dir.path());
    fs::write(dir.path().join(SAVE_FILE_NAME), "{not json").unwrap();
    assert!(matches!(saves.load(), Err(SaveError::Corrupt(_))));
}

#[test]
fn exists_and_delete_track_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveManager::new(dir.path());
    assert!(!saves.exists());

    saves.save(&GameState::default()).unwrap();
    assert!(saves.exists());

    saves.delete().unwrap();
    assert!(!saves.exists());
    // Deleting an absent file stays quiet.
    saves.delete().unwrap();
}

#[test]
fn snapshot_serializes_with_the_original_field_names() {
    let json = serde_json::to_value(GameState::default()).unwrap();
    for key in [
        "playerPortfolio",
        "candleHistory",
        "historicalCandleCount",
        "purchasedUpgradeIds",
        "activeEffects",
        "newsFeed",
        "triggeredOneTimeEventIds",
        "currentGrowthRate",
    ] {
        assert!(json.get(key).is_some(), "missing field {key}");
    }
}

#[test]
fn game_falls_back_to_default_when_no_save_exists() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = Game::new(SaveManager::new(dir.path()));
    game.load_game();
    assert_eq!(game.state(), &GameState::default());
}

#[test]
fn game_falls_back_to_default_on_a_corrupt_save() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SAVE_FILE_NAME), "garbage").unwrap();
    let mut game = Game::new(SaveManager::new(dir.path()));
    game.load_game();
    assert_eq!(game.state(), &GameState::default());
}

#[test]
fn game_save_and_load_restore_progress() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = Game::from_state(SaveManager::new(dir.path()), populated_state());
    game.save();

    let mut restored = Game::new(SaveManager::new(dir.path()));
    restored.load_game();
    assert_eq!(restored.state(), &populated_state());
}

#[test]
fn new_game_deletes_the_save_and_resets() {
    let dir = tempfile::tempdir().unwrap();
    let saves = SaveManager::new(dir.path());
    saves.save(&populated_state()).unwrap();

    let mut game = Game::new(SaveManager::new(dir.path()));
    game.load_game();
    game.new_game();
    assert_eq!(game.state(), &GameState::default());
    assert!(!saves.exists());
}
