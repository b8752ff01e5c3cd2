//! Integration tests for the profile file: round trips, first run, damaged
//! files and the JSON layout.

use sky_hopper::cosmetics::{BackgroundTheme, SkinId, TrailEffect};
use sky_hopper::{Difficulty, Profile, ProfileStore};
use std::collections::BTreeSet;
use std::fs;

fn store_in(dir: &tempfile::TempDir) -> ProfileStore {
    ProfileStore::new(dir.path().join("profile.json"))
}

#[test]
fn test_round_trip_preserves_everything() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let profile = Profile {
        high_score: 42,
        coins: 7,
        unlocked_skins: BTreeSet::from([SkinId::ClassicRed, SkinId::GoldenKing, SkinId::NeonCyber]),
        equipped_skin: SkinId::NeonCyber,
        background_theme: BackgroundTheme::Night,
        trail_effect: TrailEffect::Rainbow,
        difficulty: Difficulty::Easy,
    };

    store.save(&profile).unwrap();
    assert!(store.exists());
    assert_eq!(store.load(), profile);
}

#[test]
fn test_first_run_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(!store.exists());

    let profile = store.load();
    assert_eq!(profile.high_score, 0);
    assert_eq!(profile.coins, 100);
    assert_eq!(profile.unlocked_skins, BTreeSet::from([SkinId::ClassicRed]));
    assert_eq!(profile.equipped_skin, SkinId::ClassicRed);
    assert_eq!(profile.difficulty, Difficulty::Normal);
    assert_eq!(profile.background_theme, BackgroundTheme::Day);
    assert_eq!(profile.trail_effect, TrailEffect::Sparkle);
}

#[test]
fn test_damaged_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    for contents in ["", "{ half", "[1, 2, 3]", "\"profile\"", "null"] {
        fs::write(store.path(), contents).unwrap();
        assert_eq!(store.load(), Profile::default(), "contents: {:?}", contents);
    }
}

#[test]
fn test_file_written_by_older_build_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    fs::write(
        store.path(),
        r#"{
            "highscore": 17,
            "coins": 230,
            "unlocked_skins": ["Classic Red", "Ocean Blue"],
            "equipped_skin": "Ocean Blue",
            "background_theme": "STORM",
            "trail_effect": "FIRE",
            "game_speed": "HARD"
        }"#,
    )
    .unwrap();

    let profile = store.load();
    assert_eq!(profile.high_score, 17);
    assert_eq!(profile.coins, 230);
    assert_eq!(profile.equipped_skin, SkinId::OceanBlue);
    assert_eq!(profile.background_theme, BackgroundTheme::Storm);
    assert_eq!(profile.trail_effect, TrailEffect::Fire);
    assert_eq!(profile.difficulty, Difficulty::Hard);
}

#[test]
fn test_saved_json_layout() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&Profile::default()).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(json["highscore"], 0);
    assert_eq!(json["coins"], 100);
    assert_eq!(json["unlocked_skins"], serde_json::json!(["Classic Red"]));
    assert_eq!(json["equipped_skin"], "Classic Red");
    assert_eq!(json["background_theme"], "DAY");
    assert_eq!(json["trail_effect"], "SPARKLE");
    assert_eq!(json["game_speed"], "NORMAL");
}

#[test]
fn test_save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProfileStore::new(dir.path().join("nested").join("deeper").join("p.json"));
    store.save(&Profile::default()).unwrap();
    assert!(store.exists());
}

#[test]
fn test_save_error_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, "x").unwrap();
    let store = ProfileStore::new(file.join("profile.json"));

    assert!(store.save(&Profile::default()).is_err());
    assert_eq!(store.load(), Profile::default());
}
