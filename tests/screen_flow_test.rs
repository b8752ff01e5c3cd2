//! Integration tests for the screen state machine: navigation, runs driven
//! through the app, profile updates and the points where the profile is
//! written to disk.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sky_hopper::cosmetics::{BackgroundTheme, SkinId, TrailEffect};
use sky_hopper::{
    App, AppEvent, Command, Difficulty, GameConfig, MenuDestination, Profile, ProfileStore,
    RunPhase, Screen,
};
use std::path::Path;

fn wide_gap_config() -> GameConfig {
    GameConfig {
        gap_top_min: 20.0,
        gap_top_max: 20.0,
        gap_height: 560.0,
        ..GameConfig::default()
    }
}

fn app_with_store(dir: &Path, profile: Profile, config: GameConfig) -> App {
    let store = ProfileStore::new(dir.join("profile.json"));
    App::new(config, profile, Some(store)).unwrap()
}

/// Fly until `target` obstacles are cleared, then stop boosting and let the
/// bird fall. Returns every event seen.
fn play_to_score(app: &mut App, rng: &mut ChaCha8Rng, target: u32) -> Vec<AppEvent> {
    let mut events = Vec::new();
    let mut flying = true;
    for _ in 0..5000 {
        if app.screen() != Screen::ActiveRun {
            break;
        }
        let avatar = &app.run().session().unwrap().avatar;
        if flying && avatar.y > 300.0 && avatar.velocity > 0.0 {
            app.handle(Command::Boost);
        }
        app.tick(rng);
        for event in app.drain_events() {
            if event == (AppEvent::ObstaclePassed { score: target }) {
                flying = false;
            }
            events.push(event);
        }
    }
    events
}

#[test]
fn test_run_beating_high_score_updates_profile() {
    let dir = tempfile::tempdir().unwrap();
    let profile = Profile {
        high_score: 3,
        ..Profile::default()
    };
    let mut app = app_with_store(dir.path(), profile, wide_gap_config());
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    assert!(app.handle(Command::StartRun));
    let events = play_to_score(&mut app, &mut rng, 5);

    assert_eq!(app.screen(), Screen::RunEnded);
    assert_eq!(app.run().phase(), RunPhase::Ended);
    assert_eq!(app.run().score(), 5);
    assert_eq!(app.profile().high_score, 5);
    assert_eq!(app.profile().coins, 105);
    assert!(app.last_run_new_record());
    assert!(events.iter().any(|e| matches!(
        e,
        AppEvent::RunEnded {
            score: 5,
            new_record: true,
            ..
        }
    )));
}

#[test]
fn test_lower_score_keeps_high_score() {
    let profile = Profile {
        high_score: 10,
        ..Profile::default()
    };
    let mut app = App::new(wide_gap_config(), profile, None).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    app.handle(Command::StartRun);
    play_to_score(&mut app, &mut rng, 2);

    assert_eq!(app.run().score(), 2);
    assert_eq!(app.profile().high_score, 10);
    assert_eq!(app.profile().coins, 102);
    assert!(!app.last_run_new_record());
}

#[test]
fn test_back_from_run_ended_flushes_profile() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_store(dir.path(), Profile::default(), wide_gap_config());
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    app.handle(Command::StartRun);
    play_to_score(&mut app, &mut rng, 1);
    assert!(!dir.path().join("profile.json").exists());

    assert!(app.handle(Command::Back));
    assert_eq!(app.screen(), Screen::MainMenu);

    let saved = ProfileStore::new(dir.path().join("profile.json")).load();
    assert_eq!(saved.high_score, 1);
    assert_eq!(saved.coins, 101);
}

#[test]
fn test_menu_page_back_flushes_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_store(dir.path(), Profile::default(), GameConfig::default());

    app.handle(Command::Open(MenuDestination::BackgroundTheme));
    app.handle(Command::SelectTheme(BackgroundTheme::Storm));
    app.handle(Command::Back);

    app.handle(Command::Open(MenuDestination::TrailEffect));
    app.handle(Command::SelectTrail(TrailEffect::Fire));
    app.handle(Command::Back);

    app.handle(Command::Open(MenuDestination::SkinSelector));
    app.handle(Command::SelectSkin(SkinId::ForestGreen));
    app.handle(Command::Back);

    let saved = ProfileStore::new(dir.path().join("profile.json")).load();
    assert_eq!(saved.background_theme, BackgroundTheme::Storm);
    assert_eq!(saved.trail_effect, TrailEffect::Fire);
    assert_eq!(saved.equipped_skin, SkinId::ForestGreen);
    assert_eq!(saved.coins, 50);
    assert_eq!(saved, *app.profile());
}

#[test]
fn test_mode_select_choice_flushes() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_store(dir.path(), Profile::default(), GameConfig::default());

    app.handle(Command::Open(MenuDestination::ModeSelect));
    app.handle(Command::SetDifficulty(Difficulty::Easy));

    assert_eq!(app.screen(), Screen::MainMenu);
    let saved = ProfileStore::new(dir.path().join("profile.json")).load();
    assert_eq!(saved.difficulty, Difficulty::Easy);
}

#[test]
fn test_quit_flushes() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_store(dir.path(), Profile::default(), GameConfig::default());

    app.handle(Command::Open(MenuDestination::Settings));
    app.handle(Command::CycleDifficulty);
    app.handle(Command::Quit);

    assert!(app.should_quit());
    let saved = ProfileStore::new(dir.path().join("profile.json")).load();
    assert_eq!(saved.difficulty, Difficulty::Hard);
}

#[test]
fn test_difficulty_applies_to_next_session_only() {
    let mut app = App::new(GameConfig::default(), Profile::default(), None).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    app.handle(Command::StartRun);
    assert_eq!(
        app.run().session().unwrap().difficulty,
        Difficulty::Normal
    );
    while app.screen() == Screen::ActiveRun {
        app.tick(&mut rng);
    }
    app.handle(Command::Back);

    app.handle(Command::Open(MenuDestination::ModeSelect));
    app.handle(Command::SetDifficulty(Difficulty::Hard));
    app.handle(Command::StartRun);
    assert_eq!(app.run().session().unwrap().difficulty, Difficulty::Hard);
}

#[test]
fn test_save_failure_does_not_stop_the_game() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail.
    let blocked = dir.path().join("profile.json");
    std::fs::create_dir(&blocked).unwrap();
    let store = ProfileStore::new(&blocked);
    let mut app = App::new(GameConfig::default(), Profile::default(), Some(store)).unwrap();

    app.handle(Command::Open(MenuDestination::HighScore));
    assert!(app.handle(Command::Back));
    assert_eq!(app.screen(), Screen::MainMenu);
    assert!(app
        .drain_events()
        .contains(&AppEvent::ProfileSaveFailed));
    assert!(app.handle(Command::StartRun));
}

#[test]
fn test_skin_equipped_before_run_is_used() {
    let mut app = App::new(GameConfig::default(), Profile::default(), None).unwrap();
    app.handle(Command::Open(MenuDestination::SkinSelector));
    app.handle(Command::SelectSkin(SkinId::SunshineYellow));
    app.handle(Command::Back);
    app.handle(Command::StartRun);

    assert_eq!(
        app.run().session().unwrap().avatar.skin,
        SkinId::SunshineYellow
    );
    assert_eq!(app.profile().coins, 30);
}
