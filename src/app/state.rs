//! The screen state machine.
//!
//! [`App`] owns the run controller and the profile. Commands move it between
//! screens; [`App::tick`] forwards ticks to the run controller while a run is
//! on screen and applies what the run reports (coins, high score) to the
//! profile. The profile is flushed to disk when leaving a menu page or the
//! run-ended screen, and on quit.

use super::screen::{Command, Screen};
use crate::core::config::{ConfigError, GameConfig};
use crate::cosmetics::{self, SkinId, SkinSelection};
use crate::profile::{Profile, ProfileStore};
use crate::run::{CrashCause, RunController, RunEvent};
use rand::Rng;
use tracing::{debug, info, warn};

/// One-shot notifications for the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    RunStarted,
    ObstaclePassed {
        score: u32,
    },
    RunEnded {
        score: u32,
        new_record: bool,
        cause: CrashCause,
        x: f64,
        y: f64,
    },
    SkinPurchased {
        skin: SkinId,
        price: u32,
    },
    SkinRejected {
        skin: SkinId,
        price: u32,
        balance: u32,
    },
    ProfileSaveFailed,
}

pub struct App {
    screen: Screen,
    run: RunController,
    profile: Profile,
    store: Option<ProfileStore>,
    events: Vec<AppEvent>,
    last_run_new_record: bool,
    /// Feedback line for the current page, cleared when the page changes.
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Build an app around an already-loaded profile. Without a store the
    /// profile lives in memory only.
    pub fn new(
        config: GameConfig,
        profile: Profile,
        store: Option<ProfileStore>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            screen: Screen::MainMenu,
            run: RunController::new(config)?,
            profile,
            store,
            events: Vec::new(),
            last_run_new_record: false,
            notice: None,
            should_quit: false,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn run(&self) -> &RunController {
        &self.run
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the most recent run set a new high score.
    pub fn last_run_new_record(&self) -> bool {
        self.last_run_new_record
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Take the notifications produced since the last call.
    pub fn drain_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a command. Returns false when the current screen ignores it.
    pub fn handle(&mut self, command: Command) -> bool {
        if command == Command::Quit {
            self.quit();
            return true;
        }

        match (self.screen, command) {
            (Screen::MainMenu, Command::StartRun) => {
                self.start_run();
                true
            }
            (Screen::MainMenu, Command::Open(destination)) => {
                self.notice = None;
                self.screen = destination.screen();
                true
            }

            (Screen::ActiveRun, Command::Boost) => self.run.boost(),

            (Screen::RunEnded, Command::Retry) => {
                self.start_run();
                true
            }
            (Screen::RunEnded, Command::Back) => {
                self.run.reset();
                self.return_to_menu();
                true
            }

            (screen, Command::Back) if screen.is_menu_page() => {
                self.return_to_menu();
                true
            }

            (Screen::ModeSelect, Command::SetDifficulty(difficulty)) => {
                self.profile.difficulty = difficulty;
                info!(difficulty = difficulty.name(), "Difficulty selected");
                self.return_to_menu();
                true
            }

            (Screen::Settings, Command::CycleDifficulty) => {
                self.profile.difficulty = self.profile.difficulty.next();
                info!(difficulty = self.profile.difficulty.name(), "Difficulty changed");
                true
            }
            (Screen::Settings, Command::ResetHighScore) => {
                self.profile.reset_high_score();
                info!("High score reset");
                true
            }

            (Screen::SkinSelector, Command::SelectSkin(skin)) => self.select_skin(skin),
            (Screen::BackgroundThemeSelector, Command::SelectTheme(theme)) => {
                cosmetics::select_theme(&mut self.profile, theme);
                true
            }
            (Screen::TrailEffectSelector, Command::SelectTrail(trail)) => {
                cosmetics::select_trail(&mut self.profile, trail);
                true
            }

            _ => false,
        }
    }

    /// Advance one fixed tick. Only gameplay screens reach the run controller.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if !self.screen.is_gameplay() {
            return;
        }

        for event in self.run.tick(rng) {
            match event {
                RunEvent::ObstaclePassed { score } => {
                    self.profile.award_obstacle_coin();
                    self.events.push(AppEvent::ObstaclePassed { score });
                }
                RunEvent::Crashed { x, y, cause, score } => {
                    let new_record = self.profile.record_score(score);
                    self.last_run_new_record = new_record;
                    self.screen = Screen::RunEnded;
                    self.events.push(AppEvent::RunEnded {
                        score,
                        new_record,
                        cause,
                        x,
                        y,
                    });
                }
            }
        }
    }

    /// Write the profile if a store is attached. Failures are logged and
    /// reported as an event; they never stop the game.
    pub fn flush(&mut self) -> bool {
        let Some(store) = self.store.as_ref() else {
            return true;
        };
        match store.save(&self.profile) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, path = %store.path().display(), "Failed to save profile");
                self.events.push(AppEvent::ProfileSaveFailed);
                false
            }
        }
    }

    /// Flush and mark the app for exit.
    pub fn quit(&mut self) {
        self.flush();
        self.should_quit = true;
    }

    fn start_run(&mut self) {
        // A retry replaces the ended session.
        self.run.reset();
        if self
            .run
            .start(self.profile.difficulty, self.profile.equipped_skin)
        {
            self.last_run_new_record = false;
            self.screen = Screen::ActiveRun;
            self.events.push(AppEvent::RunStarted);
        }
    }

    fn return_to_menu(&mut self) {
        self.notice = None;
        self.screen = Screen::MainMenu;
        self.flush();
    }

    fn select_skin(&mut self, skin: SkinId) -> bool {
        match cosmetics::select_skin(&mut self.profile, skin) {
            SkinSelection::Equipped => {
                self.run.set_skin(skin);
                self.notice = Some(format!("{} equipped", skin.name()));
                true
            }
            SkinSelection::Purchased { price } => {
                self.run.set_skin(skin);
                self.notice = Some(format!("Bought {} for {} coins", skin.name(), price));
                self.events.push(AppEvent::SkinPurchased { skin, price });
                true
            }
            SkinSelection::Rejected { price, balance } => {
                // No notice; unaffordable prices are drawn dimmed.
                debug!(skin = skin.name(), price, balance, "Skin purchase rejected");
                self.events.push(AppEvent::SkinRejected {
                    skin,
                    price,
                    balance,
                });
                false
            }
        }
    }
}
