//! Screens and the already-resolved commands the app accepts.
//!
//! Key presses and clicks are resolved to a [`Command`] by the input layer;
//! the app never does hit-testing.

use crate::cosmetics::{BackgroundTheme, SkinId, TrailEffect};
use crate::run::Difficulty;

/// Coarse application mode. Decides which commands are accepted and which
/// view is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    ModeSelect,
    Settings,
    SkinSelector,
    BackgroundThemeSelector,
    TrailEffectSelector,
    HighScore,
    ActiveRun,
    RunEnded,
}

impl Screen {
    /// Screens that return to the main menu on Back and flush the profile.
    pub fn is_menu_page(&self) -> bool {
        matches!(
            self,
            Self::ModeSelect
                | Self::Settings
                | Self::SkinSelector
                | Self::BackgroundThemeSelector
                | Self::TrailEffectSelector
                | Self::HighScore
        )
    }

    /// Screens whose tick is forwarded to the run controller.
    pub fn is_gameplay(&self) -> bool {
        matches!(self, Self::ActiveRun | Self::RunEnded)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::MainMenu => "Sky Hopper",
            Self::ModeSelect => "Select Mode",
            Self::Settings => "Settings",
            Self::SkinSelector => "Bird Skins",
            Self::BackgroundThemeSelector => "Background",
            Self::TrailEffectSelector => "Trail Effect",
            Self::HighScore => "High Score",
            Self::ActiveRun => "Sky Hopper",
            Self::RunEnded => "Game Over",
        }
    }
}

/// Non-gameplay pages reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuDestination {
    ModeSelect,
    Settings,
    SkinSelector,
    BackgroundTheme,
    TrailEffect,
    HighScore,
}

impl MenuDestination {
    pub const ALL: [MenuDestination; 6] = [
        Self::ModeSelect,
        Self::HighScore,
        Self::Settings,
        Self::SkinSelector,
        Self::BackgroundTheme,
        Self::TrailEffect,
    ];

    pub fn screen(&self) -> Screen {
        match self {
            Self::ModeSelect => Screen::ModeSelect,
            Self::Settings => Screen::Settings,
            Self::SkinSelector => Screen::SkinSelector,
            Self::BackgroundTheme => Screen::BackgroundThemeSelector,
            Self::TrailEffect => Screen::TrailEffectSelector,
            Self::HighScore => Screen::HighScore,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ModeSelect => "Modes",
            Self::Settings => "Settings",
            Self::SkinSelector => "Bird Skin",
            Self::BackgroundTheme => "Background",
            Self::TrailEffect => "Trail",
            Self::HighScore => "High Score",
        }
    }
}

/// Discrete, already-resolved user intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flap during a run.
    Boost,
    /// Leave the current page.
    Back,
    StartRun,
    Retry,
    Open(MenuDestination),
    /// Mode select: pick a tier and return to the menu.
    SetDifficulty(Difficulty),
    /// Settings: Easy -> Normal -> Hard -> Easy.
    CycleDifficulty,
    ResetHighScore,
    SelectSkin(SkinId),
    SelectTheme(BackgroundTheme),
    SelectTrail(TrailEffect),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_pages() {
        for dest in MenuDestination::ALL {
            assert!(dest.screen().is_menu_page());
            assert!(!dest.screen().is_gameplay());
        }
        assert!(!Screen::MainMenu.is_menu_page());
        assert!(!Screen::ActiveRun.is_menu_page());
        assert!(!Screen::RunEnded.is_menu_page());
    }

    #[test]
    fn test_gameplay_screens() {
        assert!(Screen::ActiveRun.is_gameplay());
        assert!(Screen::RunEnded.is_gameplay());
        assert!(!Screen::MainMenu.is_gameplay());
    }
}
