//! Key and mouse mapping.
//!
//! Resolves raw crossterm events to an app [`Command`] for the current
//! screen. The app never sees raw events.

use crate::app::{Command, MenuDestination, Screen};
use crate::cosmetics::{BackgroundTheme, SkinId, TrailEffect};
use crate::run::Difficulty;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map a key press on `screen` to a command. Unbound keys map to `None`.
pub fn map_key(screen: Screen, key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match screen {
        Screen::MainMenu => main_menu_key(key.code),
        Screen::ActiveRun => match key.code {
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Command::Boost),
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Boost),
            _ => None,
        },
        Screen::RunEnded => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter | KeyCode::Char(' ') => {
                Some(Command::Retry)
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::Back),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        },
        page => menu_page_key(page, key.code),
    }
}

/// Left click boosts during a run.
pub fn map_mouse(screen: Screen, mouse: MouseEvent) -> Option<Command> {
    match (screen, mouse.kind) {
        (Screen::ActiveRun, MouseEventKind::Down(MouseButton::Left)) => Some(Command::Boost),
        _ => None,
    }
}

fn main_menu_key(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Command::StartRun
        }
        KeyCode::Char('m') | KeyCode::Char('M') => Command::Open(MenuDestination::ModeSelect),
        KeyCode::Char('h') | KeyCode::Char('H') => Command::Open(MenuDestination::HighScore),
        KeyCode::Char('s') | KeyCode::Char('S') => Command::Open(MenuDestination::Settings),
        KeyCode::Char('k') | KeyCode::Char('K') => Command::Open(MenuDestination::SkinSelector),
        KeyCode::Char('b') | KeyCode::Char('B') => {
            Command::Open(MenuDestination::BackgroundTheme)
        }
        KeyCode::Char('t') | KeyCode::Char('T') => Command::Open(MenuDestination::TrailEffect),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn menu_page_key(screen: Screen, code: KeyCode) -> Option<Command> {
    if matches!(code, KeyCode::Esc | KeyCode::Backspace) {
        return Some(Command::Back);
    }

    match screen {
        Screen::ModeSelect => match code {
            KeyCode::Char('e') | KeyCode::Char('E') => {
                Some(Command::SetDifficulty(Difficulty::Easy))
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                Some(Command::SetDifficulty(Difficulty::Normal))
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                Some(Command::SetDifficulty(Difficulty::Hard))
            }
            code => option_number(code)
                .and_then(Difficulty::from_index)
                .map(Command::SetDifficulty),
        },
        Screen::Settings => match code {
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Enter => {
                Some(Command::CycleDifficulty)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::ResetHighScore),
            _ => None,
        },
        Screen::SkinSelector => option_number(code)
            .and_then(SkinId::from_index)
            .map(Command::SelectSkin),
        Screen::BackgroundThemeSelector => option_number(code)
            .and_then(BackgroundTheme::from_index)
            .map(Command::SelectTheme),
        Screen::TrailEffectSelector => option_number(code)
            .and_then(TrailEffect::from_index)
            .map(Command::SelectTrail),
        _ => None,
    }
}

/// '1'..'9' as a zero-based option index.
fn option_number(code: KeyCode) -> Option<usize> {
    match code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_main_menu_keys() {
        assert_eq!(
            map_key(Screen::MainMenu, press(KeyCode::Enter)),
            Some(Command::StartRun)
        );
        assert_eq!(
            map_key(Screen::MainMenu, press(KeyCode::Char('k'))),
            Some(Command::Open(MenuDestination::SkinSelector))
        );
        assert_eq!(
            map_key(Screen::MainMenu, press(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
        assert_eq!(map_key(Screen::MainMenu, press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_boost_keys_only_in_run() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(map_key(Screen::ActiveRun, press(code)), Some(Command::Boost));
        }
        assert_eq!(map_key(Screen::ActiveRun, press(KeyCode::Esc)), None);
        assert_eq!(map_key(Screen::Settings, press(KeyCode::Up)), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(Screen::ActiveRun, key), Some(Command::Quit));
        assert_eq!(map_key(Screen::SkinSelector, key), Some(Command::Quit));
    }

    #[test]
    fn test_selector_numbers() {
        assert_eq!(
            map_key(Screen::SkinSelector, press(KeyCode::Char('7'))),
            Some(Command::SelectSkin(SkinId::NeonCyber))
        );
        assert_eq!(map_key(Screen::SkinSelector, press(KeyCode::Char('8'))), None);
        assert_eq!(
            map_key(Screen::TrailEffectSelector, press(KeyCode::Char('1'))),
            Some(Command::SelectTrail(TrailEffect::None))
        );
        assert_eq!(
            map_key(Screen::BackgroundThemeSelector, press(KeyCode::Char('3'))),
            Some(Command::SelectTheme(BackgroundTheme::Storm))
        );
    }

    #[test]
    fn test_mode_select_keys() {
        assert_eq!(
            map_key(Screen::ModeSelect, press(KeyCode::Char('h'))),
            Some(Command::SetDifficulty(Difficulty::Hard))
        );
        assert_eq!(
            map_key(Screen::ModeSelect, press(KeyCode::Char('1'))),
            Some(Command::SetDifficulty(Difficulty::Easy))
        );
        assert_eq!(
            map_key(Screen::ModeSelect, press(KeyCode::Esc)),
            Some(Command::Back)
        );
    }

    #[test]
    fn test_run_ended_keys() {
        assert_eq!(
            map_key(Screen::RunEnded, press(KeyCode::Char('r'))),
            Some(Command::Retry)
        );
        assert_eq!(
            map_key(Screen::RunEnded, press(KeyCode::Esc)),
            Some(Command::Back)
        );
    }

    #[test]
    fn test_mouse_boost() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(Screen::ActiveRun, click), Some(Command::Boost));
        assert_eq!(map_mouse(Screen::MainMenu, click), None);
    }
}
