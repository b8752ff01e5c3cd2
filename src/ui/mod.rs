//! Terminal view layer. Reads the app state and never mutates it.

pub mod common;
pub mod menu_scene;
pub mod play_scene;
pub mod shop_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Smallest terminal the pages are laid out for.
const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 12;

/// Draw the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        common::render_too_small(frame, area);
        return;
    }

    match app.screen() {
        Screen::MainMenu => menu_scene::render_main_menu(frame, area, app),
        Screen::ModeSelect => menu_scene::render_mode_select(frame, area, app),
        Screen::Settings => menu_scene::render_settings(frame, area, app),
        Screen::HighScore => menu_scene::render_high_score(frame, area, app),
        Screen::SkinSelector => shop_scene::render_skin_selector(frame, area, app),
        Screen::BackgroundThemeSelector => shop_scene::render_theme_selector(frame, area, app),
        Screen::TrailEffectSelector => shop_scene::render_trail_selector(frame, area, app),
        Screen::ActiveRun | Screen::RunEnded => play_scene::render_run(frame, area, app),
    }
}
