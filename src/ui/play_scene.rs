//! Run rendering: the scrolling field, HUD and the run-ended banner.

use super::common::{
    color, info_line, page_layout, render_footer, render_info_panel_frame,
    render_run_ended_banner,
};
use crate::app::{App, Screen};
use crate::core::config::GameConfig;
use crate::core::palette::{Rgb, GRASS_GREEN, GROUND_BROWN, PARTICLE_COLORS};
use crate::cosmetics::{BackgroundTheme, TrailEffect};
use crate::run::{CrashCause, RunSession};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns of trail drawn behind the bird.
const TRAIL_LENGTH: usize = 4;

/// One terminal cell of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Self {
            glyph: ' ',
            fg: bg,
            bg,
            bold: false,
        }
    }
}

/// Render the active run or the run-ended screen.
pub fn render_run(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.run().session() else {
        return;
    };

    let layout = page_layout(frame, area, app, Color::Cyan, 22);

    let cells = paint_field(
        session,
        app.run().config(),
        app.profile().background_theme,
        app.profile().trail_effect,
        layout.body.width as usize,
        layout.body.height as usize,
    );
    let lines: Vec<Line> = cells
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|cell| {
                        let mut style = Style::default().fg(color(cell.fg)).bg(color(cell.bg));
                        if cell.bold {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        Span::styled(cell.glyph.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.body);

    render_hud(frame, layout.side, app, session);

    if app.screen() == Screen::RunEnded {
        let cause = match session.crash {
            Some(CrashCause::Ground) => "You hit the ground",
            _ => "You hit a pipe",
        };
        let message = format!("{} with {} points.", cause, session.score);
        let highlight = app.last_run_new_record().then_some("NEW HIGH SCORE!");
        render_run_ended_banner(frame, layout.body, "GAME OVER", &message, highlight);
        render_footer(
            frame,
            &layout,
            "Run over",
            Color::Red,
            &[("R/Enter", "Retry"), ("Esc", "Menu"), ("Q", "Quit")],
        );
    } else {
        render_footer(
            frame,
            &layout,
            &format!("Score: {}", session.score),
            Color::Green,
            &[("Space/Up/Click", "Flap"), ("Ctrl+C", "Quit")],
        );
    }
}

fn render_hud(frame: &mut Frame, area: Rect, app: &App, session: &RunSession) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let profile = app.profile();
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", session.difficulty.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Score", session.score.to_string(), Color::White),
        info_line("Best", profile.high_score.to_string(), Color::Yellow),
        info_line("Coins", profile.coins.to_string(), Color::Yellow),
        Line::from(""),
        info_line(
            "Skin",
            session.avatar.skin.name().to_string(),
            color(session.avatar.skin.color()),
        ),
        info_line("Sky", profile.background_theme.name().to_string(), Color::Gray),
        info_line("Trail", profile.trail_effect.name().to_string(), Color::Gray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Rasterize the field into `width` x `height` cells. Each cell samples the
/// field at its center.
pub fn paint_field(
    session: &RunSession,
    config: &GameConfig,
    theme: BackgroundTheme,
    trail: TrailEffect,
    width: usize,
    height: usize,
) -> Vec<Vec<Cell>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let x_scale = config.field_width / width as f64;
    let y_scale = config.field_height / height as f64;
    let ground_top = config.field_height - config.ground_band_height;
    let sky = theme.sky_color();

    let mut cells = Vec::with_capacity(height);
    for row in 0..height {
        let fy = (row as f64 + 0.5) * y_scale;
        let mut line = Vec::with_capacity(width);
        for col in 0..width {
            let fx = (col as f64 + 0.5) * x_scale;
            line.push(background_cell(fy, ground_top, y_scale, sky));
            for obstacle in &session.obstacles {
                if fx >= obstacle.x && fx < obstacle.right_edge() {
                    if fy < obstacle.gap_top() || fy >= obstacle.gap_bottom() {
                        let edge =
                            fx < obstacle.x + x_scale || fx >= obstacle.right_edge() - x_scale;
                        let fg = if edge {
                            obstacle.color.darkened()
                        } else {
                            obstacle.color
                        };
                        line[col] = Cell {
                            glyph: '█',
                            fg,
                            bg: sky,
                            bold: false,
                        };
                    }
                    break;
                }
            }
        }
        cells.push(line);
    }

    let to_cell = |x: f64, y: f64| -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / x_scale) as usize;
        let row = (y / y_scale) as usize;
        (col < width && row < height).then_some((row, col))
    };

    let avatar = &session.avatar;
    if let Some((row, col)) = to_cell(avatar.x, avatar.y) {
        if avatar.alive {
            paint_trail(&mut cells[row], col, trail, session.tick_count);
        }

        let glyph = if avatar.tilt < -10.0 {
            '▲'
        } else if avatar.tilt > 30.0 {
            '▼'
        } else {
            '►'
        };
        let bg = cells[row][col].bg;
        cells[row][col] = Cell {
            glyph,
            fg: avatar.skin.color(),
            bg,
            bold: true,
        };

        // Wing flaps up, level, down over one phase period.
        if col > 0 && avatar.alive {
            let wing = match avatar.wing_phase as u32 {
                0 => '^',
                1 => '-',
                _ => 'v',
            };
            let bg = cells[row][col - 1].bg;
            cells[row][col - 1] = Cell {
                glyph: wing,
                fg: avatar.skin.color().darkened(),
                bg,
                bold: false,
            };
        }
    }

    for particle in &session.particles {
        if let Some((row, col)) = to_cell(particle.x, particle.y) {
            let glyph = if particle.fade() > 0.5 { '*' } else { '·' };
            let bg = cells[row][col].bg;
            cells[row][col] = Cell {
                glyph,
                fg: particle.color,
                bg,
                bold: particle.size >= 10,
            };
        }
    }

    cells
}

fn background_cell(fy: f64, ground_top: f64, y_scale: f64, sky: Rgb) -> Cell {
    if fy < ground_top {
        return Cell::blank(sky);
    }
    if fy < ground_top + y_scale {
        return Cell {
            glyph: '▀',
            fg: GRASS_GREEN,
            bg: GROUND_BROWN,
            bold: false,
        };
    }
    Cell::blank(GROUND_BROWN)
}

fn paint_trail(row: &mut [Cell], avatar_col: usize, trail: TrailEffect, tick: u64) {
    if trail == TrailEffect::None {
        return;
    }
    for step in 1..=TRAIL_LENGTH {
        let Some(col) = avatar_col.checked_sub(step + 1) else {
            break;
        };
        let fg = trail.color().unwrap_or_else(|| {
            PARTICLE_COLORS[(tick as usize + step) % PARTICLE_COLORS.len()]
        });
        let glyph = match trail {
            TrailEffect::Sparkle if step % 2 == 0 => '·',
            TrailEffect::Sparkle => '✦',
            TrailEffect::Fire => '≈',
            _ => '═',
        };
        if row[col].glyph == ' ' {
            row[col] = Cell {
                glyph,
                fg,
                bg: row[col].bg,
                bold: false,
            };
        }
    }
}
