//! Cosmetic pickers: bird skins (bought with coins), background themes and
//! trail effects.

use super::common::{color, info_line, page_layout, render_footer, render_info_panel_frame};
use crate::app::App;
use crate::cosmetics::{BackgroundTheme, SkinCategory, SkinId, TrailEffect};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_skin_selector(frame: &mut Frame, area: Rect, app: &App) {
    let layout = page_layout(frame, area, app, Color::Magenta, 24);
    let profile = app.profile();

    let mut lines = Vec::new();
    for category in SkinCategory::ALL {
        lines.push(Line::from(Span::styled(
            format!(" {}", category.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for skin in SkinId::ALL.iter().filter(|s| s.category() == category) {
            let equipped = *skin == profile.equipped_skin;
            let status = if equipped {
                Span::styled("equipped", Style::default().fg(Color::Green))
            } else if profile.is_unlocked(*skin) {
                Span::styled("owned", Style::default().fg(Color::Gray))
            } else if profile.coins >= skin.price() {
                Span::styled(
                    format!("{} coins", skin.price()),
                    Style::default().fg(Color::Yellow),
                )
            } else {
                Span::styled(
                    format!("{} coins", skin.price()),
                    Style::default().fg(Color::DarkGray),
                )
            };
            lines.push(Line::from(vec![
                Span::raw(if equipped { " ▸ " } else { "   " }),
                Span::styled(
                    format!("[{}] ", skin.index() + 1),
                    Style::default().fg(Color::White),
                ),
                Span::styled("● ", Style::default().fg(color(skin.color()))),
                Span::styled(
                    format!("{:<16}", skin.name()),
                    Style::default().fg(Color::White),
                ),
                status,
            ]));
        }
    }
    frame.render_widget(Paragraph::new(lines), layout.body);

    let inner = render_info_panel_frame(frame, layout.side);
    let info = vec![
        info_line("Coins", profile.coins.to_string(), Color::Yellow),
        info_line(
            "Owned",
            format!("{}/{}", profile.unlocked_skins.len(), SkinId::ALL.len()),
            Color::White,
        ),
    ];
    frame.render_widget(Paragraph::new(info), inner);

    render_footer(
        frame,
        &layout,
        app.notice().unwrap_or("Locked skins are bought on selection"),
        Color::Yellow,
        &[("1-7", "Buy/Equip"), ("Esc", "Back")],
    );
}

pub fn render_theme_selector(frame: &mut Frame, area: Rect, app: &App) {
    let layout = page_layout(frame, area, app, Color::Blue, 24);
    let current = app.profile().background_theme;

    let lines: Vec<Line> = BackgroundTheme::ALL
        .iter()
        .map(|theme| {
            option_line(
                theme.index(),
                theme.name(),
                *theme == current,
                Span::styled("██", Style::default().fg(color(theme.sky_color()))),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.body);

    render_footer(
        frame,
        &layout,
        "Changes the sky behind the pipes",
        Color::DarkGray,
        &[("1-3", "Select"), ("Esc", "Back")],
    );
    let inner = render_info_panel_frame(frame, layout.side);
    frame.render_widget(
        Paragraph::new(info_line("Current", current.name().to_string(), Color::White)),
        inner,
    );
}

pub fn render_trail_selector(frame: &mut Frame, area: Rect, app: &App) {
    let layout = page_layout(frame, area, app, Color::Blue, 24);
    let current = app.profile().trail_effect;

    let lines: Vec<Line> = TrailEffect::ALL
        .iter()
        .map(|trail| {
            let swatch = match trail.color() {
                Some(rgb) => Span::styled("══", Style::default().fg(color(rgb))),
                None if *trail == TrailEffect::Rainbow => {
                    Span::styled("══", Style::default().fg(Color::Magenta))
                }
                None => Span::raw("  "),
            };
            option_line(trail.index(), trail.name(), *trail == current, swatch)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.body);

    render_footer(
        frame,
        &layout,
        "Drawn behind the bird while it flies",
        Color::DarkGray,
        &[("1-4", "Select"), ("Esc", "Back")],
    );
    let inner = render_info_panel_frame(frame, layout.side);
    frame.render_widget(
        Paragraph::new(info_line("Current", current.name().to_string(), Color::White)),
        inner,
    );
}

fn option_line(
    index: usize,
    name: &str,
    selected: bool,
    swatch: Span<'static>,
) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::raw(if selected { " ▸ " } else { "   " }),
        Span::styled(format!("[{}] ", index + 1), Style::default().fg(Color::White)),
        swatch,
        Span::styled(format!(" {}", name), style),
    ])
}
