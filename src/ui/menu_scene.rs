//! Main menu, mode select, settings and high score pages.

use super::common::{
    centered_rect, color, info_line, page_layout, render_footer, render_info_panel_frame,
};
use crate::app::{App, MenuDestination};
use crate::run::Difficulty;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const LOGO: [&str; 3] = [
    "╔═╗╦╔═╦ ╦  ╦ ╦╔═╗╔═╗╔═╗╔═╗╦═╗",
    "╚═╗╠╩╗╚╦╝  ╠═╣║ ║╠═╝╠═╝║╣ ╠╦╝",
    "╚═╝╩ ╩ ╩   ╩ ╩╚═╝╩  ╩  ╚═╝╩╚═",
];

fn hotkey(destination: MenuDestination) -> &'static str {
    match destination {
        MenuDestination::ModeSelect => "[M]",
        MenuDestination::HighScore => "[H]",
        MenuDestination::Settings => "[S]",
        MenuDestination::SkinSelector => "[K]",
        MenuDestination::BackgroundTheme => "[B]",
        MenuDestination::TrailEffect => "[T]",
    }
}

pub fn render_main_menu(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let profile = app.profile();
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(Color::White)),
        Span::styled(
            "Play",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", profile.difficulty.name()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    for destination in MenuDestination::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", hotkey(destination)),
                Style::default().fg(Color::White),
            ),
            Span::styled(destination.label(), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("[Q] ", Style::default().fg(Color::White)),
        Span::styled("Quit", Style::default().fg(Color::Gray)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Best ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            profile.high_score.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("   Coins ", Style::default().fg(Color::DarkGray)),
        Span::styled(profile.coins.to_string(), Style::default().fg(Color::Yellow)),
    ]));

    let height = lines.len() as u16;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, centered_rect(inner, inner.width, height));
}

pub fn render_mode_select(frame: &mut Frame, area: Rect, app: &App) {
    let layout = page_layout(frame, area, app, Color::Cyan, 24);
    let current = app.profile().difficulty;

    let mut lines = vec![Line::from("")];
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let selected = *difficulty == current;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(format!("[{}] {}", i + 1, difficulty.name()), style),
            Span::styled(
                format!("  {}", difficulty.blurb()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), layout.body);

    let inner = render_info_panel_frame(frame, layout.side);
    let info = vec![
        info_line("Current", current.name().to_string(), Color::Yellow),
        info_line(
            "Speed",
            format!("{} px/tick", current.obstacle_speed()),
            Color::White,
        ),
    ];
    frame.render_widget(Paragraph::new(info), inner);

    render_footer(
        frame,
        &layout,
        "Pick a difficulty",
        Color::Cyan,
        &[("1-3/E/N/H", "Select"), ("Esc", "Back")],
    );
}

pub fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let layout = page_layout(frame, area, app, Color::Cyan, 24);
    let profile = app.profile();

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  [D] Difficulty: ", Style::default().fg(Color::White)),
            Span::styled(
                profile.difficulty.name(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [R] Reset high score", Style::default().fg(Color::White)),
            Span::styled(
                format!("  (currently {})", profile.high_score),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), layout.body);

    let inner = render_info_panel_frame(frame, layout.side);
    let info = vec![
        info_line("Coins", profile.coins.to_string(), Color::Yellow),
        info_line(
            "Skins",
            format!("{}/7", profile.unlocked_skins.len()),
            Color::White,
        ),
    ];
    frame.render_widget(Paragraph::new(info), inner);

    render_footer(
        frame,
        &layout,
        "Changes are saved when you leave this page",
        Color::DarkGray,
        &[("D", "Cycle"), ("R", "Reset"), ("Esc", "Back")],
    );
}

pub fn render_high_score(frame: &mut Frame, area: Rect, app: &App) {
    let layout = page_layout(frame, area, app, Color::Yellow, 24);
    let profile = app.profile();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Best run",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            profile.high_score.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        layout.body,
    );

    let inner = render_info_panel_frame(frame, layout.side);
    let skin = profile.equipped_skin;
    let info = vec![
        info_line("Coins", profile.coins.to_string(), Color::Yellow),
        info_line("Skin", skin.name().to_string(), color(skin.color())),
    ];
    frame.render_widget(Paragraph::new(info), inner);

    render_footer(
        frame,
        &layout,
        "Each pipe cleared is worth one coin",
        Color::DarkGray,
        &[("Esc", "Back")],
    );
}
