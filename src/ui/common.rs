//! Shared UI pieces: color conversion, the page frame every screen draws
//! into, the key-hint footer and the run-ended overlay.

use crate::app::App;
use crate::core::palette::Rgb;
use crate::profile::Profile;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Areas of a page drawn by [`page_layout`].
pub struct PageLayout {
    /// Field or list area.
    pub body: Rect,
    /// Side column for the info panel or HUD.
    pub side: Rect,
    /// Two rows under the body: key hints, then a message.
    pub footer: Rect,
    pub accent: Color,
}

/// Coin and best-score chip shown on the right of every page border.
pub fn wallet_label(profile: &Profile) -> String {
    format!(" {} coins | best {} ", profile.coins, profile.high_score)
}

/// Frame the current screen: its title on the left of the border, the wallet
/// on the right, and the inside split into body, side column and footer.
pub fn page_layout(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    accent: Color,
    side_width: u16,
) -> PageLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Title::from(format!(" {} ", app.screen().title())))
        .title(
            Title::from(Span::styled(
                wallet_label(app.profile()),
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, side] = split2(
        inner,
        Direction::Horizontal,
        Constraint::Min(20),
        Constraint::Length(side_width),
    );
    let [body, footer] = split2(
        left,
        Direction::Vertical,
        Constraint::Min(4),
        Constraint::Length(2),
    );

    PageLayout {
        body,
        side,
        footer,
        accent,
    }
}

fn split2(area: Rect, direction: Direction, first: Constraint, second: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Key chips like ` Esc  back`, the key drawn on the page accent.
pub fn key_hint_spans(keys: &[(&str, &str)], accent: Color) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, action) in keys {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(accent),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::Gray),
        ));
    }
    spans
}

/// Key hints on the first footer row, `message` on the second.
pub fn render_footer(
    frame: &mut Frame,
    layout: &PageLayout,
    message: &str,
    message_color: Color,
    keys: &[(&str, &str)],
) {
    let area = layout.footer;
    if area.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Line::from(key_hint_spans(keys, layout.accent))),
        Rect { height: 1, ..area },
    );

    if area.height >= 2 {
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(message_color)),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Info panel frame with a DarkGray border. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}


/// "Label: value" info line.
pub fn info_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Compact banner at the bottom of `area`. The field stays visible behind
/// it so the crash particles can still be seen.
pub fn render_run_ended_banner(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    highlight: Option<&str>,
) {
    let banner_height: u16 = if highlight.is_some() { 5 } else { 4 };
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height.min(area.height),
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            title.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(message.to_string(), Style::default().fg(Color::White)),
    ])];

    if let Some(highlight) = highlight {
        lines.push(Line::from(Span::styled(
            highlight.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(Span::styled(
        "[R] Retry  [Esc] Menu",
        Style::default().fg(Color::DarkGray),
    )));

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Fallback when the terminal is too small to lay out a page.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let text = Paragraph::new(Line::from(Span::styled(
        "Terminal too small",
        Style::default().fg(Color::Yellow),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(text, area);
}
