// UI module for rendering the TUI.
// Tab bar, cafe cards, status bar, and help overlay.

pub mod cards;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};
use crate::state::NoticeLevel;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab bar
            Constraint::Min(1),    // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame, app);
    }
}

/// Draw the card list for the active view.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.view {
        View::Nearby => cards::render_cafe_list(
            frame,
            &mut app.nearby,
            area,
            "Nearby",
            "Press Enter to find cafes near you",
            cards::NO_NEARBY_CAFES,
        ),
        View::Saved => cards::render_cafe_list(
            frame,
            &mut app.saved,
            area,
            "Saved",
            "Press Tab to load saved cafes",
            cards::NO_SAVED_CAFES,
        ),
    }
}

fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Green,
        NoticeLevel::Warn => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

/// Latest notice on the left, key hints on the right.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = " Enter search  s save  o open  Tab switch  ? help  q quit ";

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(hints.len() as u16)])
        .split(area);

    let notice = match app.notices.latest() {
        Some(notice) => Span::styled(
            format!(" {}", notice.message),
            Style::default().fg(notice_color(notice.level)),
        ),
        None => Span::styled(
            format!(" {}", app.finder().locator().describe()),
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(notice)), chunks[0]);

    let hints = Paragraph::new(hints)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[1]);
}

/// Key bindings and recent notices.
fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let width = 64.min(area.width);
    let height = 22.min(area.height);
    let modal_area = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, modal_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), Style::default().fg(Color::Yellow)),
            Span::raw(desc),
        ])
    };

    let mut lines = vec![
        key("Enter / r", "Find cafes near you"),
        key("s", "Save selected cafe"),
        key("o", "Open selected cafe in maps"),
        key("Tab", "Switch between Nearby and Saved"),
        key("↑↓ / jk", "Move selection"),
        key("?", "Toggle this help"),
        key("q / Esc", "Quit"),
        Line::raw(""),
        Line::styled(
            format!(
                "  Location: {}   Radius: {}m",
                app.finder().locator().describe(),
                app.finder().radius()
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::styled(" Recent", Style::default().add_modifier(Modifier::BOLD)),
    ];

    lines.extend(app.notices.iter().rev().map(|notice| {
        Line::from(vec![
            Span::styled(
                format!("  {} ", notice.timestamp.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                notice.message.clone(),
                Style::default().fg(notice_color(notice.level)),
            ),
        ])
    }));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help "),
    );
    frame.render_widget(help, modal_area);
}
