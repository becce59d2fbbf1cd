// Tab bar rendering.
// Shows the Nearby and Saved views with counts.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};

/// Draw the tab bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let views = [View::Nearby, View::Saved];

    let tab_titles: Vec<Line> = views
        .iter()
        .map(|view| {
            let count = match view {
                View::Nearby => app.nearby.data.data().map(Vec::len),
                View::Saved => app.saved.data.data().map(Vec::len),
            };
            let title = match count {
                Some(n) => format!("{} ({})", view.title(), n),
                None => view.title().to_string(),
            };

            let style = if *view == app.view {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let selected_index = views.iter().position(|v| *v == app.view).unwrap_or(0);

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" cuppa ☕ ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
