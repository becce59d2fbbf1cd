// Cafe card rendering.
// Turns cafe records into cards for the list view and for plain-text output.

use std::fmt;

use ratatui::{prelude::*, widgets::*};

use crate::overpass::Cafe;
use crate::state::{LoadingState, SelectableList};

pub const NO_NEARBY_CAFES: &str = "No cafes found nearby ☹️";
pub const NO_SAVED_CAFES: &str = "No saved cafes yet";

/// Display fields for one cafe, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeCard {
    pub name: String,
    pub address: String,
    pub map_url: String,
}

impl From<&Cafe> for CafeCard {
    fn from(cafe: &Cafe) -> Self {
        Self {
            name: cafe.display_name().to_string(),
            address: cafe.address(),
            map_url: cafe.map_url(),
        }
    }
}

impl fmt::Display for CafeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.address)?;
        write!(f, "  📍 {}", self.map_url)
    }
}

/// What a list of cafes renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Empty(&'static str),
    Cards(Vec<CafeCard>),
}

/// Build the view for `cafes`, using `empty_message` when there are none.
pub fn card_view(cafes: &[Cafe], empty_message: &'static str) -> CardView {
    if cafes.is_empty() {
        CardView::Empty(empty_message)
    } else {
        CardView::Cards(cafes.iter().map(CafeCard::from).collect())
    }
}

/// Plain-text rendering, one blank line between cards.
pub fn render_text(cafes: &[Cafe], empty_message: &'static str) -> String {
    match card_view(cafes, empty_message) {
        CardView::Empty(message) => message.to_string(),
        CardView::Cards(cards) => cards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(text, area);
}

/// Render a cafe list in whatever state it is in.
pub fn render_cafe_list(
    frame: &mut Frame,
    list: &mut SelectableList<Cafe>,
    area: Rect,
    title: &str,
    idle_message: &str,
    empty_message: &'static str,
) {
    let cards = match &list.data {
        LoadingState::Idle => return render_empty(frame, area, idle_message),
        LoadingState::Loading => return render_loading(frame, area, "Searching"),
        LoadingState::Error(e) => return render_error(frame, area, e),
        LoadingState::Loaded(cafes) => match card_view(cafes, empty_message) {
            CardView::Empty(message) => return render_empty(frame, area, message),
            CardView::Cards(cards) => cards,
        },
    };

    let items: Vec<ListItem> = cards.into_iter().map(card_item).collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", title, list.len())),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, &mut list.list_state);
}

/// Three-line list entry for a card.
fn card_item(card: CafeCard) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            card.name,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!("  {}", card.address))),
        Line::from(Span::styled(
            format!("  📍 {}", card.map_url),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn cafe(json: serde_json::Value) -> Cafe {
        serde_json::from_value(json).unwrap()
    }

    fn screen(list: &mut SelectableList<Cafe>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_cafe_list(frame, list, area, "Nearby", "idle", NO_NEARBY_CAFES);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_empty_view() {
        assert_eq!(card_view(&[], NO_NEARBY_CAFES), CardView::Empty(NO_NEARBY_CAFES));
        assert_eq!(render_text(&[], NO_SAVED_CAFES), NO_SAVED_CAFES);
    }

    #[test]
    fn test_defaults_substituted() {
        let cafes = vec![cafe(serde_json::json!({"id": 1, "lat": 1.0, "lon": 2.0}))];
        let CardView::Cards(cards) = card_view(&cafes, NO_NEARBY_CAFES) else {
            panic!("expected cards");
        };
        assert_eq!(
            cards[0],
            CafeCard {
                name: "Unnamed Cafe".to_string(),
                address: "Address not available".to_string(),
                map_url: "https://www.google.com/maps?q=1,2".to_string(),
            }
        );
    }

    #[test]
    fn test_render_text() {
        let cafes = vec![
            cafe(serde_json::json!({"id": 1, "lat": 1.5, "lon": 2.5,
                "tags": {"name": "Kaffebar", "addr:street": "Elm St"}})),
            cafe(serde_json::json!({"id": 2, "lat": 3.5, "lon": 4.5})),
        ];
        let text = render_text(&cafes, NO_NEARBY_CAFES);
        assert_eq!(
            text,
            "Kaffebar\n  Elm St\n  📍 https://www.google.com/maps?q=1.5,2.5\n\n\
             Unnamed Cafe\n  Address not available\n  📍 https://www.google.com/maps?q=3.5,4.5"
        );
    }

    #[test]
    fn test_list_shows_placeholder_when_empty() {
        let mut list = SelectableList::new();
        list.set_loaded(Vec::new());
        assert!(screen(&mut list).contains("No cafes found nearby"));
    }

    #[test]
    fn test_list_shows_cards() {
        let mut list = SelectableList::new();
        list.set_loaded(vec![cafe(serde_json::json!({
            "id": 5, "lat": 1.0, "lon": 2.0, "tags": {"name": "Kaffebar"}
        }))]);
        let screen = screen(&mut list);
        assert!(screen.contains("Kaffebar"));
        assert!(screen.contains("Address not available"));
        assert!(screen.contains("Nearby (1)"));
    }
}
