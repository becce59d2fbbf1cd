// App state and main event loop.
// Manages the Nearby/Saved views, key handling, and the background search.

use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::error::Result;
use crate::finder::{Finder, SearchOutcome};
use crate::overpass::Cafe;
use crate::state::{Notice, Notices, SelectableList};
use crate::store::FavoritesStore;
use crate::ui;

/// Active view in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Nearby,
    Saved,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Nearby => "Nearby",
            View::Saved => "Saved",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            View::Nearby => View::Saved,
            View::Saved => View::Nearby,
        }
    }
}

/// Main application state.
pub struct App {
    /// Currently active view.
    pub view: View,
    /// Results of the last search.
    pub nearby: SelectableList<Cafe>,
    /// Saved cafes, loaded on demand.
    pub saved: SelectableList<Cafe>,
    /// User-facing messages.
    pub notices: Notices,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    finder: Finder,
    store: FavoritesStore,
    results_tx: mpsc::UnboundedSender<SearchOutcome>,
    results_rx: mpsc::UnboundedReceiver<SearchOutcome>,
}

impl App {
    pub fn new(finder: Finder, store: FavoritesStore) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            view: View::default(),
            nearby: SelectableList::new(),
            saved: SelectableList::new(),
            notices: Notices::default(),
            show_help: false,
            should_quit: false,
            finder,
            store,
            results_tx,
            results_rx,
        }
    }

    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    /// Main event loop. Must run inside a tokio runtime.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
            self.poll_search();
        }
        Ok(())
    }

    /// Handle keyboard events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Enter | KeyCode::Char('r') => self.start_search(),
            KeyCode::Char('s') => self.save_selected(),
            KeyCode::Char('o') => self.open_selected(),
            KeyCode::Tab | KeyCode::BackTab => self.switch_view(self.view.toggle()),
            KeyCode::Char('1') => self.switch_view(View::Nearby),
            KeyCode::Char('2') => self.switch_view(View::Saved),
            KeyCode::Up | KeyCode::Char('k') => self.current_list_mut().select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.current_list_mut().select_next(),
            _ => {}
        }
    }

    fn current_list(&self) -> &SelectableList<Cafe> {
        match self.view {
            View::Nearby => &self.nearby,
            View::Saved => &self.saved,
        }
    }

    fn current_list_mut(&mut self) -> &mut SelectableList<Cafe> {
        match self.view {
            View::Nearby => &mut self.nearby,
            View::Saved => &mut self.saved,
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn switch_view(&mut self, view: View) {
        self.view = view;
        if view == View::Saved {
            self.show_saved();
        }
    }

    /// Kick off a search unless one is already running.
    pub fn start_search(&mut self) {
        self.view = View::Nearby;
        if self.nearby.data.is_loading() {
            self.notify(Notice::warn("Search already in progress"));
            return;
        }

        self.nearby.set_loading();
        self.notify(Notice::info("Finding your location..."));

        let finder = self.finder.clone();
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            // Receiver lives as long as the app; a closed channel means we're exiting.
            let _ = tx.send(finder.search().await);
        });
    }

    /// Apply a finished search, if any.
    fn poll_search(&mut self) {
        while let Ok(outcome) = self.results_rx.try_recv() {
            self.apply_search(outcome);
        }
    }

    fn apply_search(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Found { center, cafes } => {
                let message = match cafes.len() {
                    1 => format!("Found 1 cafe near {}", center),
                    n => format!("Found {} cafes near {}", n, center),
                };
                self.nearby.set_loaded(cafes);
                self.notify(Notice::info(message));
            }
            SearchOutcome::FetchFailed { center, error } => {
                self.nearby.set_loaded(Vec::new());
                self.notify(Notice::error(format!(
                    "Could not load cafes near {}: {}",
                    center, error
                )));
            }
            SearchOutcome::LocationFailed(err) => {
                let message = err.to_string();
                self.nearby.set_error(message.clone());
                self.notify(Notice::error(message));
            }
        }
    }

    /// Save the selected cafe to favorites.
    pub fn save_selected(&mut self) {
        let Some(cafe) = self.current_list().selected_item().cloned() else {
            self.notify(Notice::warn("Select a cafe to save"));
            return;
        };

        match self.store.save(&cafe) {
            Ok(outcome) => {
                self.notify(Notice::info(outcome.message()));
                if self.saved.data.data().is_some() {
                    self.reload_saved();
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.notify(Notice::error(format!("Could not save cafe: {}", e)));
            }
        }
    }

    /// Show the saved cafes view, reading from storage.
    pub fn show_saved(&mut self) {
        self.view = View::Saved;
        self.reload_saved();
    }

    fn reload_saved(&mut self) {
        match self.store.load() {
            Ok(cafes) => self.saved.set_loaded(cafes),
            Err(e) => {
                tracing::warn!(error = %e, path = %self.store.path().display(), "loading saved cafes failed");
                self.saved.set_error(e.to_string());
                self.notify(Notice::error(format!("Could not read saved cafes: {}", e)));
            }
        }
    }

    /// Open the selected cafe's map link in the default browser.
    fn open_selected(&mut self) {
        let Some(url) = self.current_list().selected_item().map(Cafe::map_url) else {
            self.notify(Notice::warn("Select a cafe to open"));
            return;
        };

        match open_url(&url) {
            Ok(()) => self.notify(Notice::info(format!("Opened {}", url))),
            Err(e) => {
                tracing::warn!(error = %e, %url, "opening map link failed");
                self.notify(Notice::error(format!("Could not open {}: {}", url, e)));
            }
        }
    }
}

/// Hand `url` to the platform opener without waiting for it.
fn open_url(url: &str) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
