// cuppa: find cafes near you from the terminal.

mod app;
mod config;
mod error;
mod finder;
mod location;
mod logging;
mod overpass;
mod state;
mod store;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use crate::app::App;
use crate::config::{Command, Config};
use crate::finder::SearchOutcome;
use crate::ui::cards;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    if let Some(path) = config.log_path() {
        if let Err(e) = logging::init(&path) {
            eprintln!("cuppa: logging disabled: {}", e);
        }
    }

    match run(config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("cuppa: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> error::Result<ExitCode> {
    let store = config.favorites_store()?;

    match config.command {
        Some(Command::Saved) => {
            let saved = store.load()?;
            println!("{}", cards::render_text(&saved, cards::NO_SAVED_CAFES));
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Nearby) => {
            let finder = config.finder()?;
            let outcome = finder.search().await;
            let code = match &outcome {
                SearchOutcome::Found { .. } => ExitCode::SUCCESS,
                SearchOutcome::FetchFailed { error, .. } => {
                    eprintln!("cuppa: could not load cafes: {}", error);
                    ExitCode::FAILURE
                }
                SearchOutcome::LocationFailed(err) => {
                    eprintln!("cuppa: {}", err);
                    ExitCode::FAILURE
                }
            };
            if let Some(cafes) = outcome.cafes() {
                println!("{}", cards::render_text(cafes, cards::NO_NEARBY_CAFES));
            }
            Ok(code)
        }
        None => {
            let finder = config.finder()?;
            tracing::info!(locator = %finder.locator().describe(), favorites = %store.path().display(), "starting");

            let mut app = App::new(finder, store);
            let mut terminal = ratatui::init();
            let result = app.run(&mut terminal);
            ratatui::restore();
            result?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
