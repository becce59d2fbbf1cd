// Error types for cuppa.
// Covers location lookup, Overpass API, favorites storage, and general failures.

use thiserror::Error;

use crate::location::LocationError;

#[derive(Error, Debug)]
pub enum CuppaError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Map data API returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("{0}")]
    Location(#[from] LocationError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No data directory available; pass --favorites")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, CuppaError>;
