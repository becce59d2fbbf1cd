// Nearby search flow.
// Locate, then fetch; failures fold into an outcome instead of propagating.

use crate::location::{Coordinates, LocationError, Locator};
use crate::overpass::{Cafe, OverpassClient};

/// What a search produced.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Cafes near `center` (possibly none).
    Found { center: Coordinates, cafes: Vec<Cafe> },
    /// Location could not be determined; nothing was fetched.
    LocationFailed(LocationError),
    /// The fetch failed; treat as an empty result.
    FetchFailed { center: Coordinates, error: String },
}

impl SearchOutcome {
    /// Cafes to display. A failed fetch shows as an empty list.
    pub fn cafes(&self) -> Option<&[Cafe]> {
        match self {
            SearchOutcome::Found { cafes, .. } => Some(cafes.as_slice()),
            SearchOutcome::FetchFailed { .. } => Some(&[]),
            SearchOutcome::LocationFailed(_) => None,
        }
    }
}

/// Location source plus map client.
#[derive(Debug, Clone)]
pub struct Finder {
    locator: Locator,
    client: OverpassClient,
}

impl Finder {
    pub fn new(locator: Locator, client: OverpassClient) -> Self {
        Self { locator, client }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn radius(&self) -> u32 {
        self.client.radius()
    }

    /// Run one search. Single attempt per step.
    pub async fn search(&self) -> SearchOutcome {
        let center = match self.locator.locate().await {
            Ok(center) => center,
            Err(err) => {
                tracing::warn!(error = %err, "location failed");
                return SearchOutcome::LocationFailed(err);
            }
        };

        tracing::info!(%center, radius = self.client.radius(), "searching for cafes");
        match self.client.fetch_cafes(center).await {
            Ok(cafes) => {
                tracing::info!(count = cafes.len(), "search finished");
                SearchOutcome::Found { center, cafes }
            }
            Err(err) => {
                tracing::warn!(error = %err, "cafe fetch failed");
                SearchOutcome::FetchFailed {
                    center,
                    error: err.to_string(),
                }
            }
        }
    }
}
