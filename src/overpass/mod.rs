// Overpass API module.
// Client, query builder, and types for OpenStreetMap cafe lookups.

pub mod client;
pub mod query;
pub mod types;

pub use client::{OVERPASS_API_URL, OverpassClient};
pub use query::DEFAULT_RADIUS_METERS;
pub use types::Cafe;
