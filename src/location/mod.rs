// Location acquisition.
// Resolves the user's coordinates from fixed flags or an IP lookup.

pub mod ip;

use std::fmt;

use thiserror::Error;

pub use ip::IpLocator;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Why a location could not be determined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location access denied. Pass --lat/--lon or enable IP lookup and try again.")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    PositionUnavailable(String),

    #[error("Timed out while determining location")]
    Timeout,

    #[error("Unknown location error: {0}")]
    Unknown(String),
}

/// Where coordinates come from.
#[derive(Debug, Clone)]
pub enum Locator {
    /// Coordinates supplied up front by the user.
    Fixed(Coordinates),
    /// Look the position up from the machine's public IP.
    Ip(IpLocator),
    /// No source allowed.
    Denied,
}

impl Locator {
    /// Determine the current position. Never retries.
    pub async fn locate(&self) -> Result<Coordinates, LocationError> {
        match self {
            Locator::Fixed(coords) => Ok(*coords),
            Locator::Ip(locator) => locator.locate().await,
            Locator::Denied => Err(LocationError::PermissionDenied),
        }
    }

    /// Short description for the status bar.
    pub fn describe(&self) -> String {
        match self {
            Locator::Fixed(coords) => format!("fixed @ {}", coords),
            Locator::Ip(_) => "IP lookup".to_string(),
            Locator::Denied => "no location source".to_string(),
        }
    }
}
