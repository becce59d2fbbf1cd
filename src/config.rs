// Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::error::{CuppaError, Result};
use crate::finder::Finder;
use crate::location::{Coordinates, IpLocator, LocationError, Locator, ip::IP_LOOKUP_URL};
use crate::overpass::{DEFAULT_RADIUS_METERS, OVERPASS_API_URL, OverpassClient};
use crate::store::{FavoritesStore, paths};

#[derive(Parser, Debug)]
#[command(
    name = "cuppa",
    version,
    about = "Find cafes near you and keep a list of favorites",
    allow_negative_numbers = true
)]
pub struct Config {
    /// Latitude to search around (skips IP lookup).
    #[arg(long, env = "CUPPA_LAT", requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude to search around (skips IP lookup).
    #[arg(long, env = "CUPPA_LON", requires = "lat")]
    pub lon: Option<f64>,

    /// Search radius in metres.
    #[arg(long, env = "CUPPA_RADIUS", default_value_t = DEFAULT_RADIUS_METERS)]
    pub radius: u32,

    /// Overpass interpreter endpoint.
    #[arg(long, env = "CUPPA_OVERPASS_URL", default_value = OVERPASS_API_URL)]
    pub overpass_url: String,

    /// IP geolocation endpoint.
    #[arg(long, env = "CUPPA_IP_LOOKUP_URL", default_value = IP_LOOKUP_URL)]
    pub ip_lookup_url: String,

    /// Never look up the location from the public IP.
    #[arg(long, env = "CUPPA_NO_IP_LOOKUP")]
    pub no_ip_lookup: bool,

    /// Request timeout in seconds.
    #[arg(long, env = "CUPPA_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Saved cafes file.
    #[arg(long, env = "CUPPA_FAVORITES")]
    pub favorites: Option<PathBuf>,

    /// Log file.
    #[arg(long, env = "CUPPA_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print cafes near the current location and exit.
    Nearby,
    /// Print saved cafes and exit.
    Saved,
}

impl Config {
    fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Pick the location source from flags.
    pub fn locator(&self) -> Result<Locator> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            return Coordinates::new(lat, lon).map(Locator::Fixed).ok_or_else(|| {
                LocationError::PositionUnavailable(format!("out of range: {lat}, {lon}")).into()
            });
        }
        if self.no_ip_lookup {
            return Ok(Locator::Denied);
        }
        let locator = IpLocator::new(self.ip_lookup_url.as_str(), self.timeout_duration())?;
        Ok(Locator::Ip(locator))
    }

    pub fn finder(&self) -> Result<Finder> {
        let client = OverpassClient::new(
            self.overpass_url.as_str(),
            self.radius,
            self.timeout_duration(),
        )?;
        Ok(Finder::new(self.locator()?, client))
    }

    pub fn favorites_store(&self) -> Result<FavoritesStore> {
        self.favorites
            .clone()
            .or_else(paths::favorites_path)
            .map(FavoritesStore::new)
            .ok_or(CuppaError::NoDataDir)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(paths::log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("cuppa").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["--no-ip-lookup"]);
        assert_eq!(config.radius, 2000);
        assert_eq!(config.overpass_url, OVERPASS_API_URL);
        assert!(config.command.is_none());
        assert!(matches!(config.locator().unwrap(), Locator::Denied));
    }

    #[test]
    fn test_fixed_coordinates() {
        let config = parse(&["--lat", "47.6062", "--lon", "-122.3321", "saved"]);
        assert_eq!(config.command, Some(Command::Saved));
        match config.locator().unwrap() {
            Locator::Fixed(coords) => assert_eq!(coords.longitude, -122.3321),
            other => panic!("unexpected locator: {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let config = parse(&["--lat", "123", "--lon", "0"]);
        assert!(matches!(
            config.locator(),
            Err(CuppaError::Location(LocationError::PositionUnavailable(_)))
        ));
    }

    #[test]
    fn test_lat_requires_lon() {
        assert!(Config::try_parse_from(["cuppa", "--lat", "1.0"]).is_err());
    }

    #[test]
    fn test_favorites_override() {
        let config = parse(&["--favorites", "/tmp/cuppa-test.json"]);
        let store = config.favorites_store().unwrap();
        assert_eq!(store.path(), std::path::Path::new("/tmp/cuppa-test.json"));
    }
}
