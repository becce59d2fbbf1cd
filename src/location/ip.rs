// IP-based geolocation.
// Asks a public lookup service where the machine's public address is.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::{Coordinates, LocationError};

pub const IP_LOOKUP_URL: &str = "http://ip-api.com/json/";

/// Lookup response body. Only the fields we ask for are present.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Client for the IP lookup service.
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: Client,
    url: String,
}

impl IpLocator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("cuppa/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub async fn locate(&self) -> Result<Coordinates, LocationError> {
        tracing::debug!(url = %self.url, "looking up location by IP");

        let response = self
            .client
            .get(&self.url)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(classify)?;

        if !response.status().is_success() {
            return Err(LocationError::PositionUnavailable(format!(
                "lookup returned HTTP {}",
                response.status()
            )));
        }

        let body: LookupResponse = response.json().await.map_err(classify)?;
        parse_lookup(body)
    }
}

/// Map a transport error onto a location failure kind.
fn classify(err: reqwest::Error) -> LocationError {
    if err.is_timeout() {
        LocationError::Timeout
    } else if err.is_connect() {
        LocationError::PositionUnavailable(err.to_string())
    } else {
        LocationError::Unknown(err.to_string())
    }
}

fn parse_lookup(body: LookupResponse) -> Result<Coordinates, LocationError> {
    if body.status != "success" {
        let reason = body.message.unwrap_or_else(|| body.status.clone());
        return Err(LocationError::PositionUnavailable(reason));
    }

    match (body.lat, body.lon) {
        (Some(lat), Some(lon)) => Coordinates::new(lat, lon).ok_or_else(|| {
            LocationError::PositionUnavailable(format!("out of range: {lat}, {lon}"))
        }),
        _ => Err(LocationError::PositionUnavailable(
            "lookup returned no coordinates".to_string(),
        )),
    }
}
