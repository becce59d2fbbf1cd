// Overpass API HTTP client.
// Issues a single query request and converts the response into cafes.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{CuppaError, Result};
use crate::location::Coordinates;

use super::query;
use super::types::{Cafe, OverpassResponse};

pub const OVERPASS_API_URL: &str = "https://overpass-api.de/api/interpreter";

/// Overpass interpreter client.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    endpoint: String,
    radius: u32,
}

impl OverpassClient {
    /// Create a client for the given interpreter endpoint.
    pub fn new(endpoint: impl Into<String>, radius: u32, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("cuppa/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            radius,
        })
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Fetch cafes around `center`. No retry on failure.
    pub async fn fetch_cafes(&self, center: Coordinates) -> Result<Vec<Cafe>> {
        let data = query::cafes_around(center, self.radius);
        tracing::debug!(endpoint = %self.endpoint, query = %data, "querying overpass");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("data", data.as_str())])
            .send()
            .await?;

        let response = check_response(response)?;
        let body = response.text().await?;
        parse_elements(&body)
    }
}

/// Reject non-success statuses.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CuppaError::Status { status })
    }
}

/// Parse an interpreter response body into its element list.
pub fn parse_elements(body: &str) -> Result<Vec<Cafe>> {
    let response: OverpassResponse = serde_json::from_str(body)?;
    Ok(response.elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_elements() {
        let body = r#"{
            "version": 0.6,
            "generator": "Overpass API",
            "elements": [
                {"type":"node","id":101,"lat":48.85,"lon":2.35,"tags":{"amenity":"cafe","name":"Café de Flore"}},
                {"type":"node","id":102,"lat":48.86,"lon":2.34}
            ]
        }"#;
        let cafes = parse_elements(body).unwrap();
        assert_eq!(cafes.len(), 2);
        assert_eq!(cafes[0].display_name(), "Café de Flore");
        assert_eq!(cafes[1].id, 102);
        assert!(cafes[1].tags.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(matches!(
            parse_elements("<html>rate limited</html>"),
            Err(CuppaError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_failure_is_error() {
        let client =
            OverpassClient::new("http://127.0.0.1:9/api/interpreter", 2000, Duration::from_secs(5))
                .unwrap();
        let center = Coordinates::new(0.0, 0.0).unwrap();
        assert!(matches!(
            client.fetch_cafes(center).await,
            Err(CuppaError::Http(_))
        ));
    }
}
