use reqwest::Client;

use super::models::{GeocodingResponse, Location};
use crate::error::WeatherError;

pub const GEOCODING_API_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Language for place names returned by the geocoder
const GEOCODING_LANGUAGE: &str = "es";

/// Resolves free-text city names through the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    url: String,
}

impl GeocodingClient {
    pub fn new(client: Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Look up a city and return the first match
    pub async fn resolve_city(&self, name: &str) -> Result<Location, WeatherError> {
        tracing::debug!(city = %name, "Geocoding city");

        // Query builder handles URL encoding of spaces and accents
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", GEOCODING_LANGUAGE),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received geocoding response");

        if !status.is_success() {
            return Err(WeatherError::UpstreamUnavailable {
                context: "Error al buscar la ciudad",
                status,
            });
        }

        let data: GeocodingResponse = response.json().await?;

        let location = data
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::CityNotFound(name.to_string()))?;

        tracing::debug!(
            city = %location.name,
            lat = %location.latitude,
            lon = %location.longitude,
            "City resolved"
        );

        Ok(location)
    }
}
