use reqwest::Client;

use super::geocoding::GeocodingClient;
use super::models::*;
use crate::error::WeatherError;

pub const FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code,is_day";
const DAILY_FIELDS: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_probability_max,weather_code";

/// Current conditions and 7-day forecasts for a city name
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Client,
    geocoding: GeocodingClient,
    forecast_url: String,
}

impl WeatherService {
    pub fn new(client: Client, geocoding_url: &str, forecast_url: &str) -> Self {
        Self {
            geocoding: GeocodingClient::new(client.clone(), geocoding_url),
            client,
            forecast_url: forecast_url.to_string(),
        }
    }

    pub async fn current_conditions(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let location = self.geocoding.resolve_city(city).await?;

        tracing::debug!(
            city = %location.name,
            lat = %location.latitude,
            lon = %location.longitude,
            "Fetching current conditions"
        );

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", location.latitude),
                ("longitude", location.longitude),
            ])
            .query(&[("current", CURRENT_FIELDS), ("timezone", "auto")])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received forecast response");

        if !status.is_success() {
            return Err(WeatherError::UpstreamUnavailable {
                context: "Error al consultar el clima",
                status,
            });
        }

        let data: CurrentResponse = response.json().await?;
        let conditions = CurrentConditions::from_upstream(location, data.current);

        tracing::info!(
            city = %conditions.city,
            temp = conditions.temperature,
            "Current conditions fetched successfully"
        );

        Ok(conditions)
    }

    pub async fn weekly_forecast(&self, city: &str) -> Result<WeeklyForecast, WeatherError> {
        let location = self.geocoding.resolve_city(city).await?;

        tracing::debug!(
            city = %location.name,
            lat = %location.latitude,
            lon = %location.longitude,
            "Fetching weekly forecast"
        );

        let forecast_days = FORECAST_DAYS.to_string();
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", location.latitude),
                ("longitude", location.longitude),
            ])
            .query(&[
                ("daily", DAILY_FIELDS),
                ("timezone", "auto"),
                ("forecast_days", forecast_days.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Received forecast response");

        if !status.is_success() {
            return Err(WeatherError::UpstreamUnavailable {
                context: "Error al consultar el pronóstico",
                status,
            });
        }

        let data: DailyResponse = response.json().await?;
        let forecast = WeeklyForecast::from_upstream(location, data.daily)?;

        tracing::info!(
            city = %forecast.city,
            days = forecast.days.len(),
            "Weekly forecast fetched successfully"
        );

        Ok(forecast)
    }
}
