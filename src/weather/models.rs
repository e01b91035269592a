use chrono::NaiveDate;
use serde::Deserialize;

use super::codes::describe;
use crate::error::WeatherError;

/// Number of days requested from the daily forecast endpoint
pub const FORECAST_DAYS: usize = 7;

// ============================================================================
// Geocoding API Response
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Missing for places outside any country (seas, disputed areas)
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub timezone: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    /// Omitted entirely by the API when nothing matches
    pub results: Option<Vec<Location>>,
}

// ============================================================================
// Forecast API Responses (Internal)
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub current: CurrentData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentData {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    pub weather_code: i64,
    pub is_day: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DailyResponse {
    pub daily: DailyData,
}

/// Parallel arrays, one element per forecast day
#[derive(Debug, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub weather_code: Vec<i64>,
}

// ============================================================================
// Display-ready values
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    /// Celsius
    pub temperature: i32,
    pub feels_like: i32,
    /// Percent
    pub humidity: i32,
    /// km/h
    pub wind_speed: i32,
    pub condition_text: String,
    pub is_daytime: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub max_temp: i32,
    pub min_temp: i32,
    pub precipitation_chance: i32,
    pub condition_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyForecast {
    pub city: String,
    pub country: String,
    pub days: Vec<DailyForecastEntry>,
}

/// Nearest whole unit, halves away from zero
pub(crate) fn round_to_int(value: f64) -> i32 {
    value.round() as i32
}

impl CurrentConditions {
    pub(crate) fn from_upstream(location: Location, data: CurrentData) -> Self {
        Self {
            city: location.name,
            country: location.country,
            temperature: round_to_int(data.temperature_2m),
            feels_like: round_to_int(data.apparent_temperature),
            humidity: round_to_int(data.relative_humidity_2m),
            wind_speed: round_to_int(data.wind_speed_10m),
            condition_text: describe(data.weather_code).to_string(),
            is_daytime: data.is_day == 1,
        }
    }
}

impl WeeklyForecast {
    pub(crate) fn from_upstream(
        location: Location,
        daily: DailyData,
    ) -> Result<Self, WeatherError> {
        let days = daily.time.len();
        let lengths = [
            daily.temperature_2m_max.len(),
            daily.temperature_2m_min.len(),
            daily.precipitation_probability_max.len(),
            daily.weather_code.len(),
        ];
        if days != FORECAST_DAYS || lengths.iter().any(|&len| len != days) {
            return Err(WeatherError::MalformedUpstreamResponse(format!(
                "expected {FORECAST_DAYS} aligned daily values, got time={days} max={} min={} precipitation={} code={}",
                lengths[0], lengths[1], lengths[2], lengths[3]
            )));
        }

        let entries = daily
            .time
            .iter()
            .zip(&daily.temperature_2m_max)
            .zip(&daily.temperature_2m_min)
            .zip(&daily.precipitation_probability_max)
            .zip(&daily.weather_code)
            .map(|((((date, max), min), precipitation), code)| {
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                    WeatherError::MalformedUpstreamResponse(format!("invalid date '{date}'"))
                })?;
                Ok(DailyForecastEntry {
                    date,
                    max_temp: round_to_int(*max),
                    min_temp: round_to_int(*min),
                    precipitation_chance: precipitation.map(round_to_int).unwrap_or(0),
                    condition_text: describe(*code).to_string(),
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        if entries.windows(2).any(|pair| pair[0].date > pair[1].date) {
            return Err(WeatherError::MalformedUpstreamResponse(
                "daily dates are not in chronological order".to_string(),
            ));
        }

        Ok(Self {
            city: location.name,
            country: location.country,
            days: entries,
        })
    }
}
