mod codes;
mod geocoding;
pub mod models;
mod service;

pub use codes::{describe, UNKNOWN_CONDITION, WMO_CODES};
pub use geocoding::{GeocodingClient, GEOCODING_API_URL};
pub use models::{CurrentConditions, DailyForecastEntry, Location, WeeklyForecast};
pub use service::{WeatherService, FORECAST_API_URL};
