//! Text reports returned by the tools.
//!
//! All transports render through these functions.

use chrono::{Datelike, NaiveDate};

use super::compare::CityComparison;
use crate::error::WeatherError;
use crate::weather::{CurrentConditions, WeeklyForecast};

const WEEKDAYS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];
const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Short Spanish date label, e.g. "lun, 19 oct"
pub fn day_label(date: NaiveDate) -> String {
    format!(
        "{}, {} {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS[date.month0() as usize]
    )
}

/// Current conditions report for one city
pub fn current_weather(weather: &CurrentConditions) -> String {
    let icon = if weather.is_daytime { "☀️" } else { "🌙" };
    format!(
        "{icon} Clima actual en {}, {}\n\
         \n\
         🌡️  Temperatura: {}°C (sensación: {}°C)\n\
         🌤️  Condición: {}\n\
         💧 Humedad: {}%\n\
         💨 Viento: {} km/h",
        weather.city,
        weather.country,
        weather.temperature,
        weather.feels_like,
        weather.condition_text,
        weather.humidity,
        weather.wind_speed,
    )
}

/// Seven-day table, one row per day
pub fn weekly_forecast(forecast: &WeeklyForecast) -> String {
    let rows = forecast
        .days
        .iter()
        .map(|day| {
            format!(
                "  {:<15} {:>3}°C / {:>3}°C   💧{}%   {}",
                day_label(day.date),
                day.max_temp,
                day.min_temp,
                day.precipitation_chance,
                day.condition_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "📅 Pronóstico 7 días — {}, {}\n\
         \n\
         \x20 Día              Máx   Mín   Lluvia  Condición\n\
         \x20 ─────────────────────────────────────────────────\n\
         {rows}",
        forecast.city, forecast.country
    )
}

fn comparison_block(weather: &CurrentConditions) -> String {
    format!(
        "📍 {}, {}\n\
         \x20  🌡️  {}°C (sensación {}°C)\n\
         \x20  🌤️  {}\n\
         \x20  💧 Humedad: {}% | 💨 Viento: {} km/h",
        weather.city,
        weather.country,
        weather.temperature,
        weather.feels_like,
        weather.condition_text,
        weather.humidity,
        weather.wind_speed,
    )
}

/// One-line verdict of a comparison
pub fn comparison_summary(comparison: &CityComparison) -> String {
    match comparison.ranked() {
        Some((warmer, colder)) => format!(
            "📊 Resumen: {} está {}°C más cálida que {}.",
            warmer.city, comparison.difference, colder.city
        ),
        None => format!(
            "📊 Resumen: {} y {} tienen la misma temperatura ({}°C).",
            comparison.first.city, comparison.second.city, comparison.first.temperature
        ),
    }
}

/// Both cities side by side, followed by the summary line
pub fn city_comparison(comparison: &CityComparison) -> String {
    format!(
        "🆚 Comparación de clima\n\n{}\n\n{}\n\n{}",
        comparison_block(&comparison.first),
        comparison_block(&comparison.second),
        comparison_summary(comparison)
    )
}

/// Text shown to the caller when a tool fails
pub fn error(err: &WeatherError) -> String {
    format!("❌ Error: {err}")
}
