use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single lookup: one city name, as typed by the user.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

/// Current conditions for one location, as rendered by the card.
///
/// `description` is absent when the upstream response carried no weather
/// entry; the renderer falls back to the default classification in that case
/// instead of classifying a fabricated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub provider: String,
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub description: Option<String>,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    pub visibility_km: Option<f64>,
    pub observation_time: DateTime<Utc>,
}
