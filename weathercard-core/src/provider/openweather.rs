use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    model::{WeatherReport, WeatherRequest},
    provider::{ProviderError, truncate_body},
};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the provider at a different host. Mock-server tests use this.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReport> {
        let url = format!("{}/weather", self.base_url);

        debug!(%city, "requesting current conditions from OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(ProviderError {
                provider: "openweather",
                status,
                body: truncate_body(&body),
            }
            .into());
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        Ok(report_from_current(parsed))
    }
}

/// Map the wire shape onto the card's report.
///
/// OpenWeather metric responses carry wind in m/s and visibility in metres;
/// the card displays km/h and km. An empty `weather` array maps to an absent
/// description, which the renderer treats as "classify nothing".
fn report_from_current(parsed: OwCurrentResponse) -> WeatherReport {
    let observation_time = DateTime::from_timestamp(parsed.dt, 0).unwrap_or_else(Utc::now);

    let description = parsed.weather.into_iter().next().map(|w| w.description);

    WeatherReport {
        provider: "openweather".to_string(),
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        description,
        humidity_pct: parsed.main.humidity,
        wind_speed_kmh: parsed.wind.speed * 3.6,
        visibility_km: parsed.visibility.map(|metres| metres / 1000.0),
        observation_time,
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    visibility: Option<f64>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        self.fetch_current(&request.city).await
    }
}
