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

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
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

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        let url = format!("{}/current.json", self.base_url);

        debug!(city = %request.city, "requesting current conditions from WeatherAPI");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", request.city.as_str())])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (current)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI current response body")?;

        if !status.is_success() {
            return Err(ProviderError {
                provider: "weatherapi",
                status,
                body: truncate_body(&body),
            }
            .into());
        }

        let parsed: WaResponse =
            serde_json::from_str(&body).context("Failed to parse WeatherAPI current JSON")?;

        Ok(report_from_current(parsed))
    }
}

/// Map the wire shape onto the card's report.
///
/// WeatherAPI already reports km/h and km, so no unit conversion happens
/// here. Observation time falls back from the station's last update to the
/// location's local time.
fn report_from_current(parsed: WaResponse) -> WeatherReport {
    let ts = parsed.current.last_updated_epoch.or(parsed.location.localtime_epoch);
    let observation_time =
        ts.and_then(|t| DateTime::from_timestamp(t, 0)).unwrap_or_else(Utc::now);

    let location_name = format!("{}, {}", parsed.location.name, parsed.location.country);

    WeatherReport {
        provider: "weatherapi".to_string(),
        location_name,
        temperature_c: parsed.current.temp_c,
        feels_like_c: parsed.current.feelslike_c,
        description: Some(parsed.current.condition.text),
        humidity_pct: parsed.current.humidity,
        wind_speed_kmh: parsed.current.wind_kph,
        visibility_km: parsed.current.vis_km,
        observation_time,
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    localtime_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_kph: f64,
    vis_km: Option<f64>,
    condition: WaCondition,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, request: &WeatherRequest) -> Result<WeatherReport> {
        self.fetch_current(request).await
    }
}
