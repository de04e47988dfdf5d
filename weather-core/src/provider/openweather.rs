use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::{
    config::Settings,
    error::FetchError,
    location::normalize_location,
    model::{WeatherReport, WeatherResult},
    provider::{fahrenheit_to_celsius, round1, title_case},
};

use super::WeatherProvider;

/// Current weather from OpenWeatherMap, in imperial units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    settings: Settings,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(settings: Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self { settings, http })
    }

    /// One GET against the current-weather endpoint. No retries.
    async fn fetch_current(&self, query: &str) -> Result<WeatherReport, FetchError> {
        let started = Instant::now();

        let res = self
            .http
            .get(self.settings.base_url.as_str())
            .query(&[
                ("q", query),
                ("appid", self.settings.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        let elapsed = started.elapsed();

        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(FetchError::NotFound),
            status => {
                return Err(FetchError::UnexpectedStatus {
                    status,
                    body: truncate_body(&body),
                });
            }
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        let condition = parsed.weather.into_iter().next().ok_or(FetchError::MissingConditions)?;

        Ok(WeatherReport {
            city: parsed.name,
            country: parsed.sys.country,
            temp_f: round1(parsed.main.temp),
            temp_c: fahrenheit_to_celsius(parsed.main.temp),
            feels_like_f: round1(parsed.main.feels_like),
            feels_like_c: fahrenheit_to_celsius(parsed.main.feels_like),
            humidity: parsed.main.humidity,
            description: title_case(&condition.description),
            icon: condition.icon,
            wind_speed: round1(parsed.wind.speed),
            pressure: parsed.main.pressure,
            response_time_ms: (elapsed.as_secs_f64() * 1000.0).round() as u64,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn get_weather(&self, location: &str) -> WeatherResult {
        let query = normalize_location(location);
        debug!(%location, %query, "normalized location");

        match self.fetch_current(&query).await {
            Ok(report) => {
                info!(
                    %query,
                    city = %report.city,
                    response_time_ms = report.response_time_ms,
                    "fetched current weather"
                );
                report.into()
            }
            Err(err) => {
                warn!(%query, timeout = err.is_timeout(), error = ?err, "weather lookup failed");
                err.into_failure(location).into()
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
