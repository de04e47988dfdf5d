use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, Text};
use tracing::warn;
use weather_core::{
    Config, OpenWeatherProvider, Settings, WeatherProvider, WeatherResult,
    config::{API_KEY_ENV, DEFAULT_BASE_URL},
};

use crate::server::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the web dashboard.
    Serve {
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
    },

    /// Look up current weather once and print it.
    Show {
        /// City name (e.g. "Portland, OR") or US zip code.
        location: String,

        /// Print the same JSON the web endpoint returns.
        #[arg(long)]
        json: bool,
    },

    /// Store the OpenWeatherMap API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { addr } => {
                let provider = build_provider()?;
                server::serve(addr, AppState::new(Arc::new(provider))).await
            }
            Command::Show { location, json } => {
                if location.trim().is_empty() {
                    anyhow::bail!("Please enter a location.");
                }

                let provider = build_provider()?;
                let result = provider.get_weather(location.trim()).await;

                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print!("{}", render(&result));
                }

                Ok(())
            }
            Command::Configure => configure(),
        }
    }
}

fn build_provider() -> anyhow::Result<OpenWeatherProvider> {
    let settings: Settings = Config::load()?.resolve();

    if settings.using_placeholder_key() {
        warn!(
            "No API key configured; set {API_KEY_ENV} or run `weather configure`. \
             Lookups will fail until a key is provided."
        );
    }

    OpenWeatherProvider::new(settings)
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let current_url = cfg.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = Text::new("Current weather endpoint:")
        .with_default(&current_url)
        .prompt()
        .context("Failed to read endpoint URL")?;

    cfg.api_key = Some(api_key.trim().to_string());
    cfg.base_url = (base_url != DEFAULT_BASE_URL).then_some(base_url);
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Human-readable rendering for the terminal.
fn render(result: &WeatherResult) -> String {
    match result {
        WeatherResult::Success(r) => {
            let place = if r.country.is_empty() {
                r.city.clone()
            } else {
                format!("{}, {}", r.city, r.country)
            };

            format!(
                "{place}: {}\n\
                 Temperature: {}°F ({}°C), feels like {}°F ({}°C)\n\
                 Humidity: {}%  Pressure: {} hPa  Wind: {} mph\n\
                 Response time: {} ms\n",
                r.description,
                r.temp_f,
                r.temp_c,
                r.feels_like_f,
                r.feels_like_c,
                r.humidity,
                r.pressure,
                r.wind_speed,
                r.response_time_ms,
            )
        }
        WeatherResult::Failure(f) => match &f.suggestion {
            Some(suggestion) => format!("{}\n{suggestion}\n", f.error),
            None => format!("{}\n", f.error),
        },
    }
}
