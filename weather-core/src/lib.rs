//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Location normalization for the provider's query parameter
//! - The OpenWeatherMap client behind the [`WeatherProvider`] trait
//! - The uniform [`WeatherResult`] handed to the web layer
//! - Configuration & credentials handling
//!
//! It is used by `weather-web`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod location;
pub mod model;
pub mod provider;

pub use config::{Config, Settings};
pub use error::FetchError;
pub use location::normalize_location;
pub use model::{WeatherFailure, WeatherReport, WeatherResult};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
