//! Core library for the `weather-dash` terminal dashboard.
//!
//! This crate defines:
//! - The fetch pipeline: validation, bounded retry, typed failures
//! - Per-city history buffers and temperature deltas
//! - Derived display hints (temperature bands, condition icons)
//! - The static region/city catalog
//! - Configuration loading
//!
//! Rendering is left to the caller; everything here returns plain data.

pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod history;
pub mod metrics;
pub mod model;
pub mod provider;
pub mod refresh;
pub mod retry;

pub use comparison::CityComparison;
pub use config::DashboardConfig;
pub use error::{ErrorKind, FetchError};
pub use history::{HISTORY_CAPACITY, HistoryTracker};
pub use metrics::{
    TempBand, TempColor, WeatherIcon, temperature_color, temperature_emoji, weather_icon,
};
pub use model::{Observation, WeatherRecord};
pub use provider::{OpenWeatherProvider, WeatherProvider, fetch_weather, validate_api_key};
pub use refresh::{RefreshReport, refresh};
pub use retry::RetryPolicy;
