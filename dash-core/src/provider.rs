use crate::{error::FetchError, model::WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::{OpenWeatherProvider, fetch_weather};

/// Default OpenWeather "current weather" endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Shortest API key accepted before any request is attempted.
pub const MIN_API_KEY_LEN: usize = 10;

/// Something that turns a city name into a record or a classified failure.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<WeatherRecord, FetchError>;
}

/// A key is usable when present and at least [`MIN_API_KEY_LEN`] characters long.
pub fn validate_api_key(api_key: Option<&str>) -> bool {
    match api_key {
        Some(key) => key.chars().count() >= MIN_API_KEY_LEN,
        None => false,
    }
}
