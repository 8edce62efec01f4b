use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{ErrorKind, FetchError},
    model::{Observation, WeatherRecord},
    provider::{MIN_API_KEY_LEN, validate_api_key},
    retry::RetryPolicy,
};

use super::WeatherProvider;

/// Per-request timeout applied to every attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
            http: Client::new(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    async fn attempt(&self, city: &str, attempt: u32) -> Result<WeatherRecord, FetchError> {
        tracing::debug!(city, attempt, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| FetchError::transport(city, &e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::transport(city, &e))?;

        if !status.is_success() {
            return Err(FetchError::new(
                ErrorKind::from_status(status),
                city,
                format!("status {}: {}", status, truncate_body(&body)),
            ));
        }

        parse_current(city, &body)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch(&self, city: &str) -> Result<WeatherRecord, FetchError> {
        let city = city.trim();

        if !validate_api_key(Some(&self.api_key)) {
            return Err(FetchError::new(
                ErrorKind::InvalidCredential,
                city,
                format!("API key must be at least {MIN_API_KEY_LEN} characters"),
            ));
        }

        self.retry
            .run(|attempt| self.attempt(city, attempt))
            .await
    }
}

/// One-shot fetch against `base_url` with the default timeout and retry policy.
pub async fn fetch_weather(
    city: &str,
    api_key: &str,
    base_url: &str,
) -> Result<WeatherRecord, FetchError> {
    OpenWeatherProvider::new(api_key, base_url).fetch(city).await
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
}

#[derive(Debug, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: Option<OwWind>,
}

/// Normalizes a 2xx body into a record for `city`.
fn parse_current(city: &str, body: &str) -> Result<WeatherRecord, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        FetchError::new(
            ErrorKind::ParseError,
            city,
            format!("response is not valid JSON: {e}"),
        )
    })?;

    if value.get("main").is_none() || value.get("weather").is_none() {
        return Err(FetchError::new(
            ErrorKind::MalformedResponse,
            city,
            "response is missing `main` or `weather`",
        ));
    }

    let parsed: OwCurrentResponse = serde_json::from_value(value)
        .map_err(|e| FetchError::new(ErrorKind::ParseError, city, e.to_string()))?;

    let condition = parsed.weather.first().ok_or_else(|| {
        FetchError::new(ErrorKind::ParseError, city, "`weather` list is empty")
    })?;

    if parsed.main.humidity > 100 {
        return Err(FetchError::new(
            ErrorKind::ParseError,
            city,
            format!("humidity {} is out of range", parsed.main.humidity),
        ));
    }

    let obs = Observation {
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        wind_speed_mps: parsed.wind.map(|w| w.speed).unwrap_or(0.0),
        description: title_case(&condition.description),
    };

    Ok(WeatherRecord::observed_now(city, obs))
}

/// Uppercases the first letter of every word and lowercases the rest.
/// A word starts after any non-alphabetic character.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
