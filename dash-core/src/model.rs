use chrono::{DateTime, Local};

/// One normalized observation for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    /// City name as requested (trimmed), not the name the API echoes back.
    pub city: String,
    /// Local wall clock at fetch completion.
    pub observed_at: DateTime<Local>,
    /// `HH:MM:SS` of `observed_at`.
    pub time: String,
    /// `YYYY-MM-DD` of `observed_at`.
    pub date: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub description: String,
}

/// Measurements of a record, everything except identity and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub description: String,
}

impl WeatherRecord {
    /// Builds a record stamped with a single instant; `time` and `date` are
    /// both formatted from `observed_at`.
    pub fn new(city: impl Into<String>, observed_at: DateTime<Local>, obs: Observation) -> Self {
        Self {
            city: city.into(),
            time: observed_at.format("%H:%M:%S").to_string(),
            date: observed_at.format("%Y-%m-%d").to_string(),
            observed_at,
            temperature_c: obs.temperature_c,
            feels_like_c: obs.feels_like_c,
            humidity_pct: obs.humidity_pct,
            pressure_hpa: obs.pressure_hpa,
            wind_speed_mps: obs.wind_speed_mps,
            description: obs.description,
        }
    }

    /// Stamps the record with the current local time.
    pub fn observed_now(city: impl Into<String>, obs: Observation) -> Self {
        Self::new(city, Local::now(), obs)
    }
}
