//! Failure taxonomy for the fetch pipeline.
//!
//! Every failure is classified into an [`ErrorKind`] first; whether it is
//! worth another attempt is then a lookup on the kind alone.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCredential,
    Timeout,
    NotFound,
    Unauthorized,
    HttpError,
    NetworkError,
    MalformedResponse,
    ParseError,
}

impl ErrorKind {
    /// Retry decision table. Only timeouts are transient.
    pub fn is_retryable(self) -> bool {
        match self {
            ErrorKind::Timeout => true,
            ErrorKind::InvalidCredential
            | ErrorKind::NotFound
            | ErrorKind::Unauthorized
            | ErrorKind::HttpError
            | ErrorKind::NetworkError
            | ErrorKind::MalformedResponse
            | ErrorKind::ParseError => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidCredential => "invalid_credential",
            ErrorKind::Timeout => "timeout",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::HttpError => "http_error",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::ParseError => "parse_error",
        }
    }

    /// Kind for a non-success HTTP status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => ErrorKind::NotFound,
            StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
            _ => ErrorKind::HttpError,
        }
    }

    /// Kind for a transport-level error raised by the HTTP client.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ErrorKind::Timeout
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else if err.is_decode() {
            ErrorKind::ParseError
        } else {
            ErrorKind::NetworkError
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified fetch failure for one city.
#[derive(Debug, Clone, Error)]
#[error("{kind} for '{city}': {detail}")]
pub struct FetchError {
    pub kind: ErrorKind,
    pub city: String,
    pub detail: String,
}

impl FetchError {
    pub fn new(kind: ErrorKind, city: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind,
            city: city.into(),
            detail: detail.into(),
        }
    }

    pub fn transport(city: &str, err: &reqwest::Error) -> Self {
        Self::new(ErrorKind::from_transport(err), city, err.to_string())
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Message suitable for showing next to the dashboard.
    pub fn user_message(&self) -> String {
        match self.kind {
            ErrorKind::InvalidCredential => {
                "Missing or invalid API key. Run `weather-dash configure` or set OPENWEATHER_API_KEY."
                    .to_string()
            }
            ErrorKind::Timeout => format!("Timeout fetching data for {}.", self.city),
            ErrorKind::NotFound => {
                format!("City '{}' not found. Please check the spelling.", self.city)
            }
            ErrorKind::Unauthorized => {
                "Invalid API key. New keys can take a few hours to activate.".to_string()
            }
            ErrorKind::HttpError => format!("HTTP error for {}: {}", self.city, self.detail),
            ErrorKind::NetworkError => format!("Network error for {}: {}", self.city, self.detail),
            ErrorKind::MalformedResponse => format!("Invalid API response for {}.", self.city),
            ErrorKind::ParseError => {
                format!("Error parsing data for {}: {}", self.city, self.detail)
            }
        }
    }
}
