//! Weather endpoint client
//!
//! The fetch is spawned as an async task when `WeatherFetch` is dispatched;
//! the task converts the outcome into a `WeatherDidLoad` or
//! `WeatherDidError` action. No async code runs in the reducer or
//! components.

use tracing::debug;

use crate::state::WeatherRecord;

/// Path of the weather resource, relative to the endpoint base URL.
pub const WEATHER_PATH: &str = "/weather";

/// Message shown for a response with a non-success status.
pub const STATUS_ERROR_TEXT: &str = "Failed to fetch weather data";

/// Message shown when the underlying error carries no description.
pub const FALLBACK_ERROR_TEXT: &str = "Something went wrong!";

/// Fetch failure, split by where the request went wrong.
#[derive(Debug)]
pub enum FetchError {
    /// The GET could not be completed (connectivity, DNS, timeout).
    Request(reqwest::Error),
    /// A response arrived with a non-success status.
    Status(reqwest::StatusCode),
    /// The response body is not valid JSON.
    Parse(serde_json::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "weather request failed: {e}"),
            FetchError::Status(status) => write!(f, "weather endpoint returned {status}"),
            FetchError::Parse(e) => write!(f, "weather response is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(e) => Some(e),
            FetchError::Status(_) => None,
            FetchError::Parse(e) => Some(e),
        }
    }
}

impl FetchError {
    /// The inline message shown in the error state of the UI.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Status(_) => STATUS_ERROR_TEXT.to_string(),
            FetchError::Request(e) => message_or_fallback(&e.to_string()),
            FetchError::Parse(e) => message_or_fallback(&e.to_string()),
        }
    }
}

/// Use the error's own description when it has one.
fn message_or_fallback(message: &str) -> String {
    if message.trim().is_empty() {
        FALLBACK_ERROR_TEXT.to_string()
    } else {
        message.to_string()
    }
}

/// Fetch the record array from `{base_url}/weather`.
pub async fn fetch_weather(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<WeatherRecord>, FetchError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), WEATHER_PATH);
    debug!(url = %url, "fetching weather");

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        debug!(status = %status, "weather endpoint returned an error status");
        return Err(FetchError::Status(status));
    }

    let body = response.text().await.map_err(FetchError::Request)?;
    let records: Vec<WeatherRecord> = serde_json::from_str(&body).map_err(FetchError::Parse)?;
    debug!(count = records.len(), "weather records received");
    Ok(records)
}
