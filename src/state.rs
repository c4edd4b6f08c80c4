//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.
//! The view lifecycle is a tagged union, so "loading and loaded at the
//! same time" is unrepresentable.

use serde::{Deserialize, Deserializer};

/// Period of the loading-spinner animation tick.
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// One weather reading returned by the endpoint.
///
/// The endpoint's record shape is not trusted: every field accepts any JSON
/// scalar and falls back to an empty cell when missing or non-scalar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WeatherRecord {
    #[serde(default, deserialize_with = "scalar_to_string")]
    pub place: String,
    #[serde(default, deserialize_with = "scalar_to_string")]
    pub date: String,
    #[serde(default, deserialize_with = "scalar_to_string")]
    pub temperature: String,
}

/// Accept string, number, or bool and render it as display text.
fn scalar_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// What the UI currently displays. Exactly one variant is ever active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// No data requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// Last request succeeded; the sequence may be empty.
    Loaded(Vec<WeatherRecord>),
    /// Last request failed with a user-facing message.
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn records(&self) -> Option<&[WeatherRecord]> {
        match self {
            ViewState::Loaded(records) => Some(records),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Current view lifecycle state
    pub view: ViewState,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,
}
