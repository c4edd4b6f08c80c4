//! Application actions with intent/result naming
//!
//! - `WeatherFetch` is the intent that triggers the async task
//! - The `Did` prefix marks async results arriving back on the channel

use crate::state::WeatherRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Intent: request a fetch from the weather endpoint
    WeatherFetch,

    /// Result: endpoint returned a parsed record array
    WeatherDidLoad(Vec<WeatherRecord>),

    /// Result: fetch failed with a user-facing message
    WeatherDidError(String),

    /// Periodic tick for the loading animation
    Tick,

    /// Exit the application
    Quit,
}

impl Action {
    /// Action name for logging and filtering.
    pub fn name(&self) -> &'static str {
        match self {
            Action::WeatherFetch => "WeatherFetch",
            Action::WeatherDidLoad(_) => "WeatherDidLoad",
            Action::WeatherDidError(_) => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Concise log form; avoids dumping record lists or long error text.
    pub fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad(records) => {
                format!("WeatherDidLoad {{ records: {} }}", records.len())
            }
            Action::WeatherDidError(e) => {
                let msg = if e.len() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("WeatherDidError({msg:?})")
            }
            _ => format!("{self:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_records_instead_of_printing_them() {
        let action = Action::WeatherDidLoad(vec![WeatherRecord::default(); 3]);

        assert_eq!(action.summary(), "WeatherDidLoad { records: 3 }");
    }

    #[test]
    fn test_summary_truncates_long_errors() {
        let action = Action::WeatherDidError("x".repeat(80));

        assert!(action.summary().contains("..."));
        assert!(action.summary().len() < 80);
    }

    #[test]
    fn test_name_matches_variant() {
        assert_eq!(Action::WeatherFetch.name(), "WeatherFetch");
        assert_eq!(Action::Quit.name(), "Quit");
    }
}
