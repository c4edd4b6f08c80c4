//! Declarative side effects
//!
//! The reducer never performs side work; it returns effects and the main
//! loop executes them.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET to the weather data endpoint.
    FetchWeather,
}
