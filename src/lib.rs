//! Terminal weather report
//!
//! Fetches readings from a weather data endpoint (`GET /weather`) and
//! renders them as a table. The app follows a dispatch loop:
//!
//! 1. Key event -> `ReportView::handle_event` -> actions
//! 2. Actions dispatched to the `Store`
//! 3. Reducer updates `ViewState` and returns effects
//! 4. Effects spawn fetch tasks via `TaskManager`
//! 5. If state changed, re-render
//!
//! The view lifecycle is `{Idle, Failed, Loaded} -> Loading -> {Loaded,
//! Failed}`; the loading indicator is always replaced once a fetch
//! resolves, whichever branch it takes.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod events;
pub mod reducer;
pub mod state;
pub mod store;
pub mod tasks;
pub mod testing;
