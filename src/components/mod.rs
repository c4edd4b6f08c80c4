//! UI components
//!
//! Components follow these rules:
//! 1. Props contain all read-only data needed for rendering
//! 2. `handle_event` returns actions, never mutates external state
//! 3. `render` is a pure function of props

pub mod help_bar;
pub mod report_view;
pub mod weather_table;

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::events::EventKind;

/// A pure UI element that renders from props and emits actions.
pub trait Component {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Default implementation returns no actions (render-only components).
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component to the frame
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}

pub use help_bar::{HelpBar, HelpBarProps};
pub use report_view::{ReportView, ReportViewProps, ERROR_ICON, SPINNERS};
pub use weather_table::{WeatherTable, WeatherTableProps};
