//! Outer weather report frame: border, title spinner, body, help bar

use crossterm::event::KeyCode;
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};

use super::{Component, HelpBar, HelpBarProps, WeatherTable, WeatherTableProps};
use crate::action::Action;
use crate::events::EventKind;
use crate::state::AppState;

pub const ERROR_ICON: &str = "⚠";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for ReportView - read-only view of state
pub struct ReportViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The main weather report component
#[derive(Default)]
pub struct ReportView;

impl Component for ReportView {
    type Props<'a> = ReportViewProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: ReportViewProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('f') | KeyCode::Char('r') | KeyCode::F(5) => {
                    vec![Action::WeatherFetch]
                }
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ReportViewProps<'_>) {
        let state = props.state;

        // Loading indicator for title
        let loading_indicator = if state.view.is_loading() {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {spinner} ")
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Weather Report{loading_indicator}"))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        // Layout: body + help bar at bottom
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Body (centered by WeatherTable)
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        let mut table = WeatherTable;
        table.render(frame, chunks[0], WeatherTableProps { state });

        let mut help = HelpBar;
        help.render(frame, chunks[1], HelpBarProps);
    }
}
