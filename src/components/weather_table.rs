//! Body of the report: one render branch per view state

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::{Component, ERROR_ICON, SPINNERS};
use crate::state::{AppState, ViewState, WeatherRecord};

pub struct WeatherTable;

pub struct WeatherTableProps<'a> {
    pub state: &'a AppState,
}

impl Component for WeatherTable {
    type Props<'a> = WeatherTableProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match &props.state.view {
            ViewState::Idle => render_centered_lines(frame, area, idle_lines()),
            ViewState::Loading => {
                render_centered_lines(frame, area, loading_lines(props.state.tick_count));
            }
            ViewState::Failed(message) => render_centered_lines(frame, area, error_lines(message)),
            ViewState::Loaded(records) => render_table(frame, area, records),
        }
    }
}

fn render_centered_lines(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let constraints = lines.iter().map(|_| Constraint::Length(1));
    let chunks = Layout::vertical(constraints).flex(Flex::Center).split(area);
    for (line, chunk) in lines.into_iter().zip(chunks.iter().copied()) {
        frame.render_widget(Paragraph::new(line), chunk);
    }
}

fn idle_lines() -> Vec<Line<'static>> {
    vec![Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("f", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to fetch weather", Style::default().fg(Color::DarkGray)),
    ])
    .centered()]
}

fn loading_lines(tick_count: u32) -> Vec<Line<'static>> {
    let spinner = SPINNERS[(tick_count as usize / 2) % SPINNERS.len()];
    let dots = ".".repeat((tick_count as usize / 3) % 4);

    vec![Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" Fetching weather{dots:<3}"),
            Style::default().fg(Color::Gray),
        ),
    ])
    .centered()]
}

fn error_lines(message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(ERROR_ICON).centered(),
        Line::from(vec![Span::styled(
            "Error",
            Style::default().fg(Color::Red).bold(),
        )])
        .centered(),
        Line::from(vec![Span::styled(
            message.to_string(),
            Style::default().fg(Color::Rgb(200, 100, 100)),
        )])
        .centered(),
        Line::from("").centered(),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("f", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
    ]
}

fn render_table(frame: &mut Frame, area: Rect, records: &[WeatherRecord]) {
    let header = Row::new([
        Cell::from("Place"),
        Cell::from("Time"),
        Cell::from("Temperature"),
    ])
    .style(Style::default().fg(Color::Cyan).bold())
    .bottom_margin(1);

    // One row per record, in sequence order.
    let rows = records.iter().map(|record| {
        Row::new([
            Cell::from(record.place.clone()),
            Cell::from(record.date.clone()),
            Cell::from(record.temperature.clone()),
        ])
    });

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(2);

    // Keep the table off the frame edges.
    let [table_area] = Layout::horizontal([Constraint::Percentage(90)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(table, table_area);
}
