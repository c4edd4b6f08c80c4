//! Test utilities
//!
//! - [`char_key`]/[`code_key`]: build `KeyEvent`s for component tests
//! - [`RenderHarness`]: render into a test buffer and inspect plain text
//! - [`ActionAssertions`]: assertions over `handle_event` results

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

use crate::action::Action;

/// `KeyEvent` for a plain character press.
pub fn char_key(c: char) -> KeyEvent {
    code_key(KeyCode::Char(c))
}

/// `KeyEvent` for an arbitrary key code with no modifiers.
pub fn code_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Render components into a test buffer and inspect the output as text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Draw one frame and return the buffer contents without styling.
    pub fn render_to_string_plain<F>(&mut self, render: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).expect("draw frame");
        buffer_to_string_plain(self.terminal.backend().buffer())
    }
}

/// Flatten a buffer into newline-separated rows of symbols.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let mut out =
        String::with_capacity((buffer.area.width as usize + 1) * buffer.area.height as usize);
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Assertions over actions returned by `Component::handle_event`.
pub trait ActionAssertions {
    fn assert_empty(&self);
    fn assert_count(&self, expected: usize);
    fn assert_first(&self, expected: Action);
}

impl ActionAssertions for Vec<Action> {
    fn assert_empty(&self) {
        assert!(self.is_empty(), "expected no actions, got: {self:?}");
    }

    fn assert_count(&self, expected: usize) {
        assert_eq!(self.len(), expected, "unexpected action count: {self:?}");
    }

    fn assert_first(&self, expected: Action) {
        assert_eq!(self.first(), Some(&expected), "unexpected first action");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_key() {
        let key = char_key('x');

        assert_eq!(key.code, KeyCode::Char('x'));
        assert_eq!(key.modifiers, KeyModifiers::empty());
    }

    #[test]
    fn test_render_harness_captures_widget_text() {
        use ratatui::widgets::Paragraph;

        let mut render = RenderHarness::new(20, 3);
        let output = render.render_to_string_plain(|frame| {
            frame.render_widget(Paragraph::new("hello"), frame.area());
        });

        assert!(output.contains("hello"));
    }
}
