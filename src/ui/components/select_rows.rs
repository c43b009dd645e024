//! Select-rows prompt.
//!
//! A small popup under the Title column header where the user types how many
//! artworks to select, counted from the start of the catalog.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::input::TextInput;
use crate::api::PAGE_SIZE;

/// Popup width in cells.
const POPUP_WIDTH: u16 = 30;

/// Popup height in cells.
const POPUP_HEIGHT: u16 = 6;

/// Actions produced by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectRowsAction {
    /// Select this many rows.
    Submit(i64),
    /// Close the prompt.
    Cancel,
}

/// The select-rows prompt.
#[derive(Debug, Clone)]
pub struct SelectRowsPrompt {
    input: TextInput,
}

impl SelectRowsPrompt {
    /// Create a new prompt.
    pub fn new() -> Self {
        let mut input = TextInput::numeric();
        input.set_placeholder("Select rows...");
        Self { input }
    }

    /// The number currently typed; anything unparseable counts as zero.
    pub fn count(&self) -> i64 {
        self.input.value().trim().parse().unwrap_or(0)
    }

    /// Clear the typed number.
    pub fn reset(&mut self) {
        self.input.clear();
    }

    /// Handle keyboard input.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SelectRowsAction> {
        match key.code {
            KeyCode::Enter => Some(SelectRowsAction::Submit(self.count())),
            KeyCode::Esc => Some(SelectRowsAction::Cancel),
            _ => {
                self.input.handle_input(key);
                None
            }
        }
    }

    /// Where the popup goes for a table drawn in `table_area`.
    ///
    /// The popup hangs below the header row, aligned with the Title column.
    pub fn popup_area(table_area: Rect) -> Rect {
        let x = (table_area.x + 5).min(table_area.right().saturating_sub(POPUP_WIDTH));
        let y = table_area.y + 2;
        Rect {
            x,
            y,
            width: POPUP_WIDTH.min(table_area.width),
            height: POPUP_HEIGHT.min(table_area.bottom().saturating_sub(y)),
        }
    }

    /// Render the prompt for a table drawn in `table_area`.
    pub fn render(&self, frame: &mut Frame, table_area: Rect, busy: Option<&str>) {
        let area = Self::popup_area(table_area);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" Select rows (max {}) ", PAGE_SIZE))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(inner);

        self.input.render(frame, chunks[0], busy.is_none());

        let footer = match busy {
            Some(text) => Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(Color::Cyan),
            )),
            None => Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
                Span::styled(" submit ", Style::default().fg(Color::DarkGray)),
                Span::styled("[Esc]", Style::default().fg(Color::Cyan)),
                Span::styled(" close", Style::default().fg(Color::DarkGray)),
            ]),
        };
        frame.render_widget(Paragraph::new(footer), chunks[1]);
    }
}

impl Default for SelectRowsPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(prompt: &mut SelectRowsPrompt, text: &str) {
        for c in text.chars() {
            assert_eq!(prompt.handle_input(key(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_submit_count() {
        let mut prompt = SelectRowsPrompt::new();
        type_text(&mut prompt, "15");
        assert_eq!(
            prompt.handle_input(key(KeyCode::Enter)),
            Some(SelectRowsAction::Submit(15))
        );
    }

    #[test]
    fn test_count_above_page_size_is_not_capped() {
        let mut prompt = SelectRowsPrompt::new();
        type_text(&mut prompt, "250");
        assert_eq!(prompt.count(), 250);
    }

    #[test]
    fn test_empty_submit_is_zero() {
        let mut prompt = SelectRowsPrompt::new();
        assert_eq!(
            prompt.handle_input(key(KeyCode::Enter)),
            Some(SelectRowsAction::Submit(0))
        );
    }

    #[test]
    fn test_malformed_count_is_zero() {
        let mut prompt = SelectRowsPrompt::new();
        type_text(&mut prompt, "1-2");
        assert_eq!(prompt.count(), 0);
    }

    #[test]
    fn test_negative_count() {
        let mut prompt = SelectRowsPrompt::new();
        type_text(&mut prompt, "-4");
        assert_eq!(prompt.count(), -4);
    }

    #[test]
    fn test_escape_cancels() {
        let mut prompt = SelectRowsPrompt::new();
        assert_eq!(
            prompt.handle_input(key(KeyCode::Esc)),
            Some(SelectRowsAction::Cancel)
        );
    }

    #[test]
    fn test_reset() {
        let mut prompt = SelectRowsPrompt::new();
        type_text(&mut prompt, "7");
        prompt.reset();
        assert_eq!(prompt.count(), 0);
    }

    #[test]
    fn test_popup_area_fits_inside_table() {
        let table = Rect::new(0, 3, 120, 20);
        let popup = SelectRowsPrompt::popup_area(table);
        assert_eq!(popup, Rect::new(5, 5, POPUP_WIDTH, POPUP_HEIGHT));

        let narrow = Rect::new(0, 0, 20, 4);
        let popup = SelectRowsPrompt::popup_area(narrow);
        assert!(popup.right() <= narrow.right());
        assert!(popup.bottom() <= narrow.bottom());
    }
}
