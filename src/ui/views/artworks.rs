//! Artwork table view.
//!
//! Renders one page of artworks with a checkbox column and a paginator line.
//! Checkbox state is read from the controller's selection set; the view
//! itself only owns the row cursor.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::Artwork;
use crate::controller::SelectionController;
use crate::ui::theme::Theme;

/// Column headers after the checkbox column.
const HEADERS: [&str; 6] = [
    "Title",
    "Origin",
    "Artist",
    "Inscriptions",
    "Start Year",
    "End Year",
];

/// The artwork table view.
#[derive(Debug, Default)]
pub struct ArtworkTableView {
    /// Row cursor and scroll state.
    table_state: TableState,
    /// Colors.
    theme: Theme,
}

impl ArtworkTableView {
    /// Create a new table view with the cursor on the first row.
    pub fn new() -> Self {
        Self {
            table_state: TableState::default().with_selected(Some(0)),
            theme: Theme::default(),
        }
    }

    /// The row under the cursor.
    pub fn cursor(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// Move the cursor down, stopping at the last row.
    pub fn cursor_down(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let next = (self.cursor() + 1).min(row_count - 1);
        self.table_state.select(Some(next));
    }

    /// Move the cursor up, stopping at the first row.
    pub fn cursor_up(&mut self) {
        self.table_state.select(Some(self.cursor().saturating_sub(1)));
    }

    /// Keep the cursor inside a page of `row_count` rows.
    pub fn clamp_cursor(&mut self, row_count: usize) {
        let max = row_count.saturating_sub(1);
        if self.cursor() > max {
            self.table_state.select(Some(max));
        }
    }

    /// Move the cursor back to the first row.
    pub fn reset_cursor(&mut self) {
        self.table_state = TableState::default().with_selected(Some(0));
    }

    /// Render the table and paginator.
    ///
    /// Returns the area the table itself was drawn in, for anchoring popups.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        controller: &SelectionController,
        loading_text: &str,
    ) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let header_check = if controller.is_page_checked() { "[x]" } else { "[ ]" };
        let header = Row::new(
            std::iter::once(Cell::from(header_check))
                .chain(HEADERS.iter().enumerate().map(|(i, h)| {
                    // The Title header carries the select-rows dropdown arrow
                    if i == 0 {
                        Cell::from(format!("▾ {}", h))
                    } else {
                        Cell::from(*h)
                    }
                })),
        )
        .style(self.theme.header())
        .bottom_margin(1);

        let rows: Vec<Row> = controller
            .artworks()
            .iter()
            .enumerate()
            .map(|(i, artwork)| {
                let checked = controller.is_row_checked(i);
                artwork_row(artwork, checked).style(self.theme.row(checked))
            })
            .collect();

        let title = if loading_text.is_empty() {
            " Art Institute of Chicago – Artworks Table ".to_string()
        } else {
            format!(" Art Institute of Chicago – Artworks Table  {} ", loading_text)
        };

        let widths = [
            Constraint::Length(3),
            Constraint::Percentage(24),
            Constraint::Percentage(12),
            Constraint::Percentage(24),
            Constraint::Percentage(20),
            Constraint::Length(10),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(self.theme.cursor())
            .column_spacing(1);

        self.clamp_cursor(controller.artworks().len());
        frame.render_stateful_widget(table, chunks[0], &mut self.table_state);

        let paginator = Paragraph::new(paginator_line(controller, &self.theme));
        frame.render_widget(paginator, chunks[1]);

        chunks[0]
    }
}

/// Build one table row.
fn artwork_row(artwork: &Artwork, checked: bool) -> Row<'static> {
    let text = |value: &Option<String>| value.as_deref().map(single_line).unwrap_or_default();
    let year = |value: Option<i32>| value.map(|y| y.to_string()).unwrap_or_default();

    Row::new(vec![
        Cell::from(if checked { "[x]" } else { "[ ]" }),
        Cell::from(single_line(artwork.title())),
        Cell::from(text(&artwork.place_of_origin)),
        Cell::from(text(&artwork.artist_display)),
        Cell::from(text(&artwork.inscriptions)),
        Cell::from(year(artwork.date_start)),
        Cell::from(year(artwork.date_end)),
    ])
}

/// Collapse line breaks so a value fits on one table line.
fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The paginator line: page position, record range and selection count.
fn paginator_line(controller: &SelectionController, theme: &Theme) -> Line<'static> {
    let window = controller.window();
    let total = controller.total_records();
    let shown = controller.artworks().len() as u64;
    let first = window.first() as u64;
    let range = if shown == 0 {
        "No records".to_string()
    } else {
        format!(
            "Showing {}-{} of {}",
            format_count(first + 1),
            format_count(first + shown),
            format_count(total)
        )
    };

    Line::from(vec![
        Span::styled(" « ‹ ", theme.muted()),
        Span::styled(
            format!(
                "Page {} of {}",
                format_count(window.api_page() as u64),
                format_count(controller.page_count() as u64)
            ),
            Style::default().fg(theme.accent),
        ),
        Span::styled(" › »", theme.muted()),
        Span::raw("   "),
        Span::raw(range),
        Span::raw("   "),
        Span::styled(
            format!("Selected: {}", format_count(controller.selection().len() as u64)),
            Style::default().fg(theme.checked),
        ),
    ])
}

/// Format a count with thousands separators.
fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeCatalog;
    use ratatui::{backend::TestBackend, Terminal};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(129884), "129,884");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            single_line("Georges Seurat\nFrench, 1859-1891"),
            "Georges Seurat French, 1859-1891"
        );
    }

    #[test]
    fn test_cursor_movement() {
        let mut view = ArtworkTableView::new();
        view.cursor_up();
        assert_eq!(view.cursor(), 0);

        view.cursor_down(3);
        view.cursor_down(3);
        view.cursor_down(3);
        assert_eq!(view.cursor(), 2);

        view.cursor_up();
        assert_eq!(view.cursor(), 1);
    }

    #[test]
    fn test_cursor_down_on_empty_page() {
        let mut view = ArtworkTableView::new();
        view.cursor_down(0);
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn test_clamp_cursor() {
        let mut view = ArtworkTableView::new();
        for _ in 0..9 {
            view.cursor_down(10);
        }
        view.clamp_cursor(4);
        assert_eq!(view.cursor(), 3);

        view.reset_cursor();
        assert_eq!(view.cursor(), 0);
    }

    #[tokio::test]
    async fn test_paginator_line() {
        let catalog = FakeCatalog::new(45);
        let mut controller = SelectionController::new();
        controller.load_page(&catalog, 4).await;
        controller.toggle_row(0);

        let text = line_text(&paginator_line(&controller, &Theme::default()));
        assert!(text.contains("Page 5 of 5"));
        assert!(text.contains("Showing 41-45 of 45"));
        assert!(text.contains("Selected: 1"));
    }

    #[test]
    fn test_paginator_line_empty() {
        let controller = SelectionController::new();
        let text = line_text(&paginator_line(&controller, &Theme::default()));
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("No records"));
    }

    #[tokio::test]
    async fn test_render_shows_checkboxes() {
        let catalog = FakeCatalog::new(45);
        let mut controller = SelectionController::new();
        controller.load_page(&catalog, 0).await;
        controller.toggle_row(1);

        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        let mut view = ArtworkTableView::new();
        terminal
            .draw(|frame| {
                view.render(frame, frame.area(), &controller, "");
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rendered: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(rendered.contains("▾ Title"));
        assert!(rendered.contains("Artwork 1"));
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("Selected: 1"));
    }
}
