//! Help screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keyboard shortcuts shown on the help screen, grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global:",
        &[("Ctrl+C", "Quit application"), ("?", "Show this help")],
    ),
    (
        "Artwork Table:",
        &[
            ("j / ↓", "Move down"),
            ("k / ↑", "Move up"),
            ("Space", "Toggle the highlighted artwork"),
            ("a", "Toggle every artwork on this page"),
            ("l / →", "Next page"),
            ("h / ←", "Previous page"),
            ("g / Home", "First page"),
            ("G / End", "Last page"),
            ("r", "Reload this page"),
            ("s", "Select the first N artworks"),
            ("o", "Open the artwork in a browser"),
            ("q", "Quit application"),
        ],
    ),
    (
        "Select Rows:",
        &[
            ("0-9", "Type how many artworks to select"),
            ("Enter", "Select them"),
            ("Esc", "Close"),
        ],
    ),
];

/// The help screen view.
#[derive(Debug, Default)]
pub struct HelpView;

impl HelpView {
    /// Create a new help view.
    pub fn new() -> Self {
        Self
    }

    /// The help text.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::raw("")];
        for (title, keys) in SECTIONS {
            lines.push(Line::styled(*title, Style::default().fg(Color::Yellow)));
            for (key, description) in keys.iter() {
                lines.push(Line::raw(format!("  {:<10} - {}", key, description)));
            }
            lines.push(Line::raw(""));
        }
        lines.push(Line::styled(
            "Press Esc or q to close this help screen",
            Style::default().fg(Color::DarkGray),
        ));
        lines
    }

    /// Render the help screen.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, area);
    }
}
