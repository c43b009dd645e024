//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the application.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent color for titles and key hints.
    pub accent: Color,
    /// Color for checked rows.
    pub checked: Color,
    /// Color for secondary text.
    pub muted: Color,
    /// Highlight color for the row under the cursor.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            checked: Color::Green,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
        }
    }
}

impl Theme {
    /// Style for table header cells.
    pub fn header(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for a table row.
    pub fn row(&self, checked: bool) -> Style {
        if checked {
            Style::default().fg(self.checked)
        } else {
            Style::default().fg(self.fg)
        }
    }

    /// Style applied on top of the row under the cursor.
    pub fn cursor(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::REVERSED)
    }

    /// Style for secondary text.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
