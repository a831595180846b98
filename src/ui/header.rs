use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::{ACCENT, MUTED_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let version_style = Style::default().fg(MUTED_TEXT);
        let line = Line::from(vec![
            Span::styled(" Movie Explorer", title_style),
            Span::styled(format!("  v{}", VERSION), version_style),
        ]);
        Paragraph::new(line)
    }
}
