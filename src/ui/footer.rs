use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::theme::{DISABLED, HEADER_TEXT};

/// Pagination controls derived from the loaded page.
///
/// Only constructed in the loaded lifecycle state; loading and error frames
/// render hints instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub page: u32,
    pub total_pages: u32,
}

impl PaginationView {
    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Page X of Y" with the total grouped by thousands.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, group_thousands(self.total_pages))
    }
}

/// Formats an integer with comma grouping, e.g. 51234 -> "51,234".
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, pagination: Option<PaginationView>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let disabled_style = Style::default().fg(DISABLED).add_modifier(Modifier::DIM);

        let line = match pagination {
            Some(view) => {
                let prev_style = if view.prev_enabled() { text_style } else { disabled_style };
                let next_style = if view.next_enabled() { text_style } else { disabled_style };
                Line::from(vec![
                    Span::styled(" ← Previous ", prev_style),
                    Span::styled(format!(" {} ", view.label()), text_style),
                    Span::styled(" Next → ", next_style),
                    Span::styled("   Tab: Focus │ Ctrl+Q: Quit", disabled_style),
                ])
            }
            None => Line::from(Span::styled(
                " Tab: Focus │ ↑/↓: Sort │ Enter: Apply │ Ctrl+Q: Quit",
                disabled_style,
            )),
        };

        Paragraph::new(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(51234), "51,234");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
