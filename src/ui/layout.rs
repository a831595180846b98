use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub controls: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let [header, controls, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    Regions {
        header,
        controls,
        body,
        footer,
    }
}

/// Splits the controls bar into the search field and the sort selector.
pub fn controls_regions(area: Rect) -> (Rect, Rect) {
    let [search, sort] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);
    (search, sort)
}
