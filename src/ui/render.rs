use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use crate::catalog::MoviePage;
use crate::ui::app::{App, Focus};
use crate::ui::fetch::{FetchLifecycle, ERROR_MESSAGE};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{controls_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(), regions.header);
    draw_controls(frame, app, regions.controls);
    draw_body(frame, app, regions.body);
    frame.render_widget(Footer::new().widget(app.pagination()), regions.footer);
}

fn draw_controls(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let (search_area, sort_area) = controls_regions(area);

    let focused_border = Style::default().fg(ACCENT);
    let idle_border = Style::default().fg(GLOBAL_BORDER);

    let search_focused = app.focus() == Focus::Search;
    let search_text = if app.search_input().is_empty() && !search_focused {
        Span::styled("Search for a movie...", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(app.search_input().to_string(), Style::default().fg(HEADER_TEXT))
    };
    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .border_style(if search_focused { focused_border } else { idle_border });
    frame.render_widget(Paragraph::new(search_text).block(search_block), search_area);

    if search_focused {
        let cursor_x = search_area.x + 1 + app.search_input().chars().count() as u16;
        let cursor_x = cursor_x.min(search_area.right().saturating_sub(2));
        frame.set_cursor_position((cursor_x, search_area.y + 1));
    }

    let sort_focused = app.focus() == Focus::Sort;
    let sort_label = if sort_focused {
        format!("‹ {} ›", app.highlighted_sort().label())
    } else {
        app.sort_selector_label().to_string()
    };
    let sort_style = if sort_focused {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let sort_block = Block::default()
        .borders(Borders::ALL)
        .title(" Sort ")
        .border_style(if sort_focused { focused_border } else { idle_border });
    frame.render_widget(
        Paragraph::new(Span::styled(sort_label, sort_style)).block(sort_block),
        sort_area,
    );
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    match app.lifecycle() {
        FetchLifecycle::Loading => {
            let msg = Paragraph::new(Line::from(Span::styled(
                "Loading movies...",
                Style::default().fg(MUTED_TEXT),
            )));
            frame.render_widget(msg, area);
        }
        FetchLifecycle::Failed => {
            let msg = Paragraph::new(Line::from(Span::styled(
                ERROR_MESSAGE,
                Style::default().fg(STATUS_ERROR),
            )));
            frame.render_widget(msg, area);
        }
        FetchLifecycle::Loaded(page) if page.results.is_empty() => {
            let msg = Paragraph::new(Line::from(Span::styled(
                "No movies found matching your criteria.",
                Style::default().fg(MUTED_TEXT),
            )));
            frame.render_widget(msg, area);
        }
        FetchLifecycle::Loaded(page) => draw_movie_list(frame, app, page, area),
    }
}

fn draw_movie_list(frame: &mut Frame<'_>, app: &App, page: &MoviePage, area: ratatui::layout::Rect) {
    let header = Row::new(vec!["Title", "Release Date", "Rating"]).style(
        Style::default()
            .fg(DISABLED)
            .add_modifier(Modifier::UNDERLINED),
    );

    let rows = page.results.iter().skip(app.scroll()).map(|movie| {
        Row::new(vec![
            movie.title_label().to_string(),
            movie.release_date_label().to_string(),
            movie.rating_label(),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(30),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(header);

    frame.render_widget(table, area);
}
