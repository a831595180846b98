use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.toggle_focus();
            return;
        }
        // Pagination works from either focus; the app ignores presses on
        // disabled ends.
        KeyCode::Left => {
            app.request_previous_page();
            return;
        }
        KeyCode::Right => {
            app.request_next_page();
            return;
        }
        KeyCode::PageUp => {
            app.scroll_up(5);
            return;
        }
        KeyCode::PageDown => {
            app.scroll_down(5);
            return;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Search => match key.code {
            KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
                app.push_search_char(c);
            }
            KeyCode::Backspace => app.backspace_search(),
            _ => {}
        },
        Focus::Sort => match key.code {
            KeyCode::Up => app.sort_cursor_up(),
            KeyCode::Down => app.sort_cursor_down(),
            KeyCode::Enter => app.choose_sort(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
