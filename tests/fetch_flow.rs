//! App-level orchestration: one command per distinct query transition and
//! the sequence-number discipline for stale outcomes.

use cinescope::catalog::{CatalogError, MoviePage, SortMode};
use cinescope::ui::app::App;
use cinescope::ui::worker::FetchCommand;
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn make_app() -> (App, UnboundedReceiver<FetchCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(tx), rx)
}

fn page(total_pages: u32) -> MoviePage {
    MoviePage {
        results: vec![],
        total_pages,
    }
}

#[test]
fn start_issues_one_fetch_for_the_default_query() {
    let (mut app, mut rx) = make_app();
    app.start();

    let command = rx.try_recv().expect("initial fetch command");
    assert_eq!(command.snapshot.page, 1);
    assert_eq!(command.snapshot.sort, SortMode::PopularityDesc);
    assert_eq!(command.snapshot.search, "");
    assert!(app.lifecycle().is_loading());
    assert!(rx.try_recv().is_err());
}

#[test]
fn each_keystroke_issues_exactly_one_command() {
    let (mut app, mut rx) = make_app();
    app.start();
    let _ = rx.try_recv().unwrap();

    app.push_search_char('d');
    app.push_search_char('u');

    let first = rx.try_recv().expect("command for 'd'");
    let second = rx.try_recv().expect("command for 'du'");
    assert_eq!(first.snapshot.search, "d");
    assert_eq!(second.snapshot.search, "du");
    assert!(second.seq > first.seq);
    assert!(rx.try_recv().is_err());
}

#[test]
fn unchanged_query_state_issues_no_command() {
    let (mut app, mut rx) = make_app();
    app.start();
    let _ = rx.try_recv().unwrap();

    app.push_search_char('d');
    let _ = rx.try_recv().unwrap();

    // A trailing space trims to the same term; the state is unchanged.
    app.push_search_char(' ');
    assert!(rx.try_recv().is_err());
}

#[test]
fn successful_outcome_loads_page_and_enables_pagination() {
    let (mut app, mut rx) = make_app();
    app.start();
    let command = rx.try_recv().unwrap();

    app.on_fetch_finished(command.seq, Ok(page(3)));

    let view = app.pagination().expect("pagination after success");
    assert!(!view.prev_enabled());
    assert!(view.next_enabled());
}

#[test]
fn next_page_issues_command_for_page_two() {
    let (mut app, mut rx) = make_app();
    app.start();
    let command = rx.try_recv().unwrap();
    app.on_fetch_finished(command.seq, Ok(page(3)));

    app.request_next_page();

    let command = rx.try_recv().expect("page-two command");
    assert_eq!(command.snapshot.page, 2);
    assert!(app.lifecycle().is_loading());
}

#[test]
fn previous_on_first_page_is_ignored() {
    let (mut app, mut rx) = make_app();
    app.start();
    let command = rx.try_recv().unwrap();
    app.on_fetch_finished(command.seq, Ok(page(3)));

    app.request_previous_page();
    assert!(rx.try_recv().is_err());
}

#[test]
fn pagination_is_absent_while_loading_and_after_failure() {
    let (mut app, mut rx) = make_app();
    app.start();
    let command = rx.try_recv().unwrap();
    assert!(app.pagination().is_none());

    app.on_fetch_finished(command.seq, Err(CatalogError::Status { status: 500 }));
    assert!(app.lifecycle().is_failed());
    assert!(app.pagination().is_none());
}

#[test]
fn stale_outcome_is_dropped() {
    let (mut app, mut rx) = make_app();
    app.start();
    let first = rx.try_recv().unwrap();

    app.push_search_char('a');
    let second = rx.try_recv().unwrap();

    // The old request resolves after the new one was issued.
    app.on_fetch_finished(first.seq, Ok(page(7)));
    assert!(app.lifecycle().is_loading());

    app.on_fetch_finished(second.seq, Ok(page(2)));
    let loaded = app.lifecycle().page().expect("latest outcome applied");
    assert_eq!(loaded.total_pages, 2);
}

#[test]
fn failure_then_new_query_retries() {
    let (mut app, mut rx) = make_app();
    app.start();
    let command = rx.try_recv().unwrap();
    app.on_fetch_finished(command.seq, Err(CatalogError::Status { status: 500 }));
    assert!(app.lifecycle().is_failed());

    // No dedicated retry action; any query mutation re-attempts.
    app.push_search_char('d');
    let retry = rx.try_recv().expect("retry command");
    assert!(retry.seq > command.seq);
    assert!(app.lifecycle().is_loading());
}

#[test]
fn choosing_a_sort_clears_the_search_buffer() {
    let (mut app, mut rx) = make_app();
    app.start();
    let _ = rx.try_recv().unwrap();

    app.push_search_char('d');
    let _ = rx.try_recv().unwrap();

    app.sort_cursor_down();
    app.choose_sort();

    let command = rx.try_recv().expect("sort command");
    assert_eq!(command.snapshot.search, "");
    assert_eq!(command.snapshot.sort, SortMode::ReleaseDateDesc);
    assert_eq!(app.search_input(), "");
}
