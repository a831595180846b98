use cinescope::catalog::{MoviePage, MovieSummary};
use cinescope::ui::fetch::{FetchIntent, FetchLifecycle, FetchReducer, ERROR_MESSAGE};
use cinescope::ui::mvi::Reducer;

fn page_with_results() -> MoviePage {
    MoviePage {
        results: vec![MovieSummary {
            id: 1,
            title: Some("Dune".to_string()),
            poster_path: None,
            release_date: Some("2021-10-22".to_string()),
            vote_average: Some(7.8),
        }],
        total_pages: 12,
    }
}

#[test]
fn started_discards_previous_success() {
    let loaded = FetchLifecycle::Loaded(page_with_results());
    let state = FetchReducer::reduce(loaded, FetchIntent::Started);
    assert!(state.is_loading());
    assert!(state.page().is_none());
}

#[test]
fn started_discards_previous_error() {
    let state = FetchReducer::reduce(FetchLifecycle::Failed, FetchIntent::Started);
    assert!(state.is_loading());
    assert!(!state.is_failed());
}

#[test]
fn failure_replaces_loading() {
    let state = FetchReducer::reduce(FetchLifecycle::Loading, FetchIntent::Failed);
    assert!(state.is_failed());
    assert!(state.page().is_none());
}

#[test]
fn success_carries_the_fresh_page() {
    let state = FetchReducer::reduce(
        FetchLifecycle::Loading,
        FetchIntent::Loaded {
            page: page_with_results(),
        },
    );
    let page = state.page().expect("loaded page");
    assert_eq!(page.total_pages, 12);
    assert_eq!(page.results.len(), 1);
}

#[test]
fn empty_results_are_success_not_error() {
    let state = FetchReducer::reduce(
        FetchLifecycle::Loading,
        FetchIntent::Loaded {
            page: MoviePage {
                results: vec![],
                total_pages: 0,
            },
        },
    );
    assert!(!state.is_failed());
    let page = state.page().expect("empty page is still a success");
    assert!(page.results.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn error_message_is_the_fixed_user_facing_text() {
    assert_eq!(ERROR_MESSAGE, "Error fetching movie list. Please try again.");
}
