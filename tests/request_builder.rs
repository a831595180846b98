use chrono::NaiveDate;
use cinescope::catalog::{CatalogRequest, Endpoint, QuerySnapshot, SortMode};

fn snapshot(page: u32, sort: SortMode, search: &str) -> QuerySnapshot {
    QuerySnapshot {
        page,
        sort,
        search: search.to_string(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
}

#[test]
fn default_state_is_discover_by_popularity_without_cutoff() {
    let request = CatalogRequest::with_cutoff(&snapshot(1, SortMode::PopularityDesc, ""), today());
    assert_eq!(request.endpoint, Endpoint::Discover);
    assert_eq!(request.param("page"), Some("1"));
    assert_eq!(request.param("sort_by"), Some("popularity.desc"));
    assert_eq!(request.param("primary_release_date.lte"), None);
    assert_eq!(request.param("query"), None);
}

#[test]
fn non_empty_search_builds_search_request_regardless_of_sort() {
    for sort in [
        SortMode::ReleaseDateAsc,
        SortMode::ReleaseDateDesc,
        SortMode::RatingAsc,
        SortMode::RatingDesc,
        SortMode::PopularityDesc,
    ] {
        let request = CatalogRequest::with_cutoff(&snapshot(1, sort, "dune"), today());
        assert_eq!(request.endpoint, Endpoint::Search);
        assert_eq!(request.param("query"), Some("dune"));
        assert_eq!(request.param("sort_by"), None);
        assert_eq!(request.param("primary_release_date.lte"), None);
    }
}

#[test]
fn search_keeps_the_current_page() {
    let request = CatalogRequest::with_cutoff(&snapshot(2, SortMode::PopularityDesc, "dune"), today());
    assert_eq!(request.endpoint, Endpoint::Search);
    assert_eq!(request.param("page"), Some("2"));
    assert_eq!(request.param("query"), Some("dune"));
}

#[test]
fn release_date_sorts_constrain_to_released_titles() {
    for sort in [SortMode::ReleaseDateAsc, SortMode::ReleaseDateDesc] {
        let request = CatalogRequest::with_cutoff(&snapshot(1, sort, ""), today());
        assert_eq!(request.endpoint, Endpoint::Discover);
        assert_eq!(request.param("sort_by"), Some(sort.api_token()));
        assert_eq!(request.param("primary_release_date.lte"), Some("2026-08-25"));
    }
}

#[test]
fn rating_sorts_have_no_date_cutoff() {
    for sort in [SortMode::RatingAsc, SortMode::RatingDesc] {
        let request = CatalogRequest::with_cutoff(&snapshot(3, sort, ""), today());
        assert_eq!(request.param("sort_by"), Some(sort.api_token()));
        assert_eq!(request.param("primary_release_date.lte"), None);
    }
}

#[test]
fn cutoff_date_is_zero_padded() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let request = CatalogRequest::with_cutoff(&snapshot(1, SortMode::ReleaseDateDesc, ""), date);
    assert_eq!(request.param("primary_release_date.lte"), Some("2026-01-05"));
}

#[test]
fn building_twice_from_the_same_snapshot_is_identical() {
    let snap = snapshot(4, SortMode::ReleaseDateDesc, "");
    let first = CatalogRequest::with_cutoff(&snap, today());
    let second = CatalogRequest::with_cutoff(&snap, today());
    assert_eq!(first, second);
}

#[test]
fn search_term_is_trimmed() {
    let request = CatalogRequest::with_cutoff(&snapshot(1, SortMode::PopularityDesc, "  dune  "), today());
    assert_eq!(request.param("query"), Some("dune"));
}

#[test]
fn whitespace_only_search_falls_back_to_discover() {
    let request = CatalogRequest::with_cutoff(&snapshot(1, SortMode::RatingDesc, "   "), today());
    assert_eq!(request.endpoint, Endpoint::Discover);
    assert_eq!(request.param("sort_by"), Some("vote_average.desc"));
}
