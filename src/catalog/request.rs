use chrono::{Local, NaiveDate};

/// Sort orders the catalog supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    ReleaseDateAsc,
    ReleaseDateDesc,
    RatingAsc,
    RatingDesc,
    #[default]
    PopularityDesc,
}

impl SortMode {
    /// Sort token understood by the catalog API.
    pub fn api_token(self) -> &'static str {
        match self {
            SortMode::ReleaseDateAsc => "primary_release_date.asc",
            SortMode::ReleaseDateDesc => "primary_release_date.desc",
            SortMode::RatingAsc => "vote_average.asc",
            SortMode::RatingDesc => "vote_average.desc",
            SortMode::PopularityDesc => "popularity.desc",
        }
    }

    /// Release-date sorts constrain results to already-released titles.
    pub fn sorts_by_release_date(self) -> bool {
        matches!(self, SortMode::ReleaseDateAsc | SortMode::ReleaseDateDesc)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::ReleaseDateAsc => "Release Date (Asc)",
            SortMode::ReleaseDateDesc => "Release Date (Desc)",
            SortMode::RatingAsc => "Rating (Asc)",
            SortMode::RatingDesc => "Rating (Desc)",
            SortMode::PopularityDesc => "Popularity (Desc)",
        }
    }

    /// The choices offered by the sort selector, in menu order.
    pub const MENU: [SortMode; 4] = [
        SortMode::ReleaseDateAsc,
        SortMode::ReleaseDateDesc,
        SortMode::RatingAsc,
        SortMode::RatingDesc,
    ];
}

/// Point-in-time copy of the query controls a request is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot {
    pub page: u32,
    pub sort: SortMode,
    pub search: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Discover,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "search/movie",
            Endpoint::Discover => "discover/movie",
        }
    }
}

/// A fully determined outbound request: endpoint plus ordered query pairs.
///
/// The language pair and percent-encoding are applied by the client; the
/// builder deals in decoded values only.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl CatalogRequest {
    /// Builds the one request the snapshot maps to.
    ///
    /// A non-empty trimmed search term selects the search endpoint and the
    /// sort mode is not applied. Otherwise the discover endpoint is used
    /// with the snapshot's sort token, constrained to releases on or before
    /// today when sorting by release date.
    pub fn from_snapshot(snapshot: &QuerySnapshot) -> Self {
        Self::with_cutoff(snapshot, Local::now().date_naive())
    }

    /// Same as [`from_snapshot`](Self::from_snapshot) with an injected
    /// "today" so tests are deterministic.
    pub fn with_cutoff(snapshot: &QuerySnapshot, today: NaiveDate) -> Self {
        let term = snapshot.search.trim();

        if !term.is_empty() {
            return Self {
                endpoint: Endpoint::Search,
                params: vec![
                    ("page", snapshot.page.to_string()),
                    ("query", term.to_string()),
                ],
            };
        }

        let mut params = vec![
            ("page", snapshot.page.to_string()),
            ("sort_by", snapshot.sort.api_token().to_string()),
        ];
        if snapshot.sort.sorts_by_release_date() {
            params.push((
                "primary_release_date.lte",
                today.format("%Y-%m-%d").to_string(),
            ));
        }

        Self {
            endpoint: Endpoint::Discover,
            params,
        }
    }

    /// Looks up a single parameter value.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
