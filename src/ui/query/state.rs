use crate::catalog::{QuerySnapshot, SortMode};
use crate::ui::mvi::UiState;

/// The three independent knobs a fetch is built from.
///
/// Invariant: a non-empty `search` means the built request is a search
/// request and `sort` is not applied; choosing a sort clears `search`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// 1-based page number. Never clamped here; out-of-range values flow
    /// through to the catalog, which answers with an error or empty page.
    pub page: u32,
    pub sort: SortMode,
    /// Trimmed free-text term; empty means discover mode.
    pub search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            sort: SortMode::default(),
            search: String::new(),
        }
    }
}

impl UiState for QueryState {}

impl QueryState {
    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn snapshot(&self) -> QuerySnapshot {
        QuerySnapshot {
            page: self.page,
            sort: self.sort,
            search: self.search.clone(),
        }
    }
}
