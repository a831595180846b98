//! State for the fetch lifecycle.

use crate::catalog::MoviePage;
use crate::ui::mvi::UiState;

/// Fixed user-facing message for any failed fetch. The underlying cause is
/// logged, never shown.
pub const ERROR_MESSAGE: &str = "Error fetching movie list. Please try again.";

/// Outcome of the most recent fetch. Exactly one variant holds at a time.
///
/// There is no separate idle state: a fetch is issued for the default query
/// on startup, so the first frame is already `Loading`. Entering `Loading`
/// discards any prior page or error. "No results" is `Loaded` with empty
/// `results`, never `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchLifecycle {
    #[default]
    Loading,
    Failed,
    Loaded(MoviePage),
}

impl UiState for FetchLifecycle {}

impl FetchLifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// The loaded page, if the last fetch succeeded.
    pub fn page(&self) -> Option<&MoviePage> {
        match self {
            Self::Loaded(page) => Some(page),
            _ => None,
        }
    }
}
