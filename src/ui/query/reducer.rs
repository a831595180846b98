use crate::catalog::SortMode;
use crate::ui::mvi::Reducer;
use crate::ui::query::intent::QueryIntent;
use crate::ui::query::state::QueryState;

/// Pure transitions for the query controls.
///
/// Search and sort are mutually exclusive: entering a term forces the sort
/// back to the default, and choosing a sort clears the term. Either change
/// restarts pagination at page 1.
pub struct QueryReducer;

impl Reducer for QueryReducer {
    type State = QueryState;
    type Intent = QueryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QueryIntent::Search { term } => QueryState {
                page: 1,
                sort: SortMode::default(),
                search: term,
            },
            QueryIntent::Sort { mode } => QueryState {
                page: 1,
                sort: mode,
                search: String::new(),
            },
            QueryIntent::Page { page } => QueryState { page, ..state },
        }
    }
}
