use crate::catalog::SortMode;
use crate::ui::mvi::Intent;

/// User intents on the query controls.
///
/// Each maps to exactly one reducer transition; the input layer trims
/// search terms before emitting `Search`.
#[derive(Debug, Clone)]
pub enum QueryIntent {
    /// Search text changed (fires on every keystroke).
    Search { term: String },
    /// A sort option was chosen.
    Sort { mode: SortMode },
    /// A pagination button was pressed. The caller only emits in-range
    /// pages; the reducer passes any value through.
    Page { page: u32 },
}

impl Intent for QueryIntent {}
