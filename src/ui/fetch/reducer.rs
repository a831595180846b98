//! Reducer for the fetch lifecycle.

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchLifecycle;

/// Pure transitions for the fetch lifecycle. Sequencing (which outcome is
/// current) is enforced by the caller; the reducer applies whatever it is
/// handed.
pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchLifecycle;
    type Intent = FetchIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FetchIntent::Started => FetchLifecycle::Loading,
            FetchIntent::Loaded { page } => FetchLifecycle::Loaded(page),
            FetchIntent::Failed => FetchLifecycle::Failed,
        }
    }
}
