//! Model-View-Intent primitives for unidirectional data flow.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Both the query controls and the fetch lifecycle are modeled this way:
//! the reducer is the only place a state transition happens, and every
//! side effect (issuing a fetch, resetting scroll) is handled by the caller
//! around the dispatch.

/// Marker trait for UI state objects.
///
/// States are immutable snapshots: cloneable, self-contained, and
/// comparable so distinct transitions can be detected.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions (keystrokes, page requests) and
/// system events (fetch outcomes).
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// Must be a pure function: (State, Intent) -> State.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
