use crate::catalog::MoviePage;
use crate::ui::mvi::Intent;

/// Lifecycle events emitted by the orchestrator and the fetch worker.
#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// A new request was issued; prior page or error is discarded.
    Started,
    /// The request completed with a page of results.
    Loaded { page: MoviePage },
    /// The request failed (HTTP status, transport, or decode).
    Failed,
}

impl Intent for FetchIntent {}
