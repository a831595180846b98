//! Query controls: page, sort mode, free-text search.

mod intent;
mod reducer;
mod state;

pub use intent::QueryIntent;
pub use reducer::QueryReducer;
pub use state::QueryState;
