//! Request lifecycle: the tri-state outcome of the most recent fetch.

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::{FetchLifecycle, ERROR_MESSAGE};
