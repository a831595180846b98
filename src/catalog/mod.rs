//! Remote catalog client: request building and the HTTP leaf.

mod client;
mod request;
mod types;

pub use client::{CatalogClient, CatalogError};
pub use request::{CatalogRequest, Endpoint, QuerySnapshot, SortMode};
pub use types::{MoviePage, MovieSummary};
