//! Accommodation search.
//!
//! An HTTP API answering type-ahead searches over hotels, cities and
//! countries, backed by SQLite FTS5 indexes, and a typed client for it.
//!
//! - **`search`**: composes the per-collection autocomplete queries and runs
//!   them side by side.
//! - **`detail`**: point lookups; cities and countries come with their hotels.
//! - **`db`**: pool setup, migrations and the `AccommodationStore` seam.
//! - **`handlers`**: actix-web routes.
//! - **`client`**: reqwest-based client and search-box state.

pub mod client;
pub mod config;
pub mod db;
pub mod detail;
pub mod error;
pub mod handlers;
pub mod models;
pub mod search;
pub mod state;

#[cfg(test)]
mod test_support;
