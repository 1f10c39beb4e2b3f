//! Autocomplete search over hotels, cities and countries.
//!
//! - **`query`**: builds the per-collection search descriptors for a term.
//! - **`fts`**: renders descriptors as SQLite FTS5 statements.
//! - **`aggregator`**: runs the three searches and merges the results.

pub mod aggregator;
pub mod fts;
pub mod query;

pub use aggregator::search;
pub use query::{compose_search_queries, SearchQueries, SearchQuery};
