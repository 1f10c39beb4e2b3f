//! Client side of the API: typed fetches and search-box state.

pub mod api;
pub mod search_box;

pub use api::{AccommodationSource, ApiClient, FetchError};
pub use search_box::{SearchBox, SearchState};
