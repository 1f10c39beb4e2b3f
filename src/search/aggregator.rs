use futures::try_join;

use super::query::compose_search_queries;
use crate::db::{AccommodationStore, StoreError};
use crate::models::SearchResult;

/// Runs the hotel, city and country autocomplete queries for `term`
/// concurrently. Any failing query fails the whole search.
pub async fn search(store: &dyn AccommodationStore, term: &str) -> Result<SearchResult, StoreError> {
    let queries = compose_search_queries(term);

    let (hotels, cities, countries) = try_join!(
        store.search_hotels(&queries.hotels),
        store.search_cities(&queries.cities),
        store.search_countries(&queries.countries),
    )?;

    Ok(SearchResult {
        hotels,
        cities,
        countries,
    })
}
