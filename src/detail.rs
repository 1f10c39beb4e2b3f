//! Single-entity lookups. `Ok(None)` means the id is well formed but no
//! document has it.

use crate::db::{AccommodationStore, StoreError};
use crate::models::{CityWithHotels, CountryWithHotels, Hotel};

pub async fn hotel(store: &dyn AccommodationStore, id: &str) -> Result<Option<Hotel>, StoreError> {
    store.hotel_by_id(id).await
}

/// The city plus every hotel whose `city` field names it.
pub async fn city(
    store: &dyn AccommodationStore,
    id: &str,
) -> Result<Option<CityWithHotels>, StoreError> {
    let Some(city) = store.city_by_id(id).await? else {
        return Ok(None);
    };
    let hotels = store.hotels_in_city(&city.name).await?;
    Ok(Some(CityWithHotels { city, hotels }))
}

pub async fn country(
    store: &dyn AccommodationStore,
    id: &str,
) -> Result<Option<CountryWithHotels>, StoreError> {
    let Some(country) = store.country_by_id(id).await? else {
        return Ok(None);
    };
    let hotels = store.hotels_in_country(&country.name).await?;
    Ok(Some(CountryWithHotels { country, hotels }))
}
