pub mod hotel;
pub mod id;
pub mod place;
pub mod search;

pub use hotel::{Hotel, HotelSummary};
pub use place::{City, Country};
pub use search::{CityWithHotels, CountryWithHotels, SearchResult};
