use serde::{Deserialize, Serialize};

use super::hotel::{Hotel, HotelSummary};
use super::place::{City, Country};

/// Combined autocomplete result for one search term.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub hotels: Vec<HotelSummary>,
    pub cities: Vec<City>,
    pub countries: Vec<Country>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty() && self.cities.is_empty() && self.countries.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityWithHotels {
    #[serde(flatten)]
    pub city: City,
    pub hotels: Vec<Hotel>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CountryWithHotels {
    #[serde(flatten)]
    pub country: Country,
    pub hotels: Vec<Hotel>,
}
