use serde::{Deserialize, Serialize};

/// Search projection of a hotel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct HotelSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub hotel_name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Hotel {
    #[serde(rename = "_id")]
    pub id: String,
    pub chain_name: String,
    pub hotel_name: String,
    pub addressline1: String,
    pub addressline2: String,
    pub zipcode: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub countryisocode: String,
    pub star_rating: String,
}

pub const STAR_SYMBOL: char = '\u{2605}';

impl Hotel {
    /// Number of stars encoded in `star_rating`. Anything that is not a
    /// non-negative integer counts as zero.
    pub fn star_count(&self) -> u32 {
        self.star_rating.trim().parse().unwrap_or(0)
    }

    pub fn star_symbols(&self) -> String {
        std::iter::repeat(STAR_SYMBOL)
            .take(self.star_count() as usize)
            .collect()
    }

    /// Single-line postal address, skipping blank parts.
    pub fn address(&self) -> String {
        [&self.addressline1, &self.city, &self.state, &self.country]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
