//! Shared helpers for the in-crate tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::db::{self, AccommodationStore, StoreError};
use crate::models::{City, Country, Hotel, HotelSummary};
use crate::search::query::SearchQuery;

/// Migrated in-memory database. One connection, kept alive for the pool's
/// lifetime, so every query sees the same database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    db::migrate(&pool).await.expect("run migrations");
    pool
}

pub mod fixtures {
    use sqlx::SqlitePool;

    pub const GRAND_LISBON_ID: &str = "65a1b2c3d4e5f6a7b8c9d001";
    pub const TAGUS_ID: &str = "65a1b2c3d4e5f6a7b8c9d002";
    pub const PORTO_PALACE_ID: &str = "65a1b2c3d4e5f6a7b8c9d003";
    pub const LISBON_ID: &str = "65a1b2c3d4e5f6a7b8c9d101";
    pub const PORTO_ID: &str = "65a1b2c3d4e5f6a7b8c9d102";
    pub const PORTUGAL_ID: &str = "65a1b2c3d4e5f6a7b8c9d201";
    pub const MISSING_ID: &str = "ffffffffffffffffffffffff";

    pub async fn insert_hotel(pool: &SqlitePool, id: &str, name: &str, city: &str, country: &str) {
        sqlx::query(
            "INSERT INTO hotels (id, chain_name, hotel_name, addressline1, city, country, countryisocode, star_rating) \
             VALUES (?, 'Independent', ?, '1 Main Street', ?, ?, 'PT', '4')",
        )
        .bind(id)
        .bind(name)
        .bind(city)
        .bind(country)
        .execute(pool)
        .await
        .expect("insert hotel");
    }

    pub async fn insert_city(pool: &SqlitePool, id: &str, name: &str) {
        sqlx::query("INSERT INTO cities (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await
            .expect("insert city");
    }

    pub async fn insert_country(pool: &SqlitePool, id: &str, name: &str) {
        sqlx::query("INSERT INTO countries (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await
            .expect("insert country");
    }

    /// Three Portuguese hotels, two of them in Lisbon.
    pub async fn lisbon(pool: &SqlitePool) {
        insert_hotel(pool, GRAND_LISBON_ID, "Grand Lisbon", "Lisbon", "Portugal").await;
        insert_hotel(pool, TAGUS_ID, "Tagus Riverside", "Lisbon", "Portugal").await;
        insert_hotel(pool, PORTO_PALACE_ID, "Porto Palace", "Porto", "Portugal").await;
        insert_city(pool, LISBON_ID, "Lisbon").await;
        insert_city(pool, PORTO_ID, "Porto").await;
        insert_country(pool, PORTUGAL_ID, "Portugal").await;
    }
}

/// Store double that counts calls and can be told to fail or stall.
#[derive(Default)]
pub struct FakeStore {
    pub calls: AtomicUsize,
    pub fail: bool,
    pub delay: Option<Duration>,
    pub hotels: Vec<Hotel>,
    pub cities: Vec<City>,
    pub countries: Vec<Country>,
}

impl FakeStore {
    pub fn failing() -> Self {
        FakeStore {
            fail: true,
            ..Default::default()
        }
    }

    pub fn stalling(delay: Duration) -> Self {
        FakeStore {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl AccommodationStore for FakeStore {
    async fn search_hotels(&self, query: &SearchQuery) -> Result<Vec<HotelSummary>, StoreError> {
        self.enter().await?;
        Ok(self
            .hotels
            .iter()
            .take(query.limit)
            .map(|h| HotelSummary {
                id: h.id.clone(),
                hotel_name: h.hotel_name.clone(),
                city: h.city.clone(),
                country: h.country.clone(),
            })
            .collect())
    }

    async fn search_cities(&self, query: &SearchQuery) -> Result<Vec<City>, StoreError> {
        self.enter().await?;
        Ok(self.cities.iter().take(query.limit).cloned().collect())
    }

    async fn search_countries(&self, query: &SearchQuery) -> Result<Vec<Country>, StoreError> {
        self.enter().await?;
        Ok(self.countries.iter().take(query.limit).cloned().collect())
    }

    async fn hotel_by_id(&self, id: &str) -> Result<Option<Hotel>, StoreError> {
        self.enter().await?;
        Ok(self.hotels.iter().find(|h| h.id == id).cloned())
    }

    async fn city_by_id(&self, id: &str) -> Result<Option<City>, StoreError> {
        self.enter().await?;
        Ok(self.cities.iter().find(|c| c.id == id).cloned())
    }

    async fn country_by_id(&self, id: &str) -> Result<Option<Country>, StoreError> {
        self.enter().await?;
        Ok(self.countries.iter().find(|c| c.id == id).cloned())
    }

    async fn hotels_in_city(&self, city: &str) -> Result<Vec<Hotel>, StoreError> {
        self.enter().await?;
        Ok(self
            .hotels
            .iter()
            .filter(|h| h.city.eq_ignore_ascii_case(city))
            .cloned()
            .collect())
    }

    async fn hotels_in_country(&self, country: &str) -> Result<Vec<Hotel>, StoreError> {
        self.enter().await?;
        Ok(self
            .hotels
            .iter()
            .filter(|h| h.country.eq_ignore_ascii_case(country))
            .cloned()
            .collect())
    }
}
