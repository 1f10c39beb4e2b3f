use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{City, Country, Hotel, HotelSummary};
use crate::search::fts;
use crate::search::query::SearchQuery;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read access to the three accommodation collections.
///
/// Handlers receive an `Arc<dyn AccommodationStore>` built at startup; tests
/// hand in fakes.
#[async_trait]
pub trait AccommodationStore: Send + Sync {
    async fn search_hotels(&self, query: &SearchQuery) -> Result<Vec<HotelSummary>, StoreError>;
    async fn search_cities(&self, query: &SearchQuery) -> Result<Vec<City>, StoreError>;
    async fn search_countries(&self, query: &SearchQuery) -> Result<Vec<Country>, StoreError>;

    async fn hotel_by_id(&self, id: &str) -> Result<Option<Hotel>, StoreError>;
    async fn city_by_id(&self, id: &str) -> Result<Option<City>, StoreError>;
    async fn country_by_id(&self, id: &str) -> Result<Option<Country>, StoreError>;

    /// Hotels whose denormalized `city` text equals `city` (ASCII case-insensitive).
    async fn hotels_in_city(&self, city: &str) -> Result<Vec<Hotel>, StoreError>;
    async fn hotels_in_country(&self, country: &str) -> Result<Vec<Hotel>, StoreError>;
}

const HOTEL_COLUMNS: &str = "id, chain_name, hotel_name, addressline1, addressline2, zipcode, \
                             city, state, country, countryisocode, star_rating";

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteStore { pool }
    }

    async fn search<T>(&self, query: &SearchQuery) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> + Send + Unpin,
    {
        let Some(plan) = fts::plan(query) else {
            return Ok(Vec::new());
        };

        log::debug!(
            "searching {} for {:?}",
            query.collection.name(),
            plan.match_expr
        );

        let rows = sqlx::query_as::<_, T>(&plan.sql)
            .bind(&plan.match_expr)
            .bind(plan.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl AccommodationStore for SqliteStore {
    async fn search_hotels(&self, query: &SearchQuery) -> Result<Vec<HotelSummary>, StoreError> {
        self.search(query).await
    }

    async fn search_cities(&self, query: &SearchQuery) -> Result<Vec<City>, StoreError> {
        self.search(query).await
    }

    async fn search_countries(&self, query: &SearchQuery) -> Result<Vec<Country>, StoreError> {
        self.search(query).await
    }

    async fn hotel_by_id(&self, id: &str) -> Result<Option<Hotel>, StoreError> {
        let sql = format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE id = ?");
        let hotel = sqlx::query_as::<_, Hotel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(hotel)
    }

    async fn city_by_id(&self, id: &str) -> Result<Option<City>, StoreError> {
        let city = sqlx::query_as::<_, City>("SELECT id, name FROM cities WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(city)
    }

    async fn country_by_id(&self, id: &str) -> Result<Option<Country>, StoreError> {
        let country = sqlx::query_as::<_, Country>("SELECT id, name FROM countries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(country)
    }

    async fn hotels_in_city(&self, city: &str) -> Result<Vec<Hotel>, StoreError> {
        let sql =
            format!("SELECT {HOTEL_COLUMNS} FROM hotels WHERE city = ? COLLATE NOCASE ORDER BY seq");
        let hotels = sqlx::query_as::<_, Hotel>(&sql)
            .bind(city)
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }

    async fn hotels_in_country(&self, country: &str) -> Result<Vec<Hotel>, StoreError> {
        let sql = format!(
            "SELECT {HOTEL_COLUMNS} FROM hotels WHERE country = ? COLLATE NOCASE ORDER BY seq"
        );
        let hotels = sqlx::query_as::<_, Hotel>(&sql)
            .bind(country)
            .fetch_all(&self.pool)
            .await?;
        Ok(hotels)
    }
}
