//! Typed HTTP client for the accommodation search API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::models::{CityWithHotels, CountryWithHotels, Hotel, SearchResult};

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("404, Not found")]
    NotFound,

    #[error("500, internal server error")]
    InternalServerError,

    #[error("{0}")]
    Status(StatusCode),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The caller gave up on the request. Not a failure.
    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => FetchError::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => FetchError::InternalServerError,
            other => FetchError::Status(other),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Anything that can answer a search term, so UI state can be driven by a
/// fake in tests.
#[async_trait]
pub trait AccommodationSource: Send + Sync {
    async fn search(
        &self,
        term: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchResult, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Uses `API_URL`, falling back to the local development server.
    pub fn from_env() -> Result<Self, FetchError> {
        let base_url = std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub async fn fetch_accommodations(
        &self,
        term: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchResult, FetchError> {
        let request = self
            .http_client
            .get(format!("{}/search", self.base_url))
            .query(&[("term", term)]);
        self.send(request, cancel).await
    }

    pub async fn fetch_hotel(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<Hotel, FetchError> {
        self.get_json(&format!("/hotels/{id}"), cancel).await
    }

    pub async fn fetch_city(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<CityWithHotels, FetchError> {
        self.get_json(&format!("/cities/{id}"), cancel).await
    }

    pub async fn fetch_country(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<CountryWithHotels, FetchError> {
        self.get_json(&format!("/countries/{id}"), cancel).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<T, FetchError> {
        let request = self.http_client.get(format!("{}{}", self.base_url, path));
        self.send(request, cancel).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        cancel: &CancellationToken,
    ) -> Result<T, FetchError> {
        let exchange = async {
            let response = request.send().await.map_err(FetchError::Network)?;
            let status = response.status();
            if !status.is_success() {
                log::debug!("{} answered {}", response.url(), status);
                return Err(FetchError::from_status(status));
            }
            response.json::<T>().await.map_err(FetchError::Decode)
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = exchange => result,
        }
    }
}

#[async_trait]
impl AccommodationSource for ApiClient {
    async fn search(
        &self,
        term: &str,
        cancel: &CancellationToken,
    ) -> Result<SearchResult, FetchError> {
        self.fetch_accommodations(term, cancel).await
    }
}
