use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::db::{AccommodationStore, StoreError};
use crate::error::ApiError;

/// Shared by all workers: the store handle and the per-request deadline.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccommodationStore>,
    pub query_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn AccommodationStore>, query_timeout: Duration) -> Self {
        AppState {
            store,
            query_timeout,
        }
    }

    pub fn store(&self) -> &dyn AccommodationStore {
        self.store.as_ref()
    }

    /// Awaits a store operation, giving up after `query_timeout`.
    pub async fn deadline<T, F>(&self, operation: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.query_timeout, operation).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ApiError::Timeout(self.query_timeout)),
        }
    }
}
