//! State behind a type-ahead search box.
//!
//! Every keystroke calls [`SearchBox::set_term`]. Terms shorter than
//! [`MIN_TERM_LEN`] clear the results without touching the network; longer
//! ones are fetched after the input has been quiet for the debounce
//! interval. A new term cancels whatever the previous one was doing, so only
//! the latest term's response ever lands in the state.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::api::AccommodationSource;
use crate::models::{City, Country, HotelSummary};

pub const MIN_TERM_LEN: usize = 3;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub term: String,
    pub hotels: Vec<HotelSummary>,
    pub cities: Vec<City>,
    pub countries: Vec<Country>,
    pub loading: bool,
    /// Whether the results dropdown is open.
    pub show_results: bool,
}

impl SearchState {
    fn clear_results(&mut self) {
        self.hotels.clear();
        self.cities.clear();
        self.countries.clear();
        self.show_results = false;
    }
}

struct Pending {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

pub struct SearchBox<S: AccommodationSource + 'static> {
    source: Arc<S>,
    state: Arc<Mutex<SearchState>>,
    debounce: Duration,
    pending: Option<Pending>,
}

impl<S: AccommodationSource + 'static> SearchBox<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self::with_debounce(source, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(source: Arc<S>, debounce: Duration) -> Self {
        SearchBox {
            source,
            state: Arc::new(Mutex::new(SearchState::default())),
            debounce,
            pending: None,
        }
    }

    pub fn state(&self) -> SearchState {
        lock(&self.state).clone()
    }

    /// Must be called from within a tokio runtime.
    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();

        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
        }

        {
            let mut state = lock(&self.state);
            state.term = term.clone();
            if term.chars().count() < MIN_TERM_LEN {
                state.clear_results();
                state.loading = false;
                return;
            }
        }

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_search(
            self.source.clone(),
            self.state.clone(),
            term,
            self.debounce,
            cancel.clone(),
        ));
        self.pending = Some(Pending { cancel, task });
    }

    /// Empties the box, like pressing its clear button.
    pub fn clear(&mut self) {
        self.set_term("");
    }

    /// Waits until the latest search, if any, has been applied or dropped.
    pub async fn settled(&mut self) {
        if let Some(pending) = self.pending.take() {
            if let Err(err) = pending.task.await {
                log::error!("search task failed: {err}");
            }
        }
    }
}

impl<S: AccommodationSource + 'static> Drop for SearchBox<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
        }
    }
}

async fn run_search<S: AccommodationSource>(
    source: Arc<S>,
    state: Arc<Mutex<SearchState>>,
    term: String,
    debounce: Duration,
    cancel: CancellationToken,
) {
    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(debounce) => {}
    }

    {
        let mut state = lock(&state);
        if cancel.is_cancelled() {
            return;
        }
        state.loading = true;
    }

    let result = source.search(&term, &cancel).await;

    let mut state = lock(&state);
    if cancel.is_cancelled() {
        log::debug!("dropping superseded results for {term:?}");
        return;
    }
    state.loading = false;
    match result {
        Ok(result) => {
            state.hotels = result.hotels;
            state.cities = result.cities;
            state.countries = result.countries;
            state.show_results = true;
        }
        Err(err) if err.is_cancelled() => {}
        Err(err) => log::error!("search for {term:?} failed: {err}"),
    }
}

fn lock(state: &Mutex<SearchState>) -> MutexGuard<'_, SearchState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
