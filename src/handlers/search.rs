use crate::error::ApiError;
use crate::search;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SearchParams {
    #[validate(length(min = 1))]
    pub term: String,
}

pub async fn search_accommodations(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, ApiError> {
    params.validate()?;

    let result = state
        .deadline(search::search(state.store(), &params.term))
        .await?;

    log::debug!(
        "term {:?}: {} hotels, {} cities, {} countries",
        params.term,
        result.hotels.len(),
        result.cities.len(),
        result.countries.len()
    );

    Ok(HttpResponse::Ok().json(result))
}
