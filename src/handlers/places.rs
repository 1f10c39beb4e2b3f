use crate::detail;
use crate::error::ApiError;
use crate::models::id::IdPath;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

pub async fn get_city_by_id(
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, ApiError> {
    path.validate()?;

    match state.deadline(detail::city(state.store(), &path.normalized())).await? {
        Some(city) => Ok(HttpResponse::Ok().json(city)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

pub async fn get_country_by_id(
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, ApiError> {
    path.validate()?;

    match state.deadline(detail::country(state.store(), &path.normalized())).await? {
        Some(country) => Ok(HttpResponse::Ok().json(country)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}
