use crate::detail;
use crate::error::ApiError;
use crate::models::id::IdPath;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use validator::Validate;

pub async fn get_hotel_by_id(
    state: web::Data<AppState>,
    path: web::Path<IdPath>,
) -> Result<HttpResponse, ApiError> {
    path.validate()?;

    let hotel = state.deadline(detail::hotel(state.store(), &path.normalized())).await?;

    Ok(match hotel {
        Some(hotel) => HttpResponse::Ok().json(hotel),
        None => HttpResponse::NotFound().finish(),
    })
}
