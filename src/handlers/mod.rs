use actix_web::web;

pub mod hotels;
pub mod places;
pub mod search;


pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search", web::get().to(search::search_accommodations))
        .service(
            web::scope("/hotels").route("/{id}", web::get().to(hotels::get_hotel_by_id)),
        )
        .service(
            web::scope("/cities").route("/{id}", web::get().to(places::get_city_by_id)),
        )
        .service(
            web::scope("/countries").route("/{id}", web::get().to(places::get_country_by_id)),
        );
}
