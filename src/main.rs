use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use std::io;
use std::sync::Arc;

use hotel_search_api::config::Config;
use hotel_search_api::db::{self, SqliteStore};
use hotel_search_api::handlers;
use hotel_search_api::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("Connecting to database...");
    let pool = db::connect(&config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e))?;

    log::info!("Running migrations...");
    db::migrate(&pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let state = web::Data::new(AppState::new(
        Arc::new(SqliteStore::new(pool)),
        config.query_timeout,
    ));

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
