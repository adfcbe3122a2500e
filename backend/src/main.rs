mod config;
mod error;
mod log_reader;
mod logging;
mod routes;

use actix_cors::Cors;
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use config::Config;
use routes::{AppState, configure_routes};
use shared::banner::APP_NAME;
use std::time::Instant;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env()?;

    let log_file = config.log_file();
    logging::init(&log_file)?;
    log::info!("Logging to {}", log_file.display());

    if let Ok(current_dir) = std::env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    if !config.index_file().exists() {
        log::warn!(
            "Frontend build not found at {}; pages will fail until `trunk build` has run",
            config.index_file().display()
        );
    }

    let state = web::Data::new(AppState {
        frontend_dir: config.frontend_dir.clone(),
        log_file,
        started_at: Instant::now(),
    });

    let bind_address = config.bind_address();
    log::info!("Starting {} on {}", APP_NAME, bind_address);

    let frontend_dir = config.frontend_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .wrap(NormalizePath::trim())
            .app_data(state.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
