use crate::error::AppError;
use crate::log_reader;
use actix_files::{Files, NamedFile};
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use log::{info, warn};
use shared::banner::APP_NAME;
use shared::{HealthResponse, Page};
use std::path::PathBuf;
use std::time::Instant;
use strum::IntoEnumIterator;

pub struct AppState {
    pub frontend_dir: PathBuf,
    pub log_file: PathBuf,
    pub started_at: Instant,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    cfg.service(web::resource("/api/health").route(web::get().to(health_check)))
        .service(
            web::resource("/api/logs")
                .route(web::get().to(get_logs))
                .route(web::delete().to(delete_logs)),
        );

    for page in Page::iter() {
        cfg.service(web::resource(page.route()).route(web::get().to(serve_page)));
    }

    cfg.service(Files::new("/static", frontend_dir));
}

async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let body = HealthResponse {
        status: "ok".into(),
        service: APP_NAME.into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    };

    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"))
        .insert_header((header::PRAGMA, "no-cache"))
        .json(body)
}

async fn get_logs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let path = state.log_file.clone();
    let entries = web::block(move || log_reader::read_entries(&path)).await??;
    Ok(HttpResponse::Ok().json(entries))
}

async fn delete_logs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let path = state.log_file.clone();
    web::block(move || log_reader::clear(&path)).await??;
    info!("Log file cleared");
    Ok(HttpResponse::NoContent().finish())
}

/// Every page gets the SPA shell; the frontend routes on the location path.
async fn serve_page(state: web::Data<AppState>) -> Result<NamedFile, AppError> {
    let index = state.frontend_dir.join("index.html");
    NamedFile::open_async(&index).await.map_err(|e| {
        warn!("Failed to open {}: {}", index.display(), e);
        AppError::PageNotBuilt(index)
    })
}
