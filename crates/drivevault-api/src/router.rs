//! Route definitions for the DriveVault HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(entry_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(search_routes())
        .merge(storage_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Entry listing and tree manipulation
fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(handlers::entry::list_entries))
        .route("/entries/{id}", get(handlers::entry::get_entry))
        .route("/entries/{id}/rename", put(handlers::entry::rename_entry))
        .route("/entries/{id}/move", put(handlers::entry::move_entry))
        .route("/entries/{id}/star", put(handlers::entry::toggle_star))
        .route("/entries/{id}", delete(handlers::entry::delete_entry))
}

/// Folder creation
fn folder_routes() -> Router<AppState> {
    Router::new().route("/folders", post(handlers::folder::create_folder))
}

/// File registration, upload, and download
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::file::register_file))
        .route("/files/upload", post(handlers::file::upload_file))
        .route("/files/{id}/download", get(handlers::file::download_file))
}

/// Search endpoints
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", get(handlers::search::search_entries))
}

/// Storage usage
fn storage_routes() -> Router<AppState> {
    Router::new().route("/storage", get(handlers::storage::get_usage))
}

/// Health check (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderName, HeaderValue, Method};
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    let headers: Vec<HeaderName> = cors_config
        .allowed_headers
        .iter()
        .filter_map(|h| h.parse().ok())
        .collect();
    cors = cors.allow_headers(headers);

    cors
}
