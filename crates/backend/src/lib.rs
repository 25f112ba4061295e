pub mod domain;
pub mod handlers;
pub mod shared;

use axum::http::{header, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Shared application state. The store handle is passed in explicitly so
/// tests can run the whole router against an in-memory database.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/recipes",
            get(handlers::recipes::list).post(handlers::recipes::create),
        )
        .route(
            "/api/recipes/:id",
            get(handlers::recipes::get_by_id)
                .put(handlers::recipes::update)
                .delete(handlers::recipes::delete),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(shared::request_log::request_logger))
        .layer(cors)
        .with_state(state)
}
