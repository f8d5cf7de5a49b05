use axum::{
    routing::get,
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

/// Build the HTTP router over an already initialized pool.
pub fn app(pool: SqlitePool) -> Router {
    // Browser front ends are served from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::home::api_info))
        .route("/health", get(routes::health::health_check))

        // Club endpoints
        .route(
            "/clubs",
            get(routes::clubs::get_clubs).post(routes::clubs::create_club),
        )
        .route(
            "/clubs/{id}",
            get(routes::clubs::get_club_by_id).delete(routes::clubs::delete_club),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
