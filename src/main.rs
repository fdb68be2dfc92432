mod constants;
mod domain;
mod routes;
mod services;

use std::sync::Arc;

use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::services::db;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,catalog_api=debug")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://catalog.db".to_string());
    let pool = db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let state = Arc::new(AppState { db: pool });

    let app = routes::build_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", addr, e));

    info!("Catalog API listening on http://{}", addr);
    info!("Interactive documentation at http://{}/docs", addr);
    axum::serve(listener, app).await.expect("Server failed");
}
