use axum::routing::get;
use axum::{Json, Router};
use models::Health;

pub fn router() -> Router {
    Router::new().route("/health", get(health).fallback(crate::http::not_found_handler))
}

async fn health() -> Json<Health> {
    Json(Health::ok())
}
