use axum::routing::get;
use axum::{Json, Router};
use models::Message;

pub fn router() -> Router {
    Router::new().route("/", get(greeting).fallback(crate::http::not_found_handler))
}

async fn greeting() -> Json<Message> {
    Json(Message::greeting())
}
