use crate::config::Config;
use crate::telemetry::STARTUP_TARGET;
use anyhow::Context;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::{body::Body, http::Request, Router};
use std::net::TcpListener;
use tower::ServiceBuilder;
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::info_span;

/// Defines a common error type to use for all request handlers
mod error;

/// Contains all the routes of the application
mod routes;

pub use error::Error;

use tower_http::trace::TraceLayer;

/// Builds the application: both JSON routes, the `404` fallback and request tracing.
pub fn app() -> Router {
    Router::new()
        .merge(routes::router())
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new().layer(RequestIdLayer).layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "unknown".into());

                    info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri()
                    )
                }),
            ),
        )
}

/// Binds the configured address and serves until the process ends.
///
/// An occupied port is reported as an error, there is no retry.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr();

    let listener =
        TcpListener::bind(addr).with_context(|| format!("error binding listener on {addr}"))?;

    serve_listener(listener).await
}

/// Serves the application on an already bound listener.
pub async fn serve_listener(listener: TcpListener) -> anyhow::Result<()> {
    let addr = listener
        .local_addr()
        .context("error reading listener address")?;

    let server = axum::Server::from_tcp(listener).context("error registering listener")?;

    tracing::info!(target: STARTUP_TARGET, "API escuchando en http://{addr}");

    server
        .serve(app().into_make_service())
        .await
        .context("error running HTTP server")
}

async fn not_found_handler(_: Uri) -> impl IntoResponse {
    Error::NotFound
}
