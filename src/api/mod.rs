//! HTTP surface: one route, framework defaults for everything else.

pub mod health;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// `GET /api/health` is the only registered route. Any other path falls
/// through to the axum default 404, and a wrong method on the health path
/// gets the default 405 with an `Allow` header — neither is customized.
pub fn router() -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
}
