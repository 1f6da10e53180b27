//! Health-check endpoint used by monitoring and orchestration probes.

use axum::Json;
use serde::Serialize;

/// The fixed health payload.
///
/// `demo` identifies the deployment this service stands in for; `status` is
/// always `"ok"` — a process able to answer at all is, by definition, alive.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthPayload {
    status: &'static str,
    demo: &'static str,
}

/// Single immutable instance of the payload, never rebuilt per request.
pub const HEALTH: HealthPayload = HealthPayload {
    status: "ok",
    demo: "vneil-genesis-python",
};

/// `GET /api/health` — always returns 200 OK with the fixed payload.
///
/// Interprets nothing from the request (no query parameters, headers, or
/// body) and performs no fallible work, so it never blocks and never errors.
pub async fn health() -> Json<HealthPayload> {
    Json(HEALTH)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn get_health() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok_with_fixed_payload() {
        let app = crate::api::router();

        let resp = app.oneshot(get_health()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("application/json"));

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["demo"], "vneil-genesis-python");
    }

    #[tokio::test]
    async fn health_ignores_request_headers_and_body() {
        let app = crate::api::router();

        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .header("x-arbitrary", "ignored")
            .header(header::ACCEPT, "text/plain")
            .body(Body::from("unexpected body"))
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["demo"], "vneil-genesis-python");
    }

    #[tokio::test]
    async fn repeated_calls_return_identical_output() {
        let app = crate::api::router();

        let first = app.clone().oneshot(get_health()).await.unwrap();
        let second = app.oneshot(get_health()).await.unwrap();

        let first_bytes = to_bytes(first.into_body(), usize::MAX).await.unwrap();
        let second_bytes = to_bytes(second.into_body(), usize::MAX).await.unwrap();
        assert_eq!(first_bytes, second_bytes);
    }

    #[tokio::test]
    async fn wrong_method_gets_framework_default_405() {
        let app = crate::api::router();

        let req = Request::builder()
            .method("POST")
            .uri("/api/health")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_path_gets_framework_default_404() {
        let app = crate::api::router();

        let req = Request::builder()
            .method("GET")
            .uri("/api/nope")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
