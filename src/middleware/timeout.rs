use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use storefront_core::AppError;
use tracing::warn;

/// Middleware that bounds how long a request may run.
///
/// The limit is the router-level state given to `from_fn_with_state`. A
/// request that exceeds it is dropped and answered with [`AppError::Timeout`].
pub async fn request_timeout(
    State(limit): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tokio::time::timeout(limit, next.run(req))
        .await
        .map_err(|_| {
            warn!(method = %method, path = %path, limit_ms = limit.as_millis(), "Request timed out");
            AppError::Timeout
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(limit: Duration) -> Router {
        Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .route("/fast", get(|| async { "done" }))
            .layer(middleware::from_fn_with_state(limit, request_timeout))
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn slow_handler_gets_json_timeout() {
        let (status, body) = get_path(app(Duration::from_millis(50)), "/slow").await;

        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "Request timed out" }));
    }

    #[tokio::test]
    async fn fast_handler_is_untouched() {
        let (status, body) = get_path(app(Duration::from_millis(500)), "/fast").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"done");
    }
}
