use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use roman_model::{RomanInput, RomanNumeral};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::ApiError,
    handler::ApiHandler,
    metrics::{MetricsBackend, NoOpMetrics, RequestOutcome},
};

/// HTTP API service builder.
pub struct HttpApi<H> {
    handler: Arc<H>,
    metrics: Arc<dyn MetricsBackend>,
}

impl<H> HttpApi<H>
where
    H: ApiHandler,
{
    /// Create new HTTP API with the given handler and no metrics.
    pub fn new(handler: Arc<H>) -> Self {
        Self {
            handler,
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Record every `/roman` request into `metrics`.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsBackend>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /roman?query=N - Convert N to a Roman numeral
    /// - GET /healthz - Liveness probe
    ///
    /// Any other method on `/roman` gets `405 unsupported httpMethod`.
    pub fn router(self) -> Router {
        let state = ApiState {
            handler: self.handler,
            metrics: self.metrics,
        };
        Router::new()
            .route("/roman", get(roman::<H>).fallback(unsupported_method::<H>))
            .route("/healthz", get(healthz))
            .with_state(state)
    }
}

struct ApiState<H> {
    handler: Arc<H>,
    metrics: Arc<dyn MetricsBackend>,
}

impl<H> Clone for ApiState<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct RomanParams {
    query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RomanResponse {
    output: RomanNumeral,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /roman?query=N
async fn roman<H>(
    State(state): State<ApiState<H>>,
    params: Result<Query<RomanParams>, QueryRejection>,
) -> Result<Json<RomanResponse>, ApiError>
where
    H: ApiHandler,
{
    let started = Instant::now();
    let result = convert(state.handler.as_ref(), params).await;

    let outcome = match &result {
        Ok(_) => RequestOutcome::Ok,
        Err(e) => RequestOutcome::from(e),
    };
    state.metrics.record_request(outcome, started.elapsed());

    result.map(|output| Json(RomanResponse { output }))
}

async fn convert<H>(
    handler: &H,
    params: Result<Query<RomanParams>, QueryRejection>,
) -> Result<RomanNumeral, ApiError>
where
    H: ApiHandler,
{
    let Query(params) = params.map_err(|e| ApiError::InvalidInput(e.body_text()))?;
    let raw = params.query.unwrap_or_default();
    let input: RomanInput = raw.parse()?;

    debug!(input = input.value(), "converting to roman");
    handler.to_roman(input).await
}

/// Any non-GET method on /roman
async fn unsupported_method<H>(State(state): State<ApiState<H>>) -> ApiError
where
    H: ApiHandler,
{
    state
        .metrics
        .record_request(RequestOutcome::MethodNotAllowed, Duration::ZERO);
    ApiError::MethodNotAllowed
}

/// GET /healthz
async fn healthz() -> &'static str {
    "ok"
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use crate::{adapter::ConverterAdapter, config::ApiConfig};

    #[derive(Default)]
    struct RecordingMetrics {
        seen: Mutex<Vec<RequestOutcome>>,
    }

    impl MetricsBackend for RecordingMetrics {
        fn record_request(&self, outcome: RequestOutcome, _elapsed: Duration) {
            self.seen.lock().unwrap().push(outcome);
        }
    }

    fn router() -> Router {
        HttpApi::new(Arc::new(ConverterAdapter::default())).router()
    }

    async fn call(router: Router, method: Method, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn roman_handler_table() {
        let cases = [
            (
                "unsupported httpMethod",
                Method::POST,
                "/roman?query=1",
                StatusCode::METHOD_NOT_ALLOWED,
                "unsupported httpMethod",
            ),
            (
                "invalid input",
                Method::GET,
                "/roman?query=asd",
                StatusCode::BAD_REQUEST,
                "invalid input",
            ),
            (
                "missing query",
                Method::GET,
                "/roman",
                StatusCode::BAD_REQUEST,
                "invalid input",
            ),
            (
                "correct query param",
                Method::GET,
                "/roman?query=1",
                StatusCode::OK,
                r#"{"output":"I"}"#,
            ),
            (
                "composite",
                Method::GET,
                "/roman?query=1994",
                StatusCode::OK,
                r#"{"output":"MCMXCIV"}"#,
            ),
            (
                "zero",
                Method::GET,
                "/roman?query=0",
                StatusCode::OK,
                r#"{"output":""}"#,
            ),
            (
                "out of range",
                Method::GET,
                "/roman?query=100001",
                StatusCode::BAD_REQUEST,
                "input out of range",
            ),
        ];

        for (name, method, uri, want_status, want_body) in cases {
            let (status, body) = call(router(), method, uri).await;
            assert_eq!(status, want_status, "{name}");
            assert_eq!(body.trim(), want_body, "{name}");
        }
    }

    #[tokio::test]
    async fn success_is_json() {
        let request = Request::builder()
            .uri("/roman?query=3999")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["output"], "MMMCMXCIX");
    }

    #[tokio::test]
    async fn method_not_allowed_advertises_get() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/roman?query=1")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET, HEAD");
    }

    #[tokio::test]
    async fn configured_max_is_enforced() {
        let api = HttpApi::new(Arc::new(ConverterAdapter::new(ApiConfig { max_input: 10 })));
        let (status, body) = call(api.router(), Method::GET, "/roman?query=11").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "input out of range");
    }

    #[tokio::test]
    async fn healthz_answers_ok() {
        let (status, body) = call(router(), Method::GET, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn outcomes_are_recorded() {
        let metrics = Arc::new(RecordingMetrics::default());
        let api = HttpApi::new(Arc::new(ConverterAdapter::default()))
            .with_metrics(Arc::clone(&metrics) as Arc<dyn MetricsBackend>);
        let router = api.router();

        call(router.clone(), Method::GET, "/roman?query=5").await;
        call(router.clone(), Method::GET, "/roman?query=v").await;
        call(router, Method::PUT, "/roman?query=5").await;

        assert_eq!(
            *metrics.seen.lock().unwrap(),
            vec![
                RequestOutcome::Ok,
                RequestOutcome::InvalidInput,
                RequestOutcome::MethodNotAllowed,
            ]
        );
    }
}
