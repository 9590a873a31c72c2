mod search;
mod trending;

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use vor_catalog::Catalog;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// `limit` used by `/search` when the parameter is absent or unparseable.
    pub search_default_limit: usize,
}

/// Error body returned by every endpoint: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    code: &'static str,
    pub error: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    products: usize,
}

impl ApiError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            error: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }

    /// Generic 500. Details belong in the log, not in `message`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.code {
            "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Parse `limit`, falling back to `default` when absent or not a
/// non-negative integer.
pub(super) fn normalize_limit(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "request handler panicked");
    ApiError::internal("internal server error").into_response()
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search_products))
        .route("/trending", get(trending::trending_products))
        .route("/health", get(health))
}

fn with_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(request_id))
            .layer(TraceLayer::new_for_http())
            .layer(build_cors())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

pub fn build_app(state: AppState) -> Router {
    let app = Router::new()
        .merge(routes())
        .nest("/api", routes())
        .with_state(state);
    with_layers(app)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthData {
        status: "ok",
        products: state.catalog.len(),
    })
}
