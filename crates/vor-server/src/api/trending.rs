use axum::{extract::State, Extension, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use vor_core::ProductWithAggregates;

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TrendingResponse {
    products: Vec<ProductWithAggregates>,
    total: usize,
    #[serde(serialize_with = "iso_millis")]
    last_updated: DateTime<Utc>,
}

/// `2024-01-15T08:30:00.000Z`, the ISO-8601 shape browsers produce.
fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub(super) async fn trending_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<TrendingResponse> {
    let products: Vec<ProductWithAggregates> =
        state.catalog.trending().into_iter().cloned().collect();

    tracing::debug!(
        request_id = %req_id.0,
        count = products.len(),
        "trending served"
    );

    Json(TrendingResponse {
        total: products.len(),
        products,
        last_updated: Utc::now(),
    })
}
