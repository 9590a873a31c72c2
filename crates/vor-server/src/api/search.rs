use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};
use serde::Serialize;
use vor_core::ProductWithAggregates;

use crate::middleware::RequestId;

use super::{normalize_limit, ApiError, AppState};

#[derive(Debug, Default)]
pub(super) struct SearchQuery {
    pub q: Option<String>,
    /// Kept as text so an unparseable value falls back to the default
    /// instead of rejecting the request.
    pub limit: Option<String>,
}

impl SearchQuery {
    /// The first occurrence of a repeated parameter wins.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" if params.q.is_none() => params.q = Some(value),
                "limit" if params.limit.is_none() => params.limit = Some(value),
                _ => {}
            }
        }
        params
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    products: Vec<ProductWithAggregates>,
    total: usize,
    query: String,
}

pub(super) async fn search_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    raw: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(pairs) = raw.map_err(|rejection| {
        tracing::debug!(
            request_id = %req_id.0,
            error = %rejection,
            "search rejected: bad query string"
        );
        ApiError::bad_request("Malformed query string")
    })?;
    let params = SearchQuery::from_pairs(pairs);
    let Some(query) = params.q.filter(|q| !q.is_empty()) else {
        tracing::debug!(request_id = %req_id.0, "search rejected: missing query");
        return Err(ApiError::bad_request("Query parameter is required"));
    };
    let limit = normalize_limit(params.limit.as_deref(), state.search_default_limit);

    let products: Vec<ProductWithAggregates> = state
        .catalog
        .search(&query)
        .into_iter()
        .take(limit)
        .cloned()
        .collect();

    tracing::debug!(
        request_id = %req_id.0,
        query = %query,
        limit,
        matches = products.len(),
        "search served"
    );

    Ok(Json(SearchResponse {
        total: products.len(),
        products,
        query,
    }))
}
