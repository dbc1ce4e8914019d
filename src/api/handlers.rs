//! API Handlers
//!
//! HTTP request handlers for each bank bridge endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::BankStore;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CacheQuery, CacheView, HealthResponse, RemoteQuery, RemoteView, MSG_NO_RESULTS,
};
use crate::remote::{load_sources, RemoteAggregator};

/// Application state shared across all handlers.
///
/// Both members are immutable after construction, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Preloaded bank cache
    pub banks: Arc<BankStore>,
    /// Remote source fan-out
    pub remote: Arc<RemoteAggregator>,
}

impl AppState {
    /// Creates a new AppState from an already-built cache and aggregator.
    pub fn new(banks: BankStore, remote: RemoteAggregator) -> Self {
        Self {
            banks: Arc::new(banks),
            remote: Arc::new(remote),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Loads the cache dataset and the remote source map from disk.
    pub fn from_config(config: &Config) -> Result<Self> {
        let banks = BankStore::load(&config.banks_v1_path, config.max_entries)?;
        let sources = load_sources(&config.banks_v2_path)?;
        let remote =
            RemoteAggregator::new(sources, config.remote_timeout(), config.remote_concurrency)?;
        Ok(Self::new(banks, remote))
    }
}

/// Handler for GET /v1/banks/all
///
/// Filters the preloaded cache, paginates, and renders the cache view.
pub async fn cache_banks_handler(
    State(state): State<AppState>,
    Query(query): Query<CacheQuery>,
) -> Result<Json<Vec<CacheView>>> {
    let page = query.page_request()?;
    let filter = query.filter();

    let matches = filter.apply(state.banks.iter().collect::<Vec<_>>());
    let banks = page.apply(matches);
    debug!("Cache lookup returned {} banks", banks.len());

    Ok(Json(banks.into_iter().map(CacheView::from).collect()))
}

/// Handler for GET /v2/banks/all
///
/// Fetches every remote source, filters, paginates, and renders the remote
/// view. An empty result is answered with 204 and a fixed message.
pub async fn remote_banks_handler(
    State(state): State<AppState>,
    Query(query): Query<RemoteQuery>,
) -> Result<Response> {
    let page = query.page_request()?;
    let filter = query.filter();

    let fetched = state.remote.fetch_all().await?;
    let banks = page.apply(filter.apply(fetched));

    if banks.is_empty() {
        debug!("Remote lookup returned no banks");
        return Ok((
            StatusCode::NO_CONTENT,
            [(header::CONTENT_TYPE, "application/json")],
            MSG_NO_RESULTS,
        )
            .into_response());
    }

    let views: Vec<RemoteView> = banks.into_iter().map(RemoteView::from).collect();
    Ok(Json(views).into_response())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
