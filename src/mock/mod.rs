//! Mock Remotes
//!
//! Local stand-in for the remote bank endpoints: serves one bank record per
//! path so the remote endpoint can run without external services.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::error::{BankError, Result};
use crate::models::{BankRecord, MessageResponse};
use crate::remote::RemoteSource;

// == Mock Remotes ==
/// Bank records keyed by URL path segment, in document order.
#[derive(Debug, Clone, Default)]
pub struct MockRemotes {
    ids: Vec<String>,
    banks: HashMap<String, BankRecord>,
}

impl MockRemotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bank` under `/{id}`, replacing any previous record.
    pub fn insert(&mut self, id: impl Into<String>, bank: BankRecord) {
        let id = id.into();
        if self.banks.insert(id.clone(), bank).is_none() {
            self.ids.push(id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&BankRecord> {
        self.banks.get(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Reads a `{"<id>": BankRecord}` document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let remotes = Self::from_json_str(&json)?;
        info!("Loaded {} mock banks from {}", remotes.len(), path.display());
        Ok(remotes)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)?;
        let mut remotes = Self::new();
        for (id, value) in map {
            remotes.insert(id, serde_json::from_value(value)?);
        }
        Ok(remotes)
    }

    /// Source map pointing at this server, one source per registered id.
    pub fn sources(&self, base_url: &str) -> Vec<RemoteSource> {
        let base_url = base_url.trim_end_matches('/');
        self.ids
            .iter()
            .map(|id| RemoteSource::new(id.clone(), format!("{}/{}", base_url, id)))
            .collect()
    }
}

/// Creates the mock remotes router: `GET /:id` returns the registered bank.
pub fn create_mock_router(remotes: MockRemotes) -> Router {
    Router::new()
        .route("/:id", get(mock_bank_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(remotes))
}

async fn mock_bank_handler(
    State(remotes): State<Arc<MockRemotes>>,
    UrlPath(id): UrlPath<String>,
) -> Response {
    match remotes.get(&id) {
        Some(bank) => Json(bank.clone()).into_response(),
        None => {
            debug!("Mock bank {} not found", id);
            (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("Unknown bank.")),
            )
                .into_response()
        }
    }
}
