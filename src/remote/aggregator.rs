//! Remote Aggregator
//!
//! Fetches one bank record from each configured source, with a bounded
//! number of requests in flight and a timeout on each.

use std::time::Duration;

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use super::RemoteSource;
use crate::error::{BankError, Result};
use crate::models::BankRecord;

/// Statuses whose body is read as a bank record; anything else is skipped.
const ACCEPTED_STATUSES: [StatusCode; 3] =
    [StatusCode::OK, StatusCode::CREATED, StatusCode::ACCEPTED];

// == Remote Aggregator ==
/// Fans out GET requests to every remote source.
#[derive(Debug, Clone)]
pub struct RemoteAggregator {
    client: Client,
    sources: Vec<RemoteSource>,
    concurrency: usize,
}

impl RemoteAggregator {
    // == Constructor ==
    /// Creates an aggregator over `sources`.
    ///
    /// # Arguments
    /// * `sources` - Endpoints in the order results should be returned
    /// * `timeout` - Limit applied to each individual source request
    /// * `concurrency` - Maximum requests in flight (at least 1)
    pub fn new(sources: Vec<RemoteSource>, timeout: Duration, concurrency: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BankError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            sources,
            concurrency: concurrency.max(1),
        })
    }

    pub fn sources(&self) -> &[RemoteSource] {
        &self.sources
    }

    // == Fetch All ==
    /// Fetches every source and returns the records in source order.
    ///
    /// Sources that answer with a non-accepted status contribute nothing.
    /// The first network or decode error aborts the whole fan-out and any
    /// requests still in flight are dropped.
    pub async fn fetch_all(&self) -> Result<Vec<BankRecord>> {
        let banks: Vec<BankRecord> = stream::iter(self.sources.clone())
            .map(|source| self.fetch_one(source))
            .buffered(self.concurrency)
            .try_filter_map(|bank| async move { Ok::<_, BankError>(bank) })
            .try_collect()
            .await?;

        info!(
            "Fetched {} banks from {} remote sources",
            banks.len(),
            self.sources.len()
        );
        Ok(banks)
    }

    // == Fetch One ==
    async fn fetch_one(&self, source: RemoteSource) -> Result<Option<BankRecord>> {
        let fetch_error = |e: reqwest::Error| BankError::RemoteFetch {
            url: source.url.clone(),
            source: e,
        };

        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !ACCEPTED_STATUSES.contains(&status) {
            debug!("Skipping {} ({}): status {}", source.name, source.url, status);
            return Ok(None);
        }

        let body = response.bytes().await.map_err(fetch_error)?;
        let bank = serde_json::from_slice(&body).map_err(|e| BankError::RemoteDecode {
            url: source.url.clone(),
            source: e,
        })?;

        Ok(Some(bank))
    }
}
