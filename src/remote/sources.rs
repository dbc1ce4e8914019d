//! Remote source map
//!
//! Loads the `{"<bank name>": "<url>"}` document that lists the remote
//! bank endpoints, keeping document order.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{BankError, Result};

/// A named remote endpoint serving a single bank record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    pub name: String,
    pub url: String,
}

impl RemoteSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Reads the source map from disk.
pub fn load_sources(path: impl AsRef<Path>) -> Result<Vec<RemoteSource>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let sources = parse_sources(&json)?;
    info!("Loaded {} remote sources from {}", sources.len(), path.display());
    Ok(sources)
}

/// Parses a source map document. Entries keep their document order.
pub fn parse_sources(json: &str) -> Result<Vec<RemoteSource>> {
    let map: Map<String, Value> = serde_json::from_str(json)?;

    map.into_iter()
        .map(|(name, url)| match url {
            Value::String(url) => Ok(RemoteSource::new(name, url)),
            other => Err(BankError::InvalidSource(format!(
                "URL for '{}' must be a string, got {}",
                name, other
            ))),
        })
        .collect()
}
