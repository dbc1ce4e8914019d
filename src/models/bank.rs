//! Bank record entity
//!
//! Shared by the cache dataset, the remote sources and both response views.

use serde::{Deserialize, Serialize};

/// A single bank as stored in the cache or returned by a remote source.
///
/// `auth` is only populated by remote sources and `products` only by the
/// cache dataset, but either may appear in any input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankRecord {
    /// Bank Identifier Code, used as the cache key
    pub bic: String,
    /// Human-readable bank name
    pub name: String,
    /// Two-letter country code
    pub country_code: String,
    /// Authentication method tag (e.g. "oauth", "open-id")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    /// Product tags offered by the bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
}

impl BankRecord {
    /// Creates a record with the required fields and no auth or products.
    pub fn new(
        bic: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            bic: bic.into(),
            name: name.into(),
            country_code: country_code.into(),
            auth: None,
            products: None,
        }
    }

    pub fn with_auth(mut self, auth: impl Into<String>) -> Self {
        self.auth = Some(auth.into());
        self
    }

    pub fn with_products<I, S>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = Some(products.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if the product list contains `product` exactly.
    pub fn has_product(&self, product: &str) -> bool {
        self.products
            .as_ref()
            .is_some_and(|products| products.iter().any(|p| p == product))
    }
}

/// On-disk shape of the cache dataset: `{"banks": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankList {
    #[serde(default)]
    pub banks: Vec<BankRecord>,
}
