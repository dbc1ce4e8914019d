//! Query parameter DTOs for the listing endpoints
//!
//! Every parameter arrives as an optional raw string; blank values mean
//! "no constraint" and numeric values are parsed by the paginator.

use serde::Deserialize;

use crate::error::Result;
use crate::query::{BankFilter, NameMatch, PageRequest};

/// Query parameters for `GET /v1/banks/all`
///
/// # Fields
/// - `countryCode`, `name`, `bic`, `product`: filters
/// - `page`, `size`: pagination
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheQuery {
    pub country_code: Option<String>,
    pub name: Option<String>,
    pub bic: Option<String>,
    pub product: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl CacheQuery {
    /// Builds the cache-path filter. Names match by substring.
    pub fn filter(&self) -> BankFilter {
        BankFilter::new(NameMatch::Contains)
            .country_code(self.country_code.as_deref())
            .name(self.name.as_deref())
            .bic(self.bic.as_deref())
            .product(self.product.as_deref())
    }

    /// Parses `page` and `size`.
    pub fn page_request(&self) -> Result<PageRequest> {
        PageRequest::parse(self.page.as_deref(), self.size.as_deref())
    }
}

/// Query parameters for `GET /v2/banks/all`
///
/// # Fields
/// - `countryCode`, `name`, `bic`, `auth`: filters
/// - `page`, `size`: pagination
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteQuery {
    pub country_code: Option<String>,
    pub name: Option<String>,
    pub bic: Option<String>,
    pub auth: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl RemoteQuery {
    /// Builds the remote-path filter. Names must match exactly.
    pub fn filter(&self) -> BankFilter {
        BankFilter::new(NameMatch::Exact)
            .country_code(self.country_code.as_deref())
            .name(self.name.as_deref())
            .bic(self.bic.as_deref())
            .auth(self.auth.as_deref())
    }

    /// Parses `page` and `size`.
    pub fn page_request(&self) -> Result<PageRequest> {
        PageRequest::parse(self.page.as_deref(), self.size.as_deref())
    }
}
