//! Serialization profiles for bank records
//!
//! The cache endpoint exposes products and never auth; the remote endpoint
//! exposes auth and never products.

use serde::Serialize;

use super::BankRecord;

/// Cache profile: bic, name, countryCode, products
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheView {
    pub bic: String,
    pub name: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,
}

impl From<&BankRecord> for CacheView {
    fn from(bank: &BankRecord) -> Self {
        Self {
            bic: bank.bic.clone(),
            name: bank.name.clone(),
            country_code: bank.country_code.clone(),
            products: bank.products.clone(),
        }
    }
}

/// Remote profile: bic, name, countryCode, auth
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteView {
    pub bic: String,
    pub name: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

impl From<BankRecord> for RemoteView {
    fn from(bank: BankRecord) -> Self {
        Self {
            bic: bank.bic,
            name: bank.name,
            country_code: bank.country_code,
            auth: bank.auth,
        }
    }
}
