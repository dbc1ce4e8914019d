//! Filter Evaluator
//!
//! Predicate over a bank record built from optional query parameters.

use std::borrow::Borrow;

use crate::models::BankRecord;

/// How the `name` parameter is compared against a record's name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameMatch {
    /// Record name contains the parameter
    #[default]
    Contains,
    /// Record name equals the parameter
    Exact,
}

// == Bank Filter ==
/// Set of optional constraints; a record passes when it satisfies every
/// constraint that is present.
///
/// Blank parameters (empty or whitespace only) are dropped on construction,
/// so an empty filter accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BankFilter {
    country_code: Option<String>,
    name: Option<String>,
    bic: Option<String>,
    product: Option<String>,
    auth: Option<String>,
    name_match: NameMatch,
}

impl BankFilter {
    // == Constructor ==
    /// Creates an empty filter using the given name matching rule.
    pub fn new(name_match: NameMatch) -> Self {
        Self {
            name_match,
            ..Default::default()
        }
    }

    pub fn country_code(mut self, value: Option<&str>) -> Self {
        self.country_code = non_blank(value);
        self
    }

    pub fn name(mut self, value: Option<&str>) -> Self {
        self.name = non_blank(value);
        self
    }

    pub fn bic(mut self, value: Option<&str>) -> Self {
        self.bic = non_blank(value);
        self
    }

    pub fn product(mut self, value: Option<&str>) -> Self {
        self.product = non_blank(value);
        self
    }

    pub fn auth(mut self, value: Option<&str>) -> Self {
        self.auth = non_blank(value);
        self
    }

    /// Returns true when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.country_code.is_none()
            && self.name.is_none()
            && self.bic.is_none()
            && self.product.is_none()
            && self.auth.is_none()
    }

    // == Matches ==
    /// Checks a record against every present constraint.
    ///
    /// A record without products never matches a product constraint, and a
    /// record without auth never matches an auth constraint.
    pub fn matches(&self, bank: &BankRecord) -> bool {
        self.country_code
            .as_deref()
            .map_or(true, |cc| cc == bank.country_code)
            && self.bic.as_deref().map_or(true, |bic| bic == bank.bic)
            && self
                .product
                .as_deref()
                .map_or(true, |product| bank.has_product(product))
            && self
                .auth
                .as_deref()
                .map_or(true, |auth| bank.auth.as_deref() == Some(auth))
            && self.name.as_deref().map_or(true, |name| match self.name_match {
                NameMatch::Contains => bank.name.contains(name),
                NameMatch::Exact => bank.name == name,
            })
    }
}

impl BankFilter {
    // == Apply ==
    /// Keeps the records that match, in their original order.
    ///
    /// An empty filter returns `banks` untouched.
    pub fn apply<B: Borrow<BankRecord>>(&self, banks: Vec<B>) -> Vec<B> {
        if self.is_empty() {
            return banks;
        }
        banks
            .into_iter()
            .filter(|bank| self.matches(bank.borrow()))
            .collect()
    }
}

/// Keeps the raw value unless it is blank.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
