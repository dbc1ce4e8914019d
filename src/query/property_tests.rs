//! Property-Based Tests for Query Module
//!
//! Uses proptest to check filtering and pagination against simple models.

use proptest::prelude::*;

use crate::models::BankRecord;
use crate::query::{BankFilter, NameMatch, PageRequest};

// == Strategies ==
/// Small alphabets so that generated filters actually hit records
fn country_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("CH"), Just("SE"), Just("NO"), Just("DE")].prop_map(String::from)
}

fn auth_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop_oneof![Just("oauth"), Just("open-id"), Just("ssl-certificate")].prop_map(String::from),
    )
}

fn products_strategy() -> impl Strategy<Value = Option<Vec<String>>> {
    prop::option::of(prop::collection::vec(
        prop_oneof![Just("accounts"), Just("payments"), Just("loans")].prop_map(String::from),
        0..3,
    ))
}

fn bank_strategy() -> impl Strategy<Value = BankRecord> {
    (
        "[A-D]{2}",
        "(Bank|Credit|Mbanken) [a-c]{1,2}",
        country_strategy(),
        auth_strategy(),
        products_strategy(),
    )
        .prop_map(|(bic, name, country_code, auth, products)| BankRecord {
            bic,
            name,
            country_code,
            auth,
            products,
        })
}

fn optional_param(inner: impl Strategy<Value = String>) -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None::<String>), Just(Some(String::new())), inner.prop_map(Some)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A record is kept iff each non-blank parameter matches its field
    #[test]
    fn prop_filter_matches_every_supplied_parameter(
        bank in bank_strategy(),
        country_code in optional_param(country_strategy()),
        name in optional_param("(Bank|Credit|Mbanken)( [a-c])?"),
        product in optional_param(prop_oneof![Just("accounts"), Just("payments")].prop_map(String::from)),
        exact in any::<bool>(),
    ) {
        let name_match = if exact { NameMatch::Exact } else { NameMatch::Contains };
        let filter = BankFilter::new(name_match)
            .country_code(country_code.as_deref())
            .name(name.as_deref())
            .product(product.as_deref());

        let blank = |v: &Option<String>| v.as_deref().map_or(true, str::is_empty);
        let expected = (blank(&country_code) || country_code.as_deref() == Some(bank.country_code.as_str()))
            && (blank(&name) || match name_match {
                NameMatch::Contains => bank.name.contains(name.as_deref().unwrap()),
                NameMatch::Exact => Some(bank.name.as_str()) == name.as_deref(),
            })
            && (blank(&product) || bank
                .products
                .as_ref()
                .is_some_and(|p| p.iter().any(|x| Some(x.as_str()) == product.as_deref())));

        prop_assert_eq!(filter.matches(&bank), expected);
    }

    // Filtering preserves relative order and never invents records
    #[test]
    fn prop_filter_preserves_order(
        banks in prop::collection::vec(bank_strategy(), 0..30),
        auth in auth_strategy(),
    ) {
        let filter = BankFilter::new(NameMatch::Exact).auth(auth.as_deref());
        let kept: Vec<&BankRecord> = banks.iter().filter(|b| filter.matches(b)).collect();

        let mut cursor = banks.iter();
        for bank in &kept {
            prop_assert!(cursor.any(|b| std::ptr::eq(b, *bank)), "Order not preserved");
        }
        if auth.is_none() {
            prop_assert_eq!(kept.len(), banks.len());
        }
    }

    // Page P of size S is [(P-1)S, PS) clamped to the list
    #[test]
    fn prop_page_window(len in 0usize..40, page in 1i32..12, size in 1i32..8) {
        let items: Vec<usize> = (0..len).collect();
        let result = PageRequest::new(page, size).apply(items);

        let from = ((page - 1) * size) as usize;
        let to = ((page * size) as usize).min(len);
        let expected: Vec<usize> = if from >= len { Vec::new() } else { (from..to).collect() };
        prop_assert_eq!(result, expected);
    }

    // Page 0 or absent page returns the full list whatever the size
    #[test]
    fn prop_page_zero_is_identity(len in 0usize..40, size in -5i32..10) {
        let items: Vec<usize> = (0..len).collect();
        let result = PageRequest::new(0, size).apply(items.clone());
        prop_assert_eq!(result, items);
    }

    // Any page/size pair yields the modelled window and never panics
    #[test]
    fn prop_page_any_values(len in 0usize..40, page in any::<i32>(), size in any::<i32>()) {
        let items: Vec<usize> = (0..len).collect();
        let result = PageRequest::new(page, size).apply(items.clone());

        let from = (i128::from(page) - 1) * i128::from(size);
        let to = i128::from(page) * i128::from(size);
        let len_wide = len as i128;
        let expected: Vec<usize> = if !(from >= 0 && to > 0) {
            items
        } else if from >= len_wide || from >= to {
            Vec::new()
        } else {
            (from as usize..to.min(len_wide) as usize).collect()
        };
        prop_assert_eq!(result, expected);
    }

    // Small negative pairs hit the inverted window often
    #[test]
    fn prop_page_negative_values(len in 0usize..40, page in -12i32..=0, size in -8i32..=0) {
        let items: Vec<usize> = (0..len).collect();
        let result = PageRequest::new(page, size).apply(items.clone());

        let from = (page - 1) * size;
        let to = page * size;
        let expected: Vec<usize> = if from >= 0 && to > 0 { Vec::new() } else { items };
        prop_assert_eq!(result, expected);
    }

    // Consecutive pages partition the list
    #[test]
    fn prop_pages_partition_list(len in 0usize..40, size in 1i32..8) {
        let items: Vec<usize> = (0..len).collect();
        let mut rebuilt = Vec::new();
        let mut page = 1;
        loop {
            let chunk = PageRequest::new(page, size).apply(items.clone());
            if chunk.is_empty() {
                break;
            }
            rebuilt.extend(chunk);
            page += 1;
        }
        prop_assert_eq!(rebuilt, items);
    }
}
