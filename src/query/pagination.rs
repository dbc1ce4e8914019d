//! Paginator
//!
//! Offset pagination over an ordered list, with out-of-range pages clamped
//! to an empty result.

use crate::error::{BankError, Result};

/// Page size used when `size` is not supplied.
pub const DEFAULT_PAGE_SIZE: i32 = 5;

// == Page Request ==
/// Parsed `page` / `size` pair.
///
/// Page numbers start at 1. Page 0 (the default) disables pagination, as does
/// any combination whose window starts before index 0 or ends at or before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i32,
    pub size: i32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i32, size: i32) -> Self {
        Self { page, size }
    }

    // == Parse ==
    /// Parses raw query values. Blank values fall back to the defaults.
    pub fn parse(page: Option<&str>, size: Option<&str>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            page: parse_param("page", page)?.unwrap_or(defaults.page),
            size: parse_param("size", size)?.unwrap_or(defaults.size),
        })
    }

    // == Window ==
    /// Returns the `[from, to)` window, or None when pagination is off.
    ///
    /// A negative page with a negative size puts `from` past `to`; that
    /// window is collapsed to empty.
    pub fn window(&self) -> Option<(usize, usize)> {
        let page = i64::from(self.page);
        let size = i64::from(self.size);
        let from = (page - 1) * size;
        let to = page * size;

        if from >= 0 && to > 0 {
            let to = to.max(from);
            Some((usize::try_from(from).ok()?, usize::try_from(to).ok()?))
        } else {
            None
        }
    }

    // == Apply ==
    /// Slices `items` to the requested page.
    ///
    /// The end of the window is clamped to the list length; a window starting
    /// past the end yields an empty list.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.window() {
            None => items,
            Some((from, _)) if from >= items.len() => Vec::new(),
            Some((from, to)) => {
                let to = to.min(items.len());
                items
                    .into_iter()
                    .skip(from)
                    .take(to.saturating_sub(from))
                    .collect()
            }
        }
    }
}

fn parse_param(name: &'static str, raw: Option<&str>) -> Result<Option<i32>> {
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .parse::<i32>()
            .map(Some)
            .map_err(|_| BankError::InvalidParameter {
                name,
                value: value.to_string(),
            }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<char> {
        "abcdefgh".chars().collect()
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(PageRequest::parse(None, None).unwrap(), PageRequest::new(0, 5));
        assert_eq!(
            PageRequest::parse(Some(""), Some(" ")).unwrap(),
            PageRequest::new(0, 5)
        );
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(
            PageRequest::parse(Some("3"), Some("2")).unwrap(),
            PageRequest::new(3, 2)
        );
        assert_eq!(
            PageRequest::parse(Some("-1"), None).unwrap(),
            PageRequest::new(-1, 5)
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let result = PageRequest::parse(Some("x"), None);
        assert!(matches!(
            result,
            Err(BankError::InvalidParameter { name: "page", .. })
        ));

        let result = PageRequest::parse(Some("1"), Some("2.5"));
        assert!(matches!(
            result,
            Err(BankError::InvalidParameter { name: "size", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(PageRequest::parse(Some("99999999999"), None).is_err());
    }

    #[test]
    fn test_page_zero_returns_everything() {
        assert_eq!(PageRequest::default().apply(letters()), letters());
    }

    #[test]
    fn test_second_page() {
        let page = PageRequest::new(2, 2).apply(letters());
        assert_eq!(page, vec!['c', 'd']);
    }

    #[test]
    fn test_last_page_is_clamped() {
        let page = PageRequest::new(3, 3).apply(letters());
        assert_eq!(page, vec!['g', 'h']);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        assert!(PageRequest::new(30, 2).apply(letters()).is_empty());
        assert!(PageRequest::new(1, 5).apply(Vec::<char>::new()).is_empty());
    }

    #[test]
    fn test_degenerate_windows_disable_pagination() {
        // size 0: to == 0
        assert_eq!(PageRequest::new(2, 0).apply(letters()), letters());
        // negative page: from < 0
        assert_eq!(PageRequest::new(-2, 2).apply(letters()), letters());
        // negative size on page 1: to < 0
        assert_eq!(PageRequest::new(1, -3).apply(letters()), letters());
    }

    #[test]
    fn test_negative_page_and_size_is_empty() {
        let page = PageRequest::parse(Some("-1"), Some("-5")).unwrap();
        assert_eq!(page.window(), Some((10, 10)));

        let items: Vec<usize> = (0..12).collect();
        assert!(page.apply(items).is_empty());
        assert!(PageRequest::new(-3, -2).apply(letters()).is_empty());
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let page = PageRequest::new(i32::MAX, i32::MAX);
        assert!(page.window().is_some());
        assert!(page.apply(letters()).is_empty());
    }
}
