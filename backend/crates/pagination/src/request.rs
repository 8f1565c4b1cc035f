//! Page request parameters and their lenient parsing.
//!
//! Clients may send anything in `page`, `limit` and `order`. Values that do
//! not parse fall back to defaults instead of failing the request.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query parameter carrying the 1-based page number.
pub const PAGE_PARAM: &str = "page";
/// Query parameter carrying the page size.
pub const LIMIT_PARAM: &str = "limit";
/// Query parameter carrying the traversal order.
pub const ORDER_PARAM: &str = "order";

/// Requested page position and size.
///
/// ## Invariants
/// - `page >= 1`.
/// - `limit == None` means the whole result set in one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    limit: Option<usize>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
        }
    }
}

impl PageRequest {
    /// Build a request; a `page` of zero is treated as page 1.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(0, Some(10));
    /// assert_eq!(request.page(), 1);
    /// assert_eq!(request.limit(), Some(10));
    /// ```
    #[must_use]
    pub fn new(page: usize, limit: Option<usize>) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Parse `page` and `limit` from their raw query values.
    ///
    /// Missing, non-numeric, negative or zero page values become page 1.
    /// Missing, non-numeric or negative limits mean "no limit".
    #[must_use]
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        let page = page.and_then(parse_count).filter(|page| *page >= 1);
        let limit = limit.and_then(parse_count);
        Self::new(page.unwrap_or(1), limit)
    }

    /// Parse `page` and `limit` from a URL query string such as
    /// `page=2&limit=10`.
    ///
    /// The first occurrence of each parameter wins.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::from_query_str("limit=5&page=3&page=9");
    /// assert_eq!(request, PageRequest::new(3, Some(5)));
    ///
    /// let lenient = PageRequest::from_query_str("page=abc&limit=-1");
    /// assert_eq!(lenient, PageRequest::default());
    /// ```
    #[must_use]
    pub fn from_query_str(query: &str) -> Self {
        let page = first_value(query, PAGE_PARAM);
        let limit = first_value(query, LIMIT_PARAM);
        Self::from_raw(page.as_deref(), limit.as_deref())
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// The page size, or `None` for an unbounded page.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Chronological traversal order for paged histories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Oldest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Newest first; matches storage order.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Interpret a raw `order` value. Only `asc` (any case) selects
    /// ascending order; anything else is descending.
    ///
    /// # Examples
    /// ```
    /// use pagination::SortDirection;
    ///
    /// assert_eq!(SortDirection::parse_lenient("ASC"), SortDirection::Ascending);
    /// assert_eq!(SortDirection::parse_lenient("sideways"), SortDirection::Descending);
    /// ```
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("asc") {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Read the `order` parameter from a URL query string.
    #[must_use]
    pub fn from_query_str(query: &str) -> Self {
        first_value(query, ORDER_PARAM)
            .as_deref()
            .map_or_else(Self::default, Self::parse_lenient)
    }
}

fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

fn first_value(query: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}
