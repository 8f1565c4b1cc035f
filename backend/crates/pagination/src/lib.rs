//! Page windowing and response envelopes.
//!
//! Requests carry a 1-based page and an optional limit. A [`PageWindow`]
//! resolves that request against a sequence length, and [`Page`] wraps the
//! selected items with their [`PageMeta`]. Sequences are assumed to be
//! stored newest first, so [`SortDirection::Descending`] reads storage order
//! and [`SortDirection::Ascending`] reads it backwards.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest, SortDirection};
//!
//! let request = PageRequest::from_query_str("page=2&limit=2");
//! let direction = SortDirection::from_query_str("order=asc");
//! let page = Page::from_slice(&[5, 4, 3, 2, 1], request, direction, |value| *value);
//!
//! assert_eq!(page.items, [3, 4]);
//! assert_eq!(page.meta.total_pages, 3);
//! ```

mod envelope;
mod request;
mod window;

pub use envelope::{Page, PageMeta};
pub use request::{LIMIT_PARAM, ORDER_PARAM, PAGE_PARAM, PageRequest, SortDirection};
pub use window::{PageWindow, WindowIndices};
