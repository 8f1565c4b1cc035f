//! Paginated response envelope.

use serde::{Deserialize, Serialize};

use crate::request::{PageRequest, SortDirection};
use crate::window::PageWindow;

/// Page metadata reported next to the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Items in the whole sequence.
    pub total_items: usize,
    /// Items on this page.
    pub item_count: usize,
    /// Effective page size.
    pub items_per_page: usize,
    /// Number of pages at this page size.
    pub total_pages: usize,
    /// The requested 1-based page.
    pub current_page: usize,
}

impl From<PageWindow> for PageMeta {
    fn from(window: PageWindow) -> Self {
        Self {
            total_items: window.total(),
            item_count: window.count(),
            items_per_page: window.items_per_page(),
            total_pages: window.total_pages(),
            current_page: window.current_page(),
        }
    }
}

/// One page of items plus its metadata.
///
/// Serialises as `{"items": [...], "meta": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in traversal order.
    pub items: Vec<T>,
    /// Window metadata.
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Cut one page out of `source`, converting each selected element with
    /// `convert`.
    ///
    /// `source` is in storage order; [`SortDirection::Ascending`] reads it
    /// from the end.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest, SortDirection};
    ///
    /// let history = ["newest", "middle", "oldest"];
    /// let page = Page::from_slice(
    ///     &history,
    ///     PageRequest::new(1, Some(2)),
    ///     SortDirection::Ascending,
    ///     |item| item.to_string(),
    /// );
    /// assert_eq!(page.items, ["oldest", "middle"]);
    /// assert_eq!(page.meta.total_pages, 2);
    /// ```
    #[must_use]
    pub fn from_slice<S, F>(
        source: &[S],
        request: PageRequest,
        direction: SortDirection,
        mut convert: F,
    ) -> Self
    where
        F: FnMut(&S) -> T,
    {
        let window = PageWindow::compute(request, source.len());
        let items = window
            .indices(direction)
            .filter_map(|index| source.get(index))
            .map(&mut convert)
            .collect();
        Self {
            items,
            meta: window.into(),
        }
    }

    /// Convert every item, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, convert: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(convert).collect(),
            meta: self.meta,
        }
    }
}
