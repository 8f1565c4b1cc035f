//! Page window arithmetic.
//!
//! A window maps a [`PageRequest`] onto storage indices of a sequence of
//! `total` items. Descending traversal follows storage order; ascending
//! traversal walks the same window backwards from the end, so page 1
//! ascending starts at the last stored item.

use crate::request::{PageRequest, SortDirection};

/// The resolved slice of a sequence that one page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    total: usize,
    offset: usize,
    count: usize,
    items_per_page: usize,
    total_pages: usize,
    current_page: usize,
}

impl PageWindow {
    /// Resolve `request` against a sequence of `total` items.
    ///
    /// An unbounded request uses `total` as its page size. Windows past the
    /// end are empty rather than invalid.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageWindow};
    ///
    /// let window = PageWindow::compute(PageRequest::new(2, Some(2)), 3);
    /// assert_eq!(window.count(), 1);
    /// assert_eq!(window.total_pages(), 2);
    ///
    /// let everything = PageWindow::compute(PageRequest::default(), 3);
    /// assert_eq!(everything.items_per_page(), 3);
    /// assert_eq!(everything.count(), 3);
    /// ```
    #[must_use]
    pub fn compute(request: PageRequest, total: usize) -> Self {
        let items_per_page = request.limit().unwrap_or(total);
        let offset = request
            .page()
            .saturating_sub(1)
            .saturating_mul(items_per_page);
        let count = total.saturating_sub(offset).min(items_per_page);
        let total_pages = if items_per_page == 0 {
            0
        } else {
            total.div_ceil(items_per_page)
        };

        Self {
            total,
            offset,
            count,
            items_per_page,
            total_pages,
            current_page: request.page(),
        }
    }

    /// Number of items in the underlying sequence.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of items on this page.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Effective page size.
    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// `ceil(total / items_per_page)`, or 0 when the page size is 0.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The requested 1-based page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Storage indices covered by this page, in traversal order.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageWindow, SortDirection};
    ///
    /// let window = PageWindow::compute(PageRequest::new(1, Some(2)), 5);
    /// let newest: Vec<usize> = window.indices(SortDirection::Descending).collect();
    /// let oldest: Vec<usize> = window.indices(SortDirection::Ascending).collect();
    /// assert_eq!(newest, [0, 1]);
    /// assert_eq!(oldest, [4, 3]);
    /// ```
    #[must_use]
    pub const fn indices(&self, direction: SortDirection) -> WindowIndices {
        WindowIndices {
            window: *self,
            direction,
            position: 0,
        }
    }
}

/// Iterator over the storage indices of a [`PageWindow`].
#[derive(Debug, Clone)]
pub struct WindowIndices {
    window: PageWindow,
    direction: SortDirection,
    position: usize,
}

impl Iterator for WindowIndices {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.window.count {
            return None;
        }
        let step = self.window.offset.checked_add(self.position)?;
        self.position = self.position.saturating_add(1);

        match self.direction {
            SortDirection::Descending => Some(step),
            SortDirection::Ascending => self.window.total.checked_sub(1)?.checked_sub(step),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.count.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowIndices {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PageRequest::new(1, Some(2)), 3, 2, 2)]
    #[case(PageRequest::new(2, Some(2)), 3, 1, 2)]
    #[case(PageRequest::new(3, Some(2)), 3, 0, 2)]
    #[case(PageRequest::new(1, None), 3, 3, 1)]
    #[case(PageRequest::new(2, None), 3, 0, 1)]
    #[case(PageRequest::new(1, Some(0)), 3, 0, 0)]
    #[case(PageRequest::new(1, None), 0, 0, 0)]
    #[case(PageRequest::new(1, Some(10)), 0, 0, 0)]
    #[case(PageRequest::new(usize::MAX, Some(usize::MAX)), 3, 0, 1)]
    fn window_counts_and_pages(
        #[case] request: PageRequest,
        #[case] total: usize,
        #[case] count: usize,
        #[case] total_pages: usize,
    ) {
        let window = PageWindow::compute(request, total);
        assert_eq!(window.count(), count);
        assert_eq!(window.total_pages(), total_pages);
        assert_eq!(window.current_page(), request.page());
    }

    #[rstest]
    #[case(SortDirection::Descending, 1, vec![0, 1, 2])]
    #[case(SortDirection::Descending, 3, vec![6])]
    #[case(SortDirection::Ascending, 1, vec![6, 5, 4])]
    #[case(SortDirection::Ascending, 2, vec![3, 2, 1])]
    #[case(SortDirection::Ascending, 3, vec![0])]
    #[case(SortDirection::Ascending, 4, vec![])]
    fn indices_walk_in_traversal_order(
        #[case] direction: SortDirection,
        #[case] page: usize,
        #[case] expected: Vec<usize>,
    ) {
        let window = PageWindow::compute(PageRequest::new(page, Some(3)), 7);
        let indices: Vec<usize> = window.indices(direction).collect();
        assert_eq!(indices, expected);
    }

    #[rstest]
    #[case(SortDirection::Ascending)]
    #[case(SortDirection::Descending)]
    fn concatenated_pages_cover_every_index_once(#[case] direction: SortDirection) {
        for total in 0..12 {
            for limit in 1..6 {
                let mut seen = Vec::new();
                let mut page = 1;
                loop {
                    let window = PageWindow::compute(PageRequest::new(page, Some(limit)), total);
                    if window.count() == 0 {
                        break;
                    }
                    seen.extend(window.indices(direction));
                    page += 1;
                }

                let unpaged: Vec<usize> = PageWindow::compute(PageRequest::default(), total)
                    .indices(direction)
                    .collect();
                assert_eq!(seen, unpaged, "total {total}, limit {limit}");
                assert_eq!(page - 1, total.div_ceil(limit));
            }
        }
    }

    #[test]
    fn size_hint_is_exact() {
        let window = PageWindow::compute(PageRequest::new(2, Some(4)), 6);
        let mut indices = window.indices(SortDirection::Ascending);
        assert_eq!(indices.len(), 2);
        indices.next();
        assert_eq!(indices.len(), 1);
    }
}
