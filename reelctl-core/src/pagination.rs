//! Pagination window calculator.
//!
//! A [`Paginator`] tracks a 1-based current page over a sequence whose
//! length may change between reads. It never owns the sequence: callers pass
//! the live slice to [`Paginator::current_items`] and re-bind the length
//! through [`Paginator::reset_to_valid_page`] after removing items.
//!
//! Every operation is total. Out-of-range requests clamp instead of failing.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ReelError, Result};

/// Compute the number of pages for `item_count` items.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into `1..=total_pages` (page 1 when there are no pages).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return start/end indices of a page window, both bounded by `total_items`.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Serializable view of a paginator's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Current page, 1-based
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Client-side pagination state over a caller-owned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
    current_page: usize,
    len: usize,
}

impl Paginator {
    /// Bind a paginator to a sequence of `len` items, starting on page 1.
    pub fn new(len: usize, page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
            len,
        }
    }

    /// Like [`Paginator::new`], rejecting a zero page size.
    pub fn try_new(len: usize, page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(ReelError::InvalidPageSize)?;
        Ok(Self::new(len, page_size))
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Length of the sequence this paginator is currently bound to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.len, self.page_size.get())
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// False when no pages exist, even if a resettle left the index above 1.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1 && self.total_pages() > 0
    }

    /// Jump to page `page`, clamped into `1..=total_pages`.
    ///
    /// Accepts any integer so raw user input (including negatives) can be
    /// passed straight through. With no pages the paginator stays on page 1.
    pub fn go_to_page(&mut self, page: i64) {
        let total = self.total_pages();
        if total == 0 {
            debug!(requested = page, "go_to_page on empty sequence ignored");
            return;
        }

        // Anything below 1 clamps to 1; anything that doesn't fit in usize is past the end.
        let requested = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        let target = clamp_page(requested, total);
        if i64::try_from(target).ok() != Some(page) {
            warn!(requested = page, clamped = target, total, "page request out of range");
        }
        self.current_page = target;
    }

    pub fn go_to_next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn go_to_previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Re-bind to a sequence that now holds `new_len` items.
    ///
    /// Moves back to the new last page only when the current page fell off
    /// the end and at least one page remains. The index is never lowered in
    /// any other case, so an emptied sequence keeps its old page number.
    pub fn reset_to_valid_page(&mut self, new_len: usize) {
        self.len = new_len;
        let new_total = self.total_pages();
        if self.current_page > new_total && new_total > 0 {
            debug!(
                from = self.current_page,
                to = new_total,
                new_len,
                "resettled current page"
            );
            self.current_page = new_total;
        }
    }

    /// Start/end indices of the visible window for the bound length.
    pub fn page_range(&self) -> (usize, usize) {
        page_window(self.len, self.page_size.get(), self.current_page)
    }

    /// Visible slice of `items` for the current page.
    ///
    /// The window is computed from `items.len()`, not the bound length, so
    /// a caller that forgot to re-bind still gets an in-bounds slice.
    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = page_window(items.len(), self.page_size.get(), self.current_page);
        &items[start..end]
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            page: self.current_page,
            total_pages: self.total_pages(),
            page_size: self.page_size.get(),
            total_items: self.len,
            has_next: self.has_next(),
            has_prev: self.has_prev(),
        }
    }
}
