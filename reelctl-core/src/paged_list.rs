//! Owned paged list with change notification.
//!
//! [`PagedList`] pairs a `Vec<T>` with a [`Paginator`] bound to its length.
//! Every mutation re-binds the paginator so the current page stays valid
//! after optimistic deletes, and subscribers receive the new
//! [`PageSnapshot`] whenever it changes.

use std::num::NonZeroUsize;

use tokio::sync::watch;
use tracing::debug;

use crate::error::{ReelError, Result};
use crate::pagination::{PageSnapshot, Paginator};

#[derive(Debug)]
pub struct PagedList<T> {
    items: Vec<T>,
    paginator: Paginator,
    changes: watch::Sender<PageSnapshot>,
}

impl<T> PagedList<T> {
    pub fn new(items: Vec<T>, page_size: NonZeroUsize) -> Self {
        let paginator = Paginator::new(items.len(), page_size);
        let (changes, _) = watch::channel(paginator.snapshot());
        Self {
            items,
            paginator,
            changes,
        }
    }

    /// Like [`PagedList::new`], rejecting a zero page size.
    pub fn try_new(items: Vec<T>, page_size: usize) -> Result<Self> {
        let page_size = NonZeroUsize::new(page_size).ok_or(ReelError::InvalidPageSize)?;
        Ok(Self::new(items, page_size))
    }

    /// Receive a snapshot each time the visible page or its bounds change.
    pub fn subscribe(&self) -> watch::Receiver<PageSnapshot> {
        self.changes.subscribe()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.paginator.snapshot()
    }

    pub fn current_items(&self) -> &[T] {
        self.paginator.current_items(&self.items)
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.paginator.go_to_page(page);
        self.publish();
    }

    pub fn next_page(&mut self) {
        self.paginator.go_to_next_page();
        self.publish();
    }

    pub fn previous_page(&mut self) {
        self.paginator.go_to_previous_page();
        self.publish();
    }

    /// Remove the item at `index`, resettling the page if it emptied.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.resettle();
        Some(removed)
    }

    /// Remove the first item matching `pred`.
    pub fn remove_where<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.items.iter().position(pred)?;
        self.remove(index)
    }

    pub fn retain<F>(&mut self, pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.items.retain(pred);
        self.resettle();
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.resettle();
    }

    /// Swap in a fresh sequence, keeping the current page if it still exists.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.resettle();
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn resettle(&mut self) {
        self.paginator.reset_to_valid_page(self.items.len());
        self.publish();
    }

    fn publish(&self) {
        let next = self.paginator.snapshot();
        let changed = self.changes.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            debug!(
                page = next.page,
                total_pages = next.total_pages,
                total_items = next.total_items,
                "page snapshot changed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: u32, per_page: usize) -> PagedList<u32> {
        PagedList::try_new((1..=n).collect(), per_page).unwrap()
    }

    #[test]
    fn deleting_last_item_on_last_page_moves_back() {
        let mut favorites = list(11, 5);
        favorites.go_to_page(3);
        assert_eq!(favorites.current_items(), &[11]);

        assert_eq!(favorites.remove(10), Some(11));
        assert_eq!(favorites.snapshot().page, 2);
        assert_eq!(favorites.current_items(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn deleting_mid_page_keeps_page() {
        let mut comments = list(12, 5);
        comments.go_to_page(2);
        comments.remove_where(|c| *c == 7);
        assert_eq!(comments.snapshot().page, 2);
        assert_eq!(comments.current_items(), &[6, 8, 9, 10, 11]);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut items = list(3, 2);
        assert_eq!(items.remove(3), None);
        assert_eq!(items.remove_where(|i| *i == 99), None);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn subscribers_see_resettle() {
        let mut items = list(6, 3);
        let mut rx = items.subscribe();
        items.go_to_page(2);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().page, 2);

        items.retain(|i| *i <= 3);
        assert!(rx.has_changed().unwrap());
        let snap = *rx.borrow_and_update();
        assert_eq!(snap.page, 1);
        assert_eq!(snap.total_pages, 1);
        assert_eq!(snap.total_items, 3);
    }

    #[test]
    fn noop_navigation_does_not_notify() {
        let mut items = list(4, 5);
        let mut rx = items.subscribe();
        rx.borrow_and_update();

        items.next_page();
        items.previous_page();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn replace_keeps_valid_page() {
        let mut items = list(20, 5);
        items.go_to_page(3);
        items.replace((100..120).collect());
        assert_eq!(items.snapshot().page, 3);
        assert_eq!(items.current_items(), &[110, 111, 112, 113, 114]);

        items.replace(vec![1, 2]);
        assert_eq!(items.snapshot().page, 1);
    }

    #[test]
    fn push_extends_total_pages() {
        let mut items = list(5, 5);
        assert_eq!(items.snapshot().total_pages, 1);
        items.push(6);
        assert_eq!(items.snapshot().total_pages, 2);
        assert!(items.snapshot().has_next);
    }
}
