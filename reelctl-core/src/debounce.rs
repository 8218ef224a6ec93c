//! Debounced search-as-you-type.
//!
//! Each [`SearchDebouncer::push`] aborts the previously scheduled task and
//! schedules a new one, so only the last query typed within the delay window
//! reaches the receiver.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::catalog::Titled;

/// Delay the catalog search box waits after the last keystroke.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(400);

const EVENT_BUFFER: usize = 16;

/// Outcome of a settled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Run a search for this (trimmed) query
    Query(String),
    /// The input settled blank; close any open results
    Cleared,
}

/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    events: mpsc::Sender<SearchEvent>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> (Self, mpsc::Receiver<SearchEvent>) {
        let (events, rx) = mpsc::channel(EVENT_BUFFER);
        (
            Self {
                delay,
                events,
                pending: None,
            },
            rx,
        )
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record the latest input value, superseding any pending one.
    pub fn push(&mut self, query: impl Into<String>) {
        self.cancel();

        let query = query.into();
        let delay = self.delay;
        let events = self.events.clone();
        trace!(query = %query, "search input scheduled");

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let trimmed = query.trim();
            let event = if trimmed.is_empty() {
                SearchEvent::Cleared
            } else {
                SearchEvent::Query(trimmed.to_string())
            };
            debug!(?event, "search input settled");
            // Receiver gone means nobody is listening any more.
            let _ = events.send(event).await;
        }));
    }

    /// Drop the pending query, if any, without emitting it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Wait for the pending query, if any, to be emitted.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            // An aborted task has nothing left to deliver.
            let _ = handle.await;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Case-insensitive substring filter over titled records.
pub fn filter_titles<'a, T: Titled>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .filter(|item| item.title().to_lowercase().contains(&needle))
        .collect()
}
