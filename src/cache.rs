// src/cache.rs

//! Time-bounded cache in front of a [`ContentSource`].
//!
//! A successful fetch is reused for [`CACHE_TTL`]. Once the window expires the
//! next call refreshes; if that refresh fails the previous snapshot (or an
//! empty one) is served and the failure is only logged.
//!
//! Refreshes are single-flight: the state lock is held across the fetch, so
//! callers arriving during a refresh wait for it and share its outcome. A
//! caller that waited behind a failed attempt serves the fallback instead of
//! fetching again, so one expired window costs at most one request.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::models::RawContentItem;
use crate::source::ContentSource;

/// How long a successful fetch stays fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Shared, read-only view of one fetch result.
pub type Snapshot = Arc<Vec<RawContentItem>>;

#[derive(Default)]
struct CacheState {
    items: Option<Snapshot>,
    fetched_at: Option<Instant>,
}

/// TTL cache owning the last successful fetch and its timestamp.
pub struct ContentCache {
    source: Arc<dyn ContentSource>,
    state: Mutex<CacheState>,
    /// Completed fetch attempts, successful or not
    attempts: AtomicU64,
}

impl ContentCache {
    /// Create an empty cache over `source`.
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Create an empty cache over an already shared source.
    pub fn from_shared(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            state: Mutex::new(CacheState::default()),
            attempts: AtomicU64::new(0),
        }
    }

    /// Return the cached items, refreshing when the window has expired.
    ///
    /// Never fails: a refresh error yields the last good snapshot, or an empty
    /// one when nothing was ever fetched.
    pub async fn get_all(&self) -> Snapshot {
        let seen_attempts = self.attempts.load(Ordering::SeqCst);
        let mut state = self.state.lock().await;

        if let (Some(items), Some(fetched_at)) = (&state.items, state.fetched_at) {
            if fetched_at.elapsed() < CACHE_TTL {
                log::debug!("Content cache hit ({} items)", items.len());
                return Arc::clone(items);
            }
        }

        // An attempt finished while we waited for the lock and left the
        // window expired, so it failed: share its fallback.
        if self.attempts.load(Ordering::SeqCst) != seen_attempts {
            log::debug!("Content refresh already attempted, serving fallback");
            return state.items.clone().unwrap_or_default();
        }

        let result = self.source.fetch_published().await;
        self.attempts.fetch_add(1, Ordering::SeqCst);

        match result {
            Ok(items) => {
                log::info!("Content cache refreshed with {} items", items.len());
                let items = Arc::new(items);
                state.items = Some(Arc::clone(&items));
                state.fetched_at = Some(Instant::now());
                items
            }
            Err(e) => {
                let cause = if e.is_fetch() {
                    "Content fetch failed"
                } else {
                    "Content response unusable"
                };
                let fallback = state.items.clone().unwrap_or_default();
                if fallback.is_empty() {
                    log::warn!("{}: {}. Serving empty content.", cause, e);
                } else {
                    log::warn!(
                        "{}: {}. Serving {} stale items.",
                        cause,
                        e,
                        fallback.len()
                    );
                }
                fallback
            }
        }
    }
}
