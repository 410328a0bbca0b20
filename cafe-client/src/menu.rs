//! Menu data source
//!
//! Fetches and caches the menu with stale-while-revalidate semantics:
//! last-known-good data is served immediately while a background refresh is
//! pending, and concurrent refreshes share a single in-flight request.
//! Periodic revalidation runs as an explicit task with a cancellation
//! handle, torn down when the consuming view goes away.

use crate::notify::{Notice, NoticeSink};
use crate::{ClientResult, HttpClient};
use shared::models::MenuItem;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
struct CachedMenu {
    items: Vec<MenuItem>,
    fetched_at: Instant,
}

#[derive(Debug)]
struct Inner {
    client: HttpClient,
    /// Freshness window; None means a warm cache never goes stale on its own
    max_age: Option<Duration>,
    cache: RwLock<Option<CachedMenu>>,
    /// Serializes fetches so concurrent callers share one request
    inflight: Mutex<()>,
    /// Bumped on every successful fetch
    generation: AtomicU64,
}

/// Cached menu source over the order/menu API
#[derive(Clone)]
pub struct MenuSource {
    inner: Arc<Inner>,
    notices: Option<Arc<dyn NoticeSink>>,
}

impl MenuSource {
    pub fn new(client: HttpClient, max_age: Option<Duration>) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                max_age,
                cache: RwLock::new(None),
                inflight: Mutex::new(()),
                generation: AtomicU64::new(0),
            }),
            notices: None,
        }
    }

    /// Attach a sink for the "menu updated" acknowledgement
    pub fn with_notice_sink(mut self, sink: Arc<dyn NoticeSink>) -> Self {
        self.notices = Some(sink);
        self
    }

    /// Get the menu, serving cache when possible
    ///
    /// Fresh cache is returned as-is. A stale cache is returned immediately
    /// while a refresh proceeds in the background. A cold cache blocks on
    /// the first fetch; that failure is the caller's retryable error state.
    pub async fn get(&self) -> ClientResult<Vec<MenuItem>> {
        let cached = self.inner.cache.read().await.clone();
        match cached {
            Some(menu) if self.is_fresh(&menu) => Ok(menu.items),
            Some(menu) => {
                let this = self.clone();
                tokio::spawn(async move {
                    if let Err(err) = this.refresh().await {
                        tracing::warn!(error = %err, "Background menu refresh failed");
                    }
                });
                Ok(menu.items)
            }
            None => self.refresh().await,
        }
    }

    /// Force a revalidation
    ///
    /// Callers that raced on the same window share one request: whoever
    /// holds the in-flight lock fetches, the rest observe the new
    /// generation and return the refreshed cache without another round
    /// trip. A failed fetch keeps serving a warm cache.
    pub async fn refresh(&self) -> ClientResult<Vec<MenuItem>> {
        let seen = self.inner.generation.load(Ordering::Acquire);
        let _guard = self.inner.inflight.lock().await;

        // Another caller refreshed while we waited for the lock
        if self.inner.generation.load(Ordering::Acquire) != seen {
            if let Some(menu) = self.inner.cache.read().await.clone() {
                return Ok(menu.items);
            }
        }

        match self.inner.client.menu().await {
            Ok(items) => {
                *self.inner.cache.write().await = Some(CachedMenu {
                    items: items.clone(),
                    fetched_at: Instant::now(),
                });
                self.inner.generation.fetch_add(1, Ordering::Release);
                if let Some(sink) = &self.notices {
                    sink.notify(Notice::Info("Menu updated!".to_string()));
                }
                Ok(items)
            }
            Err(err) => {
                // Warm cache outlives a failed revalidation
                if let Some(menu) = self.inner.cache.read().await.clone() {
                    tracing::warn!(error = %err, "Menu refresh failed, serving cached menu");
                    Ok(menu.items)
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Spawn the periodic revalidation task
    pub fn spawn_refresher(&self, interval: Duration) -> RefreshHandle {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let this = self.clone();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = task_token.cancelled() => break,
                    _ = tokio::time::sleep(interval) => {
                        if let Err(err) = this.refresh().await {
                            tracing::warn!(error = %err, "Periodic menu refresh failed");
                        }
                    }
                }
            }
        });

        RefreshHandle { token, task }
    }

    fn is_fresh(&self, menu: &CachedMenu) -> bool {
        match self.inner.max_age {
            Some(max_age) => menu.fetched_at.elapsed() < max_age,
            None => true,
        }
    }
}

/// Cancellation handle for the periodic refresher
///
/// Dropping the handle tears the task down.
#[derive(Debug)]
pub struct RefreshHandle {
    token: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the refresher and wait for it to exit
    pub async fn cancel(mut self) {
        self.token.cancel();
        let _ = (&mut self.task).await;
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
