//! Last-fetched sheet snapshot.
//!
//! Every dashboard request goes through [`SnapshotCache::get`]. Within the TTL
//! the cached payload is served as-is; after that (or when the caller forces
//! a refresh) the source is fetched again, normalized, and the cached payload
//! is replaced wholesale. A failed fetch leaves the previous snapshot alone
//! and is reported to the caller.
//!
//! Concurrent refreshes are not serialized: two requests that both find the
//! snapshot stale will both fetch, and whichever finishes last is kept.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

use super::error::SourceResult;
use super::provider::SheetSource;
use crate::board::SheetPayload;

#[derive(Clone)]
pub struct SnapshotCache {
    source: Arc<dyn SheetSource>,
    ttl: Duration,
    cover_header_index: usize,
    inner: Arc<RwLock<Option<Snapshot>>>,
}

struct Snapshot {
    fetched: Instant,
    payload: Arc<SheetPayload>,
}

impl SnapshotCache {
    /// `ttl` of zero disables caching.
    pub fn new(source: Arc<dyn SheetSource>, ttl: Duration, cover_header_index: usize) -> Self {
        SnapshotCache {
            source,
            ttl,
            cover_header_index,
            inner: Arc::new(RwLock::new(None)),
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Cached payload if still fresh, otherwise a newly fetched one.
    pub async fn get(&self, force_refresh: bool) -> SourceResult<Arc<SheetPayload>> {
        if !force_refresh && !self.ttl.is_zero() {
            let inner = self.inner.read().await;
            if let Some(snap) = inner.as_ref() {
                if snap.fetched.elapsed() < self.ttl {
                    debug!("Serving cached sheet snapshot");
                    return Ok(Arc::clone(&snap.payload));
                }
            }
        }
        self.refresh().await
    }

    /// Fetch from the source and replace the cached snapshot.
    pub async fn refresh(&self) -> SourceResult<Arc<SheetPayload>> {
        let tables = self.source.fetch_tables().await?;
        let payload = Arc::new(SheetPayload::from_tables(
            &tables,
            self.cover_header_index,
            Utc::now(),
        ));
        info!(
            "Sheet snapshot refreshed from {}: {} predictions, {} outcomes",
            self.source.name(),
            payload.predictions.len(),
            payload.cover_analysis.len()
        );

        let mut inner = self.inner.write().await;
        *inner = Some(Snapshot {
            fetched: Instant::now(),
            payload: Arc::clone(&payload),
        });
        Ok(payload)
    }
}
