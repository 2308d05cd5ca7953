//! Model cache: lazily populated memoization of engine handles per language pair.
//!
//! Entries are created on first use and kept for the lifetime of the process.
//! There is no eviction and no invalidation. No lock is held while a handle is
//! loading, so two concurrent first requests for the same pair may both load;
//! the last insert wins, which is harmless because loading is deterministic.

use dashmap::DashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use super::LanguagePair;
use crate::error::TranslateError;

pub struct ModelCache<H: ?Sized> {
    entries: DashMap<LanguagePair, Arc<H>>,
    enabled: bool,
    loads: AtomicUsize,
}

impl<H: ?Sized + Send + Sync> ModelCache<H> {
    /// Create a cache. With `enabled == false` every lookup loads afresh.
    pub fn new(enabled: bool) -> Self {
        Self {
            entries: DashMap::new(),
            enabled,
            loads: AtomicUsize::new(0),
        }
    }

    /// Return the cached handle for `pair`, or run `load` and remember its result.
    ///
    /// Failed loads are not cached.
    pub async fn get_or_load<F, Fut>(
        &self,
        pair: LanguagePair,
        load: F,
    ) -> Result<Arc<H>, TranslateError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Arc<H>, TranslateError>>,
    {
        if self.enabled {
            let cached = self.entries.get(&pair).map(|entry| Arc::clone(entry.value()));
            if let Some(handle) = cached {
                return Ok(handle);
            }
        }

        debug!("Model cache miss for {}", pair);
        let handle = load().await?;
        self.loads.fetch_add(1, Ordering::Relaxed);

        if self.enabled {
            self.entries.insert(pair, Arc::clone(&handle));
        }

        Ok(handle)
    }

    pub fn contains(&self, pair: &LanguagePair) -> bool {
        self.entries.contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful loads performed so far.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
