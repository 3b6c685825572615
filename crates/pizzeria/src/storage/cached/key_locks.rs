//! Per-key locks serializing fetches and invalidations of a cache slot.
//!
//! A reader holds the lock for its key while it checks the cache, fetches
//! and populates. Concurrent readers of the same key queue behind it and
//! then find the populated entry, so only one remote request is issued.
//! Invalidations take the same lock, so a fetch that started before a write
//! can never repopulate the slot after the write's invalidation.
//!
//! Lock entries are forgotten when the last permit or pending acquire for a
//! key is dropped, including when the owning future is cancelled.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use pizzeria_core::cache::pattern_matches;

type KeyLock = Arc<AsyncMutex<()>>;

#[derive(Debug, Default)]
pub(crate) struct KeyLocks {
    // Only held for map bookkeeping, never across an await.
    locks: Mutex<HashMap<String, KeyLock>>,
}

/// Exclusive access to one cache key, released on drop.
#[derive(Debug)]
pub(crate) struct KeyPermit<'a> {
    // Field order matters: the guard must be released before the
    // registration checks whether the key is idle.
    _guard: OwnedMutexGuard<()>,
    _registration: Registration<'a>,
}

/// Interest in a key, held from the start of `acquire` until the permit drops.
#[derive(Debug)]
struct Registration<'a> {
    locks: &'a KeyLocks,
    key: String,
    lock: KeyLock,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        let mut locks = self.locks.map();
        // Idle when only the map and this registration still reference the lock.
        if Arc::strong_count(&self.lock) == 2 {
            locks.remove(&self.key);
        }
    }
}

impl KeyLocks {
    fn map(&self) -> MutexGuard<'_, HashMap<String, KeyLock>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Waits until `key` is free and takes it.
    pub(crate) async fn acquire(&self, key: &str) -> KeyPermit<'_> {
        let registration = {
            let mut locks = self.map();
            Registration {
                locks: self,
                key: key.to_string(),
                lock: Arc::clone(locks.entry(key.to_string()).or_default()),
            }
        };
        let guard = Arc::clone(&registration.lock).lock_owned().await;
        KeyPermit {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Returns the keys matching `pattern` that are currently held or awaited,
    /// sorted so callers taking several locks always take them in one order.
    pub(crate) fn active_matching(&self, pattern: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .map()
            .keys()
            .filter(|key| pattern_matches(pattern, key))
            .cloned()
            .collect();
        keys.sort();
        keys
    }

    #[cfg(test)]
    pub(crate) fn active_count(&self) -> usize {
        self.map().len()
    }
}
