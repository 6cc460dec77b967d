//! In-memory task and result stores
//!
//! Task status records and analysis results live for the lifetime of the
//! process. The store is deliberately unbounded with no TTL: results must
//! stay retrievable for as long as the process runs, and restarting the
//! process is the only way state is cleared.

use std::hash::Hash;

use async_trait::async_trait;
use moka::future::Cache;

/// Keyed store interface injected into the services.
///
/// `set` inserts or overwrites, last writer wins. `get` returns the current
/// value or nothing; there is no expiry.
#[async_trait]
pub trait KeyValueStore<K, V>: Send + Sync
where
    K: Send + Sync,
    V: Send + Sync,
{
    async fn set(&self, key: K, value: V);

    async fn get(&self, key: &K) -> Option<V>;

    async fn delete(&self, key: &K);

    /// All keys currently present, in no particular order.
    async fn keys(&self) -> Vec<K>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// In-process store backed by a concurrent cache, built without a capacity
/// bound or TTL so entries are never evicted.
pub struct MemoryStore<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    cache: Cache<K, V>,
}

impl<K, V> MemoryStore<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }
}

impl<K, V> Default for MemoryStore<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> KeyValueStore<K, V> for MemoryStore<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn set(&self, key: K, value: V) {
        self.cache.insert(key, value).await;
    }

    async fn get(&self, key: &K) -> Option<V> {
        self.cache.get(key).await
    }

    async fn delete(&self, key: &K) {
        self.cache.invalidate(key).await;
    }

    async fn keys(&self) -> Vec<K> {
        self.cache.run_pending_tasks().await;
        self.cache.iter().map(|(key, _)| (*key).clone()).collect()
    }

    async fn len(&self) -> usize {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count() as usize
    }
}
