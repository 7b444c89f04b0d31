//! Best-effort cache-aside service over a key-value backend.
//!
//! Caching is never a hard dependency: a missing backend or any backend
//! error downgrades to a cache miss on reads and a no-op on writes. Callers
//! always get their value from the source of truth when the cache cannot
//! help.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use rostersync_core::cache::{from_cache_bytes, to_cache_bytes, Cache};

/// Cache-aside wrapper with typed JSON values.
pub struct CacheService<C> {
    cache: Option<Arc<C>>,
    default_ttl: Duration,
}

impl<C: Cache> CacheService<C> {
    /// Creates a service backed by the given cache.
    pub fn new(cache: Arc<C>, default_ttl: Duration) -> Self {
        Self {
            cache: Some(cache),
            default_ttl,
        }
    }

    /// Creates a service with no backing store.
    ///
    /// Every read misses and every write is a no-op; producers passed to
    /// [`CacheService::get_or_set`] still run normally.
    pub fn disabled(default_ttl: Duration) -> Self {
        Self {
            cache: None,
            default_ttl,
        }
    }

    /// Reads a value, or `None` on miss, backend failure or bad cache bytes.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;
        match cache.get(key).await {
            Ok(Some(bytes)) => match from_cache_bytes(&bytes) {
                Ok(value) => {
                    tracing::trace!(key, "KV cache hit");
                    Some(value)
                }
                Err(err) => {
                    tracing::warn!(key, error = %err, "KV cache deserialization failed");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "KV cache read failed");
                None
            }
        }
    }

    /// Writes a value with the given TTL (default TTL when `None`).
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        let bytes = match to_cache_bytes(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "KV cache serialization failed");
                return;
            }
        };
        let ttl = ttl.unwrap_or(self.default_ttl);
        if let Err(err) = cache.set(key, &bytes, Some(ttl)).await {
            tracing::warn!(key, error = %err, "KV cache write failed");
        }
    }

    /// Deletes a key.
    pub async fn delete(&self, key: &str) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        if let Err(err) = cache.delete(key).await {
            tracing::warn!(key, error = %err, "KV cache delete failed");
        }
    }

    /// Reads a value, falling back to `produce` on a miss.
    ///
    /// The produced value is written back with the given TTL; write failures
    /// are absorbed and the value is returned regardless. Producer errors
    /// propagate unchanged.
    pub async fn get_or_set<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        produce: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }
        let value = produce().await?;
        self.set(key, &value, ttl).await;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rostersync_core::cache::{CacheError, Result as CacheResult};

    #[cfg(feature = "memory")]
    use crate::cache::MemoryCache;

    /// Cache whose every operation fails, standing in for an unavailable
    /// backend.
    struct UnavailableCache;

    #[async_trait]
    impl Cache for UnavailableCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            Err(CacheError::ConnectionFailed("connection refused".into()))
        }

        async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("connection refused".into()))
        }

        async fn delete(&self, _key: &str) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("connection refused".into()))
        }

        async fn delete_pattern(&self, _pattern: &str) -> CacheResult<()> {
            Err(CacheError::ConnectionFailed("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_get_or_set_with_unavailable_store_calls_producer_once() {
        let service = CacheService::new(Arc::new(UnavailableCache), Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let result: Result<String, CacheError> = service
            .get_or_set("k", Some(Duration::from_secs(60)), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("produced".to_string())
            })
            .await;

        assert_eq!(result.unwrap(), "produced");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_reads_and_writes_are_silent() {
        let service = CacheService::new(Arc::new(UnavailableCache), Duration::from_secs(60));

        service.set("k", &"value".to_string(), None).await;
        let value: Option<String> = service.get("k").await;
        assert_eq!(value, None);

        service.delete("k").await;
    }

    #[tokio::test]
    async fn test_disabled_service_runs_producer_every_time() {
        let service = CacheService::<UnavailableCache>::disabled(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let result: Result<u32, CacheError> = service
                .get_or_set("k", None, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await;
            assert_eq!(result.unwrap(), 7);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[cfg(feature = "memory")]
    #[tokio::test]
    async fn test_get_or_set_caches_produced_value() {
        let service = CacheService::new(Arc::new(MemoryCache::new(100)), Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let result: Result<String, CacheError> = service
                .get_or_set("k", None, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("produced".to_string())
                })
                .await;
            assert_eq!(result.unwrap(), "produced");
        }

        // Producer ran once; subsequent reads hit the cache.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[cfg(feature = "memory")]
    #[tokio::test]
    async fn test_producer_error_propagates_and_nothing_is_cached() {
        let service = CacheService::new(Arc::new(MemoryCache::new(100)), Duration::from_secs(60));

        let result: Result<String, String> = service
            .get_or_set("k", None, || async { Err("remote down".to_string()) })
            .await;
        assert_eq!(result.unwrap_err(), "remote down");

        let cached: Option<String> = service.get("k").await;
        assert_eq!(cached, None);
    }

    #[cfg(feature = "memory")]
    #[tokio::test]
    async fn test_set_get_delete_roundtrip() {
        let service = CacheService::new(Arc::new(MemoryCache::new(100)), Duration::from_secs(60));

        service.set("k", &vec![1u32, 2, 3], None).await;
        let value: Option<Vec<u32>> = service.get("k").await;
        assert_eq!(value, Some(vec![1, 2, 3]));

        service.delete("k").await;
        let value: Option<Vec<u32>> = service.get("k").await;
        assert_eq!(value, None);
    }
}
