//! Redis cache backend.
//!
//! Shift range keys are tracked in a Redis Set so pattern deletion can
//! enumerate members instead of using SCAN.
//!
//! # Non-Atomicity Safety
//!
//! `set`, `delete` and `delete_pattern` issue multiple Redis commands without
//! a transaction. A crash between commands can leave the tracking set with a
//! stale member or an orphaned reference; both are harmless because SREM on a
//! missing member and DEL on a missing key are no-ops, and a later
//! `delete_pattern` finishes any partial cleanup. The worst case is temporary
//! inconsistency, not lost writes.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use rostersync_core::cache::{
    is_shift_range_key, pattern_matches, range_tracking_key, Cache, CacheError, Result,
};

fn map_redis_error(err: redis::RedisError) -> CacheError {
    if err.is_connection_refusal() || err.is_timeout() {
        CacheError::ConnectionFailed(err.to_string())
    } else {
        CacheError::OperationFailed(err.to_string())
    }
}

/// Redis cache backend using connection manager for pooling.
pub struct RedisCache {
    conn: redis::aio::ConnectionManager,
}

impl RedisCache {
    /// Creates a new Redis cache connection.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` if the connection cannot be
    /// established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.conn.clone();

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        // Track range keys for pattern deletion
        if is_shift_range_key(key) {
            conn.sadd::<_, _, ()>(range_tracking_key(), key)
                .await
                .map_err(map_redis_error)?;
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();

        if is_shift_range_key(key) {
            conn.srem::<_, _, ()>(range_tracking_key(), key)
                .await
                .map_err(map_redis_error)?;
        }

        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;

        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        // Only range keys are tracked; other patterns are a no-op.
        if !pattern.starts_with("shifts:range:") {
            return Ok(());
        }

        let mut conn = self.conn.clone();

        let tracked_keys: Vec<String> = conn
            .smembers(range_tracking_key())
            .await
            .map_err(map_redis_error)?;

        let keys_to_delete: Vec<&String> = tracked_keys
            .iter()
            .filter(|k| pattern_matches(pattern, k))
            .collect();

        if !keys_to_delete.is_empty() {
            conn.del::<_, ()>(&keys_to_delete)
                .await
                .map_err(map_redis_error)?;

            conn.srem::<_, _, ()>(range_tracking_key(), &keys_to_delete)
                .await
                .map_err(map_redis_error)?;
        }

        Ok(())
    }
}
