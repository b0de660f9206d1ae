// src/repository/fallback.rs

//! Read-through cache strategy
//!
//! One generic implementation of the remote-first, cache-on-failure
//! pattern, instantiated for meals, categories, and ingredients. A call
//! first attempts the remote fetch; on success the cache is replaced
//! wholesale and the remote data returned, on failure the cache contents
//! are returned if any exist, otherwise the original fetch error
//! surfaces. No retry and no backoff at this layer.

use tracing::{debug, warn};

use crate::error::Result;

/// A remote collection endpoint: one call returns everything
pub trait RemoteSource {
    type Item;

    fn fetch_all(&self) -> Result<Vec<Self::Item>>;
}

/// A local cache table for one entity type.
///
/// `replace_all` must be atomic (clear + bulk insert in one transaction)
/// so a concurrent reader never observes the empty window between the
/// two steps.
pub trait CacheStore {
    type Item;

    fn get_all(&self) -> Result<Vec<Self::Item>>;
    fn insert_all(&mut self, items: &[Self::Item]) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn replace_all(&mut self, items: &[Self::Item]) -> Result<()>;
}

/// Fetch a collection remote-first, falling back to the cache.
///
/// A cache refresh failure after a successful fetch is logged but does
/// not fail the call: the caller asked for the collection and has it. A
/// cache read failure during fallback is treated as an empty cache, so
/// the only failure a caller sees is "remote failed and nothing cached",
/// carrying the original fetch error.
pub fn fetch_with_fallback<S, C>(source: &S, cache: &mut C) -> Result<Vec<S::Item>>
where
    S: RemoteSource,
    C: CacheStore<Item = S::Item>,
{
    match source.fetch_all() {
        Ok(items) => {
            if let Err(err) = cache.replace_all(&items) {
                warn!("Cache refresh failed after successful fetch: {err}");
            }
            Ok(items)
        }
        Err(fetch_err) => {
            debug!("Remote fetch failed, trying cache: {fetch_err}");
            let cached = match cache.get_all() {
                Ok(cached) => cached,
                Err(read_err) => {
                    warn!("Cache read failed during fallback: {read_err}");
                    Vec::new()
                }
            };

            if cached.is_empty() {
                Err(fetch_err)
            } else {
                debug!("Serving {} cached items", cached.len());
                Ok(cached)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct ScriptedSource {
        response: std::result::Result<Vec<u32>, String>,
    }

    impl RemoteSource for ScriptedSource {
        type Item = u32;

        fn fetch_all(&self) -> Result<Vec<u32>> {
            match &self.response {
                Ok(items) => Ok(items.clone()),
                Err(msg) => Err(Error::DownloadError(msg.clone())),
            }
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        items: Vec<u32>,
        fail_writes: bool,
        fail_reads: bool,
    }

    impl CacheStore for MemoryStore {
        type Item = u32;

        fn get_all(&self) -> Result<Vec<u32>> {
            if self.fail_reads {
                return Err(Error::InitError("read failed".to_string()));
            }
            Ok(self.items.clone())
        }

        fn insert_all(&mut self, items: &[u32]) -> Result<()> {
            if self.fail_writes {
                return Err(Error::InitError("write failed".to_string()));
            }
            self.items.extend_from_slice(items);
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            self.items.clear();
            Ok(())
        }

        fn replace_all(&mut self, items: &[u32]) -> Result<()> {
            if self.fail_writes {
                return Err(Error::InitError("write failed".to_string()));
            }
            self.items = items.to_vec();
            Ok(())
        }
    }

    #[test]
    fn test_remote_success_refreshes_cache() {
        let source = ScriptedSource {
            response: Ok(vec![1, 2, 3]),
        };
        let mut cache = MemoryStore {
            items: vec![9],
            ..MemoryStore::default()
        };

        let result = fetch_with_fallback(&source, &mut cache).unwrap();
        assert_eq!(result, vec![1, 2, 3]);
        // Old cache contents fully replaced, not merged
        assert_eq!(cache.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_remote_failure_serves_cache() {
        let source = ScriptedSource {
            response: Err("connection refused".to_string()),
        };
        let mut cache = MemoryStore {
            items: vec![4, 5],
            ..MemoryStore::default()
        };

        let result = fetch_with_fallback(&source, &mut cache).unwrap();
        assert_eq!(result, vec![4, 5]);
    }

    #[test]
    fn test_remote_failure_with_empty_cache_keeps_original_error() {
        let source = ScriptedSource {
            response: Err("connection refused".to_string()),
        };
        let mut cache = MemoryStore::default();

        let err = fetch_with_fallback(&source, &mut cache).unwrap_err();
        match err {
            Error::DownloadError(msg) => assert_eq!(msg, "connection refused"),
            other => panic!("expected the original fetch error, got {other:?}"),
        }
    }

    #[test]
    fn test_cache_write_failure_still_returns_remote_data() {
        let source = ScriptedSource {
            response: Ok(vec![7]),
        };
        let mut cache = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };

        let result = fetch_with_fallback(&source, &mut cache).unwrap();
        assert_eq!(result, vec![7]);
    }

    #[test]
    fn test_cache_read_failure_counts_as_empty() {
        let source = ScriptedSource {
            response: Err("timed out".to_string()),
        };
        let mut cache = MemoryStore {
            items: vec![1],
            fail_reads: true,
            ..MemoryStore::default()
        };

        let err = fetch_with_fallback(&source, &mut cache).unwrap_err();
        assert!(matches!(err, Error::DownloadError(msg) if msg == "timed out"));
    }
}
