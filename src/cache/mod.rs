//! View-cache invalidation
//!
//! After a successful mutation the affected listing view is marked stale so
//! the next read recomputes it from the store. The actual recomputation
//! mechanism lives outside this crate, behind [`ViewCache`].

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Listing path for invoices
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Listing path for customers
pub const CUSTOMERS_PATH: &str = "/dashboard/customers";

/// "Mark stale" signal keyed by a listing path
#[async_trait]
pub trait ViewCache: Send + Sync {
    async fn invalidate(&self, path: &str) -> Result<()>;
}

/// In-memory view cache that records invalidations.
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryViewCache {
    invalidated: Arc<RwLock<Vec<String>>>,
}

impl InMemoryViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path invalidated so far, in order
    pub fn invalidations(&self) -> Vec<String> {
        self.invalidated
            .read()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }

    /// Whether `path` has been invalidated at least once
    pub fn was_invalidated(&self, path: &str) -> bool {
        self.invalidations().iter().any(|p| p == path)
    }
}

#[async_trait]
impl ViewCache for InMemoryViewCache {
    async fn invalidate(&self, path: &str) -> Result<()> {
        let mut paths = self
            .invalidated
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        paths.push(path.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalidate_records_path() {
        let cache = InMemoryViewCache::new();
        assert!(!cache.was_invalidated(INVOICES_PATH));

        cache.invalidate(INVOICES_PATH).await.unwrap();

        assert!(cache.was_invalidated(INVOICES_PATH));
        assert!(!cache.was_invalidated(CUSTOMERS_PATH));
    }

    #[tokio::test]
    async fn test_invalidations_keep_order() {
        let cache = InMemoryViewCache::new();
        cache.invalidate(CUSTOMERS_PATH).await.unwrap();
        cache.invalidate(INVOICES_PATH).await.unwrap();
        cache.invalidate(CUSTOMERS_PATH).await.unwrap();

        assert_eq!(
            cache.invalidations(),
            vec![CUSTOMERS_PATH, INVOICES_PATH, CUSTOMERS_PATH]
        );
    }
}
