use async_trait::async_trait;
use moka::future::Cache;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::content_models::SiteContent;
use crate::errors::AppError;

const SITE_KEY: &str = "site";

/// Where site content comes from. Injected into handlers through `AppState`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn load(&self) -> Result<SiteContent, AppError>;
}

/// Reads the content document from a JSON file on every load.
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn load(&self) -> Result<SiteContent, AppError> {
        tracing::debug!("Loading site content from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::InternalError(format!(
                "Failed to read content file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            AppError::InternalError(format!(
                "Failed to parse content file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// Bounded TTL cache in front of a [`ContentSource`].
///
/// Concurrent misses share one load; failed loads are not cached.
#[derive(Clone)]
pub struct CachedContent {
    source: Arc<dyn ContentSource>,
    cache: Cache<&'static str, Arc<SiteContent>>,
}

impl CachedContent {
    pub fn new(source: Arc<dyn ContentSource>, ttl: Duration) -> Self {
        let cache = Cache::builder().time_to_live(ttl).max_capacity(1).build();
        Self { source, cache }
    }

    pub async fn site(&self) -> Result<Arc<SiteContent>, AppError> {
        let source = self.source.clone();
        self.cache
            .try_get_with(SITE_KEY, async move { source.load().await.map(Arc::new) })
            .await
            .map_err(|e| (*e).clone())
    }

    /// Drops the cached document so the next read reloads it.
    pub async fn invalidate(&self) {
        self.cache.invalidate(SITE_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        loads: AtomicUsize,
    }

    #[async_trait]
    impl ContentSource for CountingSource {
        async fn load(&self) -> Result<SiteContent, AppError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(SiteContent::default())
        }
    }

    #[tokio::test]
    async fn test_cache_serves_repeated_reads() {
        let source = Arc::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        let content = CachedContent::new(source.clone(), Duration::from_secs(60));

        content.site().await.unwrap();
        content.site().await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);

        content.invalidate().await;
        content.site().await.unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_internal_error() {
        let source = FileContentSource::new("does/not/exist.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AppError::InternalError(_)));
    }
}
