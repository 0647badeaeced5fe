use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// On-disk memo of remote resources, one `<name>.json` file per resource.
///
/// Entries never expire: once a name has been written, the file is the only
/// source of truth for it. Delete the file to force a refresh.
pub struct ResourceCache {
    cache_dir: PathBuf,
    verbose: bool,
}

impl ResourceCache {
    pub fn new(cache_dir: impl Into<PathBuf>, verbose: bool) -> Result<Self> {
        let cache_dir = cache_dir.into();
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache directory: {}", cache_dir.display()))?;
        Ok(Self { cache_dir, verbose })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cache_path(name).exists()
    }

    /// Decode the cached entry for `name`, or fetch, persist, and decode it.
    pub async fn fetch_or_load<T, F, Fut>(&self, name: &str, fetch: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        self.lookup(name, false, fetch).await
    }

    /// Same as `fetch_or_load`, without the hit/miss diagnostics.
    pub async fn fetch_or_load_quiet<T, F, Fut>(&self, name: &str, fetch: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        self.lookup(name, true, fetch).await
    }

    async fn lookup<T, F, Fut>(&self, name: &str, quiet: bool, fetch: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let announce = self.verbose && !quiet;
        let path = self.cache_path(name);

        if path.exists() {
            if announce {
                info!("Using cached: {}", name);
            } else {
                debug!(cache = name, "Cache hit");
            }

            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read cache file: {}", name))?;
            return Self::decode(name, &contents);
        }

        if announce {
            info!("Generating: {}", name);
        } else {
            debug!(cache = name, "Cache miss");
        }

        let raw = fetch().await?;

        // The directory may have been removed since construction.
        std::fs::create_dir_all(&self.cache_dir)?;
        std::fs::write(&path, &raw)
            .with_context(|| format!("Failed to write cache file: {}", name))?;

        Self::decode(name, &raw)
    }

    fn decode<T: DeserializeOwned>(name: &str, contents: &str) -> Result<T> {
        serde_json::from_str(contents)
            .with_context(|| format!("Failed to parse resource: {}", name))
    }
}

// ============================================================================
// Tests
// ============================================================================
