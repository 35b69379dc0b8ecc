use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{cache::ResponseCache, req_util::Transport, Error, Result};

/// GETs JSON through a [`ResponseCache`].
///
/// A URL that answered successfully once is served from the cache for the
/// cache's lifetime. Failures are not stored, so the next call for that URL
/// goes back to the network. There is no single-flight guard: two callers
/// missing the same URL at once both reach the network and the later
/// insert wins.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    cache: ResponseCache,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, cache: ResponseCache) -> Self {
        Self { transport, cache }
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub async fn fetch_cached(&self, url: &str) -> Result<Arc<Value>> {
        if let Some(value) = self.cache.get(url) {
            tracing::debug!(url, "cache hit");
            return Ok(value);
        }

        tracing::debug!(url, "cache miss");
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                status: response.status,
            });
        }

        let value = serde_json::from_slice::<Value>(&response.body).map_err(|e| Error::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.cache.insert(url, value))
    }

    /// Like [`Fetcher::fetch_cached`], then deserializes into `T`. A value
    /// that does not fit `T` is a decode error but stays cached.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self.fetch_cached(url).await?;
        T::deserialize(&*value).map_err(|e| Error::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher").field("cache", &self.cache).finish()
    }
}
