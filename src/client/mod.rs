mod detail;
mod evolution;
mod list;

pub use evolution::{species_id_from_url, traverse_evolutions};

use std::sync::Arc;

use crate::{
    cache::ResponseCache,
    config::PokedexConfig,
    req_caching::Fetcher,
    req_util::{ReqwestTransport, Transport},
    Result,
};

/// Entry point for the rendering layer. Cheap to clone; clones share the
/// response cache.
#[derive(Clone, Debug)]
pub struct PokedexClient {
    fetcher: Fetcher,
    config: Arc<PokedexConfig>,
}

impl PokedexClient {
    /// Talks to the configured base URL over reqwest with a fresh cache.
    pub fn new(config: PokedexConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(
            config,
            Arc::new(transport),
            ResponseCache::new(),
        ))
    }

    pub fn with_transport(
        config: PokedexConfig,
        transport: Arc<dyn Transport>,
        cache: ResponseCache,
    ) -> Self {
        Self {
            fetcher: Fetcher::new(transport, cache),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &PokedexConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }
}
