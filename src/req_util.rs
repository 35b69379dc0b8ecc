use async_trait::async_trait;

use crate::{config::PokedexConfig, Error, Result};

/// Raw answer to a GET request, before any status or JSON handling.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP GET. Only connection level problems are errors here;
/// non-success statuses are returned as-is and judged by the fetcher.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &PokedexConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Network {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let on_error = |e: reqwest::Error| Error::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(on_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(on_error)?;
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
