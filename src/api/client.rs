use anyhow::Context;
use http_cache_reqwest::{CACacheManager, Cache, CacheMode, HttpCache};
use log::debug;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

/// Something that can download the raw bytes of a zone map.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

pub struct ApiClient {
    client: ClientWithMiddleware,
    runtime: tokio::runtime::Runtime,
}

impl ApiClient {
    // returns a new instance of client.
    // internally this is a new http reqwest client with caching middleware,
    // unless `cache` is false.
    pub fn new(cache: bool) -> anyhow::Result<Self> {
        let mut builder = ClientBuilder::new(Client::new());
        if cache {
            builder = builder.with(Cache(HttpCache {
                mode: CacheMode::Default,
                manager: CACacheManager::default(),
                options: None,
            }));
        }

        let runtime = tokio::runtime::Runtime::new().context("starting http runtime")?;

        Ok(Self {
            client: builder.build(),
            runtime,
        })
    }

    /// fetches the image bytes at the given URL
    pub async fn fetch_bytes(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        debug!("fetched {} bytes from {url}", bytes.len());
        Ok(bytes.to_vec())
    }
}

impl ImageFetcher for ApiClient {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        self.runtime
            .block_on(self.fetch_bytes(url))
            .with_context(|| format!("downloading {url}"))
    }
}
