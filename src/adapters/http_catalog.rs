use crate::domain::model::ProductDTO;
use crate::domain::ports::{CatalogClient, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// reqwest-backed catalog client. The underlying connection pool and the
/// per-call timeouts are configured once here; individual lookups carry no
/// retry or timeout logic of their own.
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms()))
            .timeout(Duration::from_millis(config.response_timeout_ms()))
            .pool_max_idle_per_host(config.max_idle_per_host())
            .build()?;

        let mut base_url = Url::parse(config.catalog_base_url())?;
        // Url::join treats the last path segment as a file unless the path
        // ends with a slash.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn similar_ids(&self, product_id: &str) -> Result<Option<Vec<String>>> {
        let url = self.base_url.join(&format!("{}/similarids", product_id))?;
        tracing::debug!("Requesting similar IDs: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        // An empty body is the upstream's way of saying "nothing here"; a
        // literal JSON null decodes the same way via Option.
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(None);
        }
        Ok(serde_json::from_slice::<Option<Vec<String>>>(&body)?)
    }

    async fn product_detail(&self, id: &str) -> Result<ProductDTO> {
        let url = self.base_url.join(id)?;
        tracing::debug!("Requesting product detail: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<ProductDTO>().await?)
    }
}
