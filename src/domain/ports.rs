use crate::domain::model::ProductDTO;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote catalog collaborator. `similar_ids` yields `Ok(None)` when the
/// upstream answers with a null or absent body.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn similar_ids(&self, product_id: &str) -> Result<Option<Vec<String>>>;
    async fn product_detail(&self, id: &str) -> Result<ProductDTO>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_base_url(&self) -> &str;
    fn pool_size(&self) -> usize;
    fn queue_capacity(&self) -> usize;
    fn submit_timeout_ms(&self) -> u64;
    fn connect_timeout_ms(&self) -> u64;
    fn response_timeout_ms(&self) -> u64;
    fn max_idle_per_host(&self) -> usize;
}

/// Caller-visible entry point. Never fails; the worst outcome is an empty
/// list.
#[async_trait]
pub trait SimilarProducts: Send + Sync {
    async fn get_similar_products(&self, product_id: &str) -> Vec<ProductDTO>;
}
