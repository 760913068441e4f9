use crate::domain::model::ProductDTO;
use crate::domain::ports::CatalogClient;
use std::sync::Arc;

/// Fetches one product detail. A failed lookup degrades to `None` so a
/// single bad identifier never poisons the batch. Holds no per-request
/// state, so concurrent invocations are safe.
pub struct DetailFetcher<C: CatalogClient + ?Sized> {
    client: Arc<C>,
}

impl<C: CatalogClient + ?Sized> Clone for DetailFetcher<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C: CatalogClient + ?Sized> DetailFetcher<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, id: &str) -> Option<ProductDTO> {
        match self.client.product_detail(id).await {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!("Product ID {} could not be fetched, skipping: {}", id, e);
                None
            }
        }
    }
}
