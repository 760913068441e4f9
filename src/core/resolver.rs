use crate::domain::ports::CatalogClient;
use std::sync::Arc;

/// Resolves the similar-identifier list for a source product. Transport and
/// decode failures degrade to an empty list and are never surfaced.
pub struct IdResolver<C: CatalogClient + ?Sized> {
    client: Arc<C>,
}

impl<C: CatalogClient + ?Sized> IdResolver<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn resolve(&self, product_id: &str) -> Vec<String> {
        match self.client.similar_ids(product_id).await {
            Ok(Some(ids)) => {
                if ids.is_empty() {
                    tracing::info!("No similar products found for product {}", product_id);
                }
                ids
            }
            Ok(None) => {
                tracing::info!("No similar products found for product {}", product_id);
                Vec::new()
            }
            Err(e) => {
                tracing::error!(
                    "Error fetching similar IDs for product {}: {}",
                    product_id,
                    e
                );
                Vec::new()
            }
        }
    }
}
