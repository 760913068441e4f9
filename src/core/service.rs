use crate::core::fetcher::DetailFetcher;
use crate::core::pool::{PoolHandle, WorkerPool};
use crate::core::resolver::IdResolver;
use crate::domain::model::ProductDTO;
use crate::domain::ports::{CatalogClient, SimilarProducts};
use async_trait::async_trait;
use std::sync::Arc;

/// Fan-out/fan-in orchestrator: one resolved identifier list becomes N
/// parallel detail fetches on the shared worker pool, joined into a
/// best-effort result list.
///
/// The only caller-visible "failure" is an empty or partial list. Output
/// order follows the resolved identifier sequence with failed positions
/// omitted, regardless of fetch completion order.
pub struct SimilarProductService<C: CatalogClient + ?Sized + 'static> {
    resolver: IdResolver<C>,
    fetcher: DetailFetcher<C>,
    pool: Arc<WorkerPool>,
}

impl<C: CatalogClient + ?Sized + 'static> SimilarProductService<C> {
    pub fn new(client: Arc<C>, pool: Arc<WorkerPool>) -> Self {
        Self {
            resolver: IdResolver::new(Arc::clone(&client)),
            fetcher: DetailFetcher::new(client),
            pool,
        }
    }
}

#[async_trait]
impl<C: CatalogClient + ?Sized + 'static> SimilarProducts for SimilarProductService<C> {
    async fn get_similar_products(&self, product_id: &str) -> Vec<ProductDTO> {
        let ids = self.resolver.resolve(product_id).await;
        if ids.is_empty() {
            return Vec::new();
        }

        tracing::debug!(
            "Dispatching {} detail fetches for product {}",
            ids.len(),
            product_id
        );

        // One pool submission per identifier, in resolved order. A rejected
        // submission counts as a failed fetch: that position is omitted.
        let mut handles: Vec<Option<PoolHandle<Option<ProductDTO>>>> =
            Vec::with_capacity(ids.len());
        for id in &ids {
            let fetcher = self.fetcher.clone();
            let task_id = id.clone();
            match self
                .pool
                .submit(async move { fetcher.fetch(&task_id).await })
                .await
            {
                Ok(handle) => handles.push(Some(handle)),
                Err(e) => {
                    tracing::warn!("Product ID {} could not be scheduled, skipping: {}", id, e);
                    handles.push(None);
                }
            }
        }

        // Full join barrier: every accepted fetch is awaited before anything
        // is returned, and results land in submission-order slots.
        let mut slots: Vec<Option<ProductDTO>> = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle {
                Some(handle) => slots.push(handle.join().await.flatten()),
                None => slots.push(None),
            }
        }

        slots.into_iter().flatten().collect()
    }
}
