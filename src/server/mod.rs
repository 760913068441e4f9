use crate::domain::model::ProductDTO;
use crate::domain::ports::SimilarProducts;
use axum::extract::Path;
use axum::routing::get;
use axum::{Extension, Json, Router};
use std::sync::Arc;

/// Builds the REST surface. One read-only route; the service port is shared
/// through an `Extension` layer.
pub fn router(service: Arc<dyn SimilarProducts>) -> Router {
    Router::new()
        .route("/product/{product_id}/similar", get(handle_similar_products))
        .layer(Extension(service))
}

/// Always answers 200 with a JSON array; degraded lookups surface as a
/// shorter (possibly empty) array, never as an error status.
pub async fn handle_similar_products(
    Path(product_id): Path<String>,
    Extension(service): Extension<Arc<dyn SimilarProducts>>,
) -> Json<Vec<ProductDTO>> {
    let products = service.get_similar_products(&product_id).await;
    tracing::debug!(
        "Returning {} similar products for product {}",
        products.len(),
        product_id
    );
    Json(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedService {
        products: Vec<ProductDTO>,
    }

    #[async_trait]
    impl SimilarProducts for FixedService {
        async fn get_similar_products(&self, _product_id: &str) -> Vec<ProductDTO> {
            self.products.clone()
        }
    }

    #[tokio::test]
    async fn test_handler_returns_json_array() {
        let service: Arc<dyn SimilarProducts> = Arc::new(FixedService {
            products: vec![ProductDTO {
                id: "2".to_string(),
                name: "Widget".to_string(),
                price: Some(9.99),
                availability: true,
            }],
        });

        let Json(products) =
            handle_similar_products(Path("1".to_string()), Extension(service)).await;

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "2");
    }

    #[tokio::test]
    async fn test_handler_returns_empty_array_on_no_results() {
        let service: Arc<dyn SimilarProducts> = Arc::new(FixedService { products: vec![] });

        let Json(products) =
            handle_similar_products(Path("1".to_string()), Extension(service)).await;

        assert!(products.is_empty());
    }
}
