pub mod fetcher;
pub mod pool;
pub mod resolver;
pub mod service;

pub use crate::domain::model::ProductDTO;
pub use crate::domain::ports::{CatalogClient, ConfigProvider, SimilarProducts};
pub use crate::utils::error::Result;
