pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::HttpCatalogClient;
pub use config::CliConfig;
pub use self::core::pool::WorkerPool;
pub use self::core::service::SimilarProductService;
pub use domain::model::ProductDTO;
pub use domain::ports::{CatalogClient, SimilarProducts};
pub use utils::error::{CatalogError, Result};
