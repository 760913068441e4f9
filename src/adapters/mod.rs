pub mod http_catalog;

pub use http_catalog::HttpCatalogClient;
