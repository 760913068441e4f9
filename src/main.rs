use clap::Parser;
use similar_products::utils::{logger, validation::Validate};
use similar_products::{
    server, CliConfig, HttpCatalogClient, SimilarProductService, SimilarProducts, WorkerPool,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting similar-products service");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    // Shared, process-wide resources: one HTTP client, one worker pool.
    let client = Arc::new(HttpCatalogClient::new(&config)?);
    let pool = Arc::new(WorkerPool::new(
        config.pool_size,
        config.queue_capacity,
        Duration::from_millis(config.submit_timeout_ms),
    ));
    let service: Arc<dyn SimilarProducts> = Arc::new(SimilarProductService::new(client, pool));

    let app = server::router(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
