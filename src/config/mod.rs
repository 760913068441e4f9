use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "similar-products")]
#[command(about = "Best-effort similar-products lookup service")]
pub struct CliConfig {
    /// Address the HTTP endpoint binds to
    #[arg(long, default_value = "0.0.0.0:5000")]
    pub bind_addr: String,

    /// Base URL of the remote product catalog, e.g. http://localhost:3001/product/
    #[arg(long, default_value = "http://localhost:3001/product/")]
    pub catalog_base_url: String,

    /// Number of detail-fetch workers
    #[arg(long, default_value = "10")]
    pub pool_size: usize,

    /// Capacity of the pending-fetch queue behind the workers
    #[arg(long, default_value = "1000")]
    pub queue_capacity: usize,

    /// How long a submission may wait for a queue slot before it is rejected
    #[arg(long, default_value = "2000")]
    pub submit_timeout_ms: u64,

    #[arg(long, default_value = "2000")]
    pub connect_timeout_ms: u64,

    #[arg(long, default_value = "5000")]
    pub response_timeout_ms: u64,

    /// Idle connections kept per catalog host
    #[arg(long, default_value = "20")]
    pub max_idle_per_host: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_base_url(&self) -> &str {
        &self.catalog_base_url
    }

    fn pool_size(&self) -> usize {
        self.pool_size
    }

    fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    fn submit_timeout_ms(&self) -> u64 {
        self.submit_timeout_ms
    }

    fn connect_timeout_ms(&self) -> u64 {
        self.connect_timeout_ms
    }

    fn response_timeout_ms(&self) -> u64 {
        self.response_timeout_ms
    }

    fn max_idle_per_host(&self) -> usize {
        self.max_idle_per_host
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("bind_addr", &self.bind_addr)?;
        validate_url("catalog_base_url", &self.catalog_base_url)?;
        validate_positive_number("pool_size", self.pool_size, 1)?;
        validate_range("pool_size", self.pool_size, 1, 512)?;
        validate_positive_number("queue_capacity", self.queue_capacity, 1)?;
        validate_positive_number("submit_timeout_ms", self.submit_timeout_ms as usize, 1)?;
        validate_positive_number("connect_timeout_ms", self.connect_timeout_ms as usize, 1)?;
        validate_positive_number("response_timeout_ms", self.response_timeout_ms as usize, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> CliConfig {
        CliConfig {
            bind_addr: "0.0.0.0:5000".to_string(),
            catalog_base_url: "http://localhost:3001/product/".to_string(),
            pool_size: 10,
            queue_capacity: 1000,
            submit_timeout_ms: 2000,
            connect_timeout_ms: 2000,
            response_timeout_ms: 5000,
            max_idle_per_host: 20,
            verbose: false,
            log_json: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let mut config = valid_config();
        config.pool_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_catalog_url_rejected() {
        let mut config = valid_config();
        config.catalog_base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_queue_capacity_rejected() {
        let mut config = valid_config();
        config.queue_capacity = 0;
        assert!(config.validate().is_err());
    }
}
