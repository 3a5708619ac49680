use rust_decimal::Decimal;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

// Placeholder business constant: the entry fee is configuration, not derived
// from room prices.
const DEFAULT_ENTRY_FEE_MINIMUM: &str = "100000";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Minimum accepted payment amount (the entry fee threshold).
    pub entry_fee_minimum: Decimal,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let entry_fee_raw = std::env::var("ENTRY_FEE_MINIMUM")
            .unwrap_or_else(|_| DEFAULT_ENTRY_FEE_MINIMUM.to_string());
        let entry_fee_minimum =
            entry_fee_raw
                .parse::<Decimal>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "ENTRY_FEE_MINIMUM".to_string(),
                    value: entry_fee_raw,
                })?;

        Ok(Self {
            database_url,
            bind_addr,
            entry_fee_minimum,
        })
    }
}
