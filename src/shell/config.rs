use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::modules::invoicing::core::billing::is_valid_vat_rate;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_VAT_RATE: f64 = 0.21;
pub const DEFAULT_TOPIC: &str = "invoices.v1";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    InvalidBindAddr { key: &'static str, value: String },

    #[error("{key} must be a non-negative number, got {value}")]
    InvalidVatRate { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub default_vat_rate: f64,
    pub topic: String,
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let raw_addr = get("INVOICING_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                key: "INVOICING_BIND_ADDR",
                value: raw_addr.clone(),
            })?;

        let default_vat_rate = match lookup("INVOICING_VAT_RATE") {
            None => DEFAULT_VAT_RATE,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(rate) if is_valid_vat_rate(rate) => rate,
                _ => {
                    return Err(ConfigError::InvalidVatRate {
                        key: "INVOICING_VAT_RATE",
                        value: raw,
                    });
                }
            },
        };

        let topic = get("INVOICING_TOPIC", DEFAULT_TOPIC);
        if topic.trim().is_empty() {
            return Err(ConfigError::Empty {
                key: "INVOICING_TOPIC",
            });
        }

        let seed_path = lookup("INVOICING_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            default_vat_rate,
            topic,
            seed_path,
        })
    }
}
