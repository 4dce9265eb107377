pub mod app_config;
pub mod config;
pub mod orders;
pub mod products;
pub mod scan;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use orders::{
    Address, Customer, LineItem, Order, OrderStatus, PaymentDetails, ShippingLine,
};
pub use products::Product;
pub use scan::{PagedScan, ScanPage, ScanToken};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
