pub mod app_config;
pub mod config;
pub mod skus;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use skus::{load_skus, SkusFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read SKU file {path}: {source}")]
    SkusFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse SKU file: {0}")]
    SkusFileParse(#[source] serde_yaml::Error),

    #[error("SKU file validation failed: {0}")]
    Validation(String),
}
