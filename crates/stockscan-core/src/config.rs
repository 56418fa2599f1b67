use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Browser-like `User-Agent`; the warehouse UI serves a reduced page to
/// unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let warehouse_base_url = require("STOCKSCAN_BASE_URL")?
        .trim()
        .trim_end_matches('/')
        .to_string();
    if !(warehouse_base_url.starts_with("http://") || warehouse_base_url.starts_with("https://"))
    {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOCKSCAN_BASE_URL".to_string(),
            reason: format!("\"{warehouse_base_url}\" must start with http:// or https://"),
        });
    }
    let warehouse_email = require("STOCKSCAN_EMAIL")?;
    let warehouse_password = require("STOCKSCAN_PASSWORD")?;

    let env = parse_environment(&or_default("STOCKSCAN_ENV", "development"))?;
    let log_level = or_default("STOCKSCAN_LOG_LEVEL", "info");
    let skus_path = PathBuf::from(or_default("STOCKSCAN_SKUS_PATH", "./config/skus.yaml"));
    let export_dir = PathBuf::from(or_default("STOCKSCAN_EXPORT_DIR", "."));

    let request_timeout_secs = parse_u64("STOCKSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("STOCKSCAN_USER_AGENT", DEFAULT_USER_AGENT);
    let max_concurrent_skus = parse_usize("STOCKSCAN_MAX_CONCURRENT_SKUS", "4")?;
    let max_retries = parse_u32("STOCKSCAN_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("STOCKSCAN_RETRY_BACKOFF_BASE_SECS", "2")?;

    Ok(AppConfig {
        env,
        log_level,
        warehouse_base_url,
        warehouse_email,
        warehouse_password,
        skus_path,
        export_dir,
        request_timeout_secs,
        user_agent,
        max_concurrent_skus,
        max_retries,
        retry_backoff_base_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOCKSCAN_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
