use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// The list of SKUs looked up by a batch run.
#[derive(Debug, Deserialize)]
pub struct SkusFile {
    pub skus: Vec<String>,
}

/// Load and validate the SKU list from a YAML file.
///
/// Entries are trimmed before validation.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_skus(path: &Path) -> Result<SkusFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SkusFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_skus(&content)
}

fn parse_skus(content: &str) -> Result<SkusFile, ConfigError> {
    let mut skus_file: SkusFile =
        serde_yaml::from_str(content).map_err(ConfigError::SkusFileParse)?;

    for sku in &mut skus_file.skus {
        *sku = sku.trim().to_string();
    }

    validate_skus(&skus_file)?;

    Ok(skus_file)
}

fn validate_skus(skus_file: &SkusFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for sku in &skus_file.skus {
        if sku.is_empty() {
            return Err(ConfigError::Validation(
                "SKU entries must be non-empty".to_string(),
            ));
        }

        if !seen.insert(sku.as_str()) {
            return Err(ConfigError::Validation(format!("duplicate SKU: '{sku}'")));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "skus_test.rs"]
mod tests;
