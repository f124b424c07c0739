//! Configuration file support for nfr.
//!
//! Provides YAML-based configuration through `nfr.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use nessus_file_reader::application::dto::OutputFormat;
use nessus_file_reader::shared::security::DEFAULT_MAX_FILE_SIZE;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use nessus_file_reader::shared::Result;

const CONFIG_FILENAME: &str = "nfr.config.yml";

/// Hosts per part when neither the command line nor the config file says otherwise
pub const DEFAULT_BATCH_SIZE: usize = 100;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub batch_size: Option<usize>,
    pub max_file_size_mb: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings after applying command-line options over the config file over defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub batch_size: usize,
    pub max_file_size: u64,
}

impl Settings {
    /// # Arguments
    /// * `config` - Loaded config file, if any
    /// * `format` - `--format` from the command line
    /// * `batch_size` - `--batch-size` from the command line
    pub fn resolve(
        config: Option<&ConfigFile>,
        format: Option<OutputFormat>,
        batch_size: Option<usize>,
    ) -> Result<Self> {
        let config_format = config
            .and_then(|c| c.format.as_deref())
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(|e| {
                anyhow::anyhow!(
                    "Invalid config: {}\n\n💡 Hint: Set 'format' to 'table' or 'json'.",
                    e
                )
            })?;

        let batch_size = batch_size
            .or_else(|| config.and_then(|c| c.batch_size))
            .unwrap_or(DEFAULT_BATCH_SIZE);
        if batch_size == 0 {
            bail!("Invalid batch size: 0\n\n💡 Hint: The batch size must be greater than 0.");
        }

        let max_file_size = config
            .and_then(|c| c.max_file_size_mb)
            .map(|mb| mb.saturating_mul(BYTES_PER_MB))
            .unwrap_or(DEFAULT_MAX_FILE_SIZE);

        Ok(Self {
            format: format.or(config_format).unwrap_or_default(),
            batch_size,
            max_file_size,
        })
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.batch_size == Some(0) {
        bail!(
            "Invalid config: batch_size must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of {} hosts per part.",
            DEFAULT_BATCH_SIZE
        );
    }
    if config.max_file_size_mb == Some(0) {
        bail!(
            "Invalid config: max_file_size_mb must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default limit of {} MB.",
            DEFAULT_MAX_FILE_SIZE / BYTES_PER_MB
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
