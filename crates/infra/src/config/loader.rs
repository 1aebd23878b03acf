//! Configuration loader
//!
//! Loads [`DineroConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DINERO_CLIENT_ID`: OAuth client id (required)
//! - `DINERO_CLIENT_SECRET`: OAuth client secret (required)
//! - `DINERO_API_KEY`: organization API key (required)
//! - `DINERO_ORGANIZATION_ID`: organization id (required)
//! - `DINERO_TIMEOUT_SECS`: per-request timeout in seconds
//! - `DINERO_API_BASE_URL`: API root, including the version segment
//! - `DINERO_TOKEN_URL`: OAuth token endpoint
//!
//! ## File Locations
//! The loader probes the following names, in order, in the current working
//! directory, its parent and grandparent, and next to the executable:
//! `dinero.json`, `dinero.toml`, `config.json`, `config.toml`.

use std::path::{Path, PathBuf};

use dinero_domain::{DineroConfig, DineroError, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["dinero.json", "dinero.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// - `InvalidConfig` if no source can be read or parsed
/// - `MissingConfig` if the file lacks a required credential
pub fn load() -> Result<DineroConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// - `MissingConfig` naming the first absent required variable
/// - `InvalidConfig` if `DINERO_TIMEOUT_SECS` is not a number
pub fn load_from_env() -> Result<DineroConfig> {
    let mut config = DineroConfig::new(
        env_var("DINERO_CLIENT_ID")?,
        env_var("DINERO_CLIENT_SECRET")?,
        env_var("DINERO_API_KEY")?,
        env_var("DINERO_ORGANIZATION_ID")?,
    );

    config.timeout_secs = optional_env_var("DINERO_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| DineroError::InvalidConfig(format!("Invalid timeout: {}", e)))
        })
        .transpose()?;
    config.api_base_url = optional_env_var("DINERO_API_BASE_URL");
    config.token_url = optional_env_var("DINERO_TOKEN_URL");

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. The format is
/// detected by file extension.
///
/// # Errors
/// - `InvalidConfig` if the file is missing, unreadable or malformed
/// - `MissingConfig` if a required credential is absent or empty
pub fn load_from_file(path: Option<PathBuf>) -> Result<DineroConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DineroError::InvalidConfig(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DineroError::InvalidConfig(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DineroError::InvalidConfig(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<DineroConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DineroError::InvalidConfig(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DineroError::InvalidConfig(format!("Invalid JSON format: {}", e))),
        _ => Err(DineroError::InvalidConfig(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut directories = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        directories.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            directories.push(exe_dir.to_path_buf());
        }
    }

    directories
        .iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// Unset and blank values are both reported as missing.
fn env_var(key: &str) -> Result<String> {
    optional_env_var(key).ok_or_else(|| DineroError::MissingConfig(key.to_string()))
}

fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
