//! Configuration module for the Koa Trie CLI.
//!
//! This module provides a configuration system that can load settings from
//! files (TOML, YAML, JSON) and override them with environment variables.
//! All configuration values are validated for correctness before use.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::config::ConfigError;
use config::{Config, ConfigError as ExternalConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default configuration location.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "KOA";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for the Koa Trie CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KoaConfig {
    /// Trie construction settings.
    pub trie: TrieSettings,

    /// Bulk-load settings.
    pub load: LoadSettings,

    /// Log configuration.
    pub log: LogConfig,
}

impl Validate for KoaConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.trie.validate()?;
        self.load.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Settings applied when the CLI constructs a trie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Display name used as the render header.
    pub name: String,
}

impl Default for TrieSettings {
    fn default() -> Self {
        Self {
            name: "Trie".to_string(),
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "trie.name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Settings for the bulk word loader.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoadSettings {
    /// Word file used by the `load` subcommand when no path is given on the
    /// command line.
    pub words_file: Option<PathBuf>,
}

impl Validate for LoadSettings {
    fn validate(&self) -> ConfigResult<()> {
        // The file may legitimately not exist yet at validation time.
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Whether to log in JSON format.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for the Koa Trie CLI.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override
    ///   configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from a file and environment variables.
    ///
    /// Layering is defaults, then file, then `PREFIX__`-separated
    /// environment variables; the result is validated before being returned.
    pub fn load(&self) -> ConfigResult<KoaConfig> {
        let mut builder = Config::builder();

        // Add default configuration values
        builder = builder.add_source(
            Config::try_from(&KoaConfig::default())
                .map_err(|e| ConfigError::ParseError(e.to_string()))?,
        );

        // Add configuration from file if provided
        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let path_str = path.to_str().ok_or_else(|| {
                ConfigError::ParseError(format!("Non-UTF-8 config path: {path:?}"))
            })?;

            builder = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => builder.add_source(File::with_name(path_str)),
                Some("json") => builder
                    .add_source(File::with_name(path_str).format(config::FileFormat::Json)),
                Some("yaml" | "yml") => builder
                    .add_source(File::with_name(path_str).format(config::FileFormat::Yaml)),
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Unsupported file extension for: {path:?}"
                    )))
                }
            };
        }

        // Add environment variables with prefix
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        // Build the configuration
        let config = builder.build().map_err(|e| match e {
            ExternalConfigError::NotFound(path) => ConfigError::FileNotFound(PathBuf::from(path)),
            ExternalConfigError::Message(msg) => ConfigError::ParseError(msg),
            other => ConfigError::ParseError(other.to_string()),
        })?;

        // Deserialize the configuration
        let koa_config: KoaConfig = config
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        // Validate the configuration
        koa_config.validate()?;

        Ok(koa_config)
    }
}

/// Loads configuration for the CLI.
///
/// An explicitly given file must exist and parse. With no explicit file the
/// default location is used when present, falling back to built-in defaults
/// otherwise.
pub fn load_or_default(config_path: Option<&Path>) -> ConfigResult<KoaConfig> {
    match config_path {
        Some(path) => ConfigLoader::new(Some(path), ENV_PREFIX).load(),
        None => {
            let loader = ConfigLoader::new(Some(DEFAULT_CONFIG_PATH), ENV_PREFIX);
            match loader.load() {
                Ok(config) => Ok(config),
                Err(ConfigError::FileNotFound(path)) => {
                    tracing::warn!(
                        "Default configuration file not found at: {}",
                        path.display()
                    );
                    Ok(KoaConfig::default())
                }
                Err(e) => Err(e),
            }
        }
    }
}

/// Initialize the default configuration for the Koa Trie CLI.
///
/// Loads the default configuration location (tolerating its absence) and
/// installs the result as the global configuration.
pub fn init_default_config() -> ConfigResult<()> {
    let config = load_or_default(None)?;
    init_global_config(config);
    Ok(())
}

/// Global configuration accessor.
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    config: Arc<KoaConfig>,
}

impl GlobalConfig {
    /// Creates a new global configuration.
    pub fn new(config: KoaConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn get(&self) -> &KoaConfig {
        &self.config
    }
}

/// Global configuration cell.
static GLOBAL_CONFIG: OnceCell<Mutex<GlobalConfig>> = OnceCell::new();

/// Initialize the global configuration.
pub fn init_global_config(config: KoaConfig) {
    if GLOBAL_CONFIG
        .set(Mutex::new(GlobalConfig::new(config)))
        .is_err()
    {
        tracing::warn!("Global configuration was already initialized, ignoring new configuration");
    }
}

/// Get the global configuration.
///
/// # Panics
///
/// Panics if the global configuration has not been initialized.
pub fn get_global_config() -> GlobalConfig {
    let mutex = GLOBAL_CONFIG
        .get()
        .expect("Global configuration not initialized");

    let guard = mutex.lock().unwrap_or_else(|poisoned| {
        tracing::error!("Global config lock was poisoned, recovering");
        poisoned.into_inner()
    });

    guard.clone()
}
