/// Application configuration
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "ingest.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_import")]
    pub import: ImportSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Public base URL of the media library
    #[serde(default = "default_api_url")]
    pub url: String,

    /// API key used to authenticate uploads
    #[serde(default)]
    pub key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportSettings {
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl IngestConfig {
    /// Load configuration from file and environment
    ///
    /// The file is `path` when given (it must exist), otherwise
    /// `ingest.toml` in the working directory if present. Environment
    /// variables prefixed with `INGEST_` override it, nested keys separated
    /// by a double underscore (`INGEST_API__KEY`, `INGEST_STORAGE__DATABASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("INGEST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.url.is_empty() {
            return Err(AppError::Config(
                "API URL is required (set INGEST_API__URL)".to_string(),
            ));
        }

        if self.api.key.is_empty() {
            return Err(AppError::Config(
                "API key is required (set INGEST_API__KEY)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        url: default_api_url(),
        key: String::new(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/ingest.db".to_string()
}

fn default_import() -> ImportSettings {
    ImportSettings {
        allowed_extensions: default_allowed_extensions(),
    }
}

fn default_allowed_extensions() -> Vec<String> {
    [".mp3", ".ogg", ".opus", ".flac", ".wav", ".m4a", ".aac"]
        .iter()
        .map(|ext| (*ext).to_string())
        .collect()
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
            import: default_import(),
        }
    }
}
