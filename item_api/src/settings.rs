//! Layered configuration: built-in defaults, an optional TOML file, then
//! `ITEMS__*` environment variables.

use anyhow::{anyhow, Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
    pub enable_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            enable_target: false,
        }
    }
}

/// HTTP hardening applied around the API routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub enable_cors: bool,
    pub allowed_origins: Vec<String>,
    pub max_request_size_kb: usize,
    pub enable_security_headers: bool,
    pub enable_rate_limiting: bool,
    pub rate_limit_per_minute: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            enable_cors: false,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_request_size_kb: 64,
            enable_security_headers: true,
            enable_rate_limiting: false,
            rate_limit_per_minute: 600,
        }
    }
}

/// Main settings structure with all configuration sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
}

impl Settings {
    /// Load settings, reading `path` if given or `./config.toml` if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../config.toml"),
            FileFormat::Toml,
        ));

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("ITEMS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("http.allowed_origins")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        let settings: Settings = config
            .try_deserialize()
            .context("invalid configuration")?;
        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow!("Server port cannot be 0"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(anyhow!(
                "Unknown log format '{}', expected 'text' or 'json'",
                self.logging.format
            ));
        }
        if self.http.max_request_size_kb == 0 {
            return Err(anyhow!("Max request size cannot be 0"));
        }
        if self.http.enable_rate_limiting && self.http.rate_limit_per_minute == 0 {
            return Err(anyhow!("Rate limiting enabled with a quota of 0 requests"));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to render settings")
    }
}
