use config::{Config, ConfigBuilder, Environment, File};
use config::builder::DefaultState;
use scheme_admin_core::{Credentials, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod validator;

use crate::cli::Cli;

/// Prefix for environment overrides, e.g. `SCHEME_ADMIN__API__BASE_URL`
pub const ENV_PREFIX: &str = "SCHEME_ADMIN";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub ui: UiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Where the scheme service lives and how to authenticate against it
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout; no timeout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// Cookie header value for headless commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
    /// Environment variable holding the cookie header value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie_env: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
            session_cookie: None,
            session_cookie_env: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl ApiSettings {
    /// Session credentials for native requests.
    /// A literal cookie wins over the environment variable.
    pub fn credentials(&self) -> Credentials {
        if let Some(cookie) = &self.session_cookie {
            return Credentials::Cookie(cookie.clone());
        }
        if let Some(var) = &self.session_cookie_env {
            if let Ok(cookie) = std::env::var(var) {
                return Credentials::Cookie(cookie);
            }
        }
        Credentials::None
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Serve the UI from this directory instead of the embedded build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingSettings {
    pub fn level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.level).unwrap_or(tracing::Level::INFO)
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Self::builder(&cli.config)?.build()?;
        let mut settings: Settings = s.try_deserialize()?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);
        settings.validate()?;
        Ok(settings)
    }

    /// Load `scheme-admin.{toml,yaml,json}` from `root`, if present
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("scheme-admin");
        let s = Self::builder(&config_path)?.build()?;
        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn builder(config_path: &Path) -> Result<ConfigBuilder<DefaultState>, anyhow::Error> {
        Ok(Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(base_url) = &cli.api_base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(cookie) = &cli.session_cookie {
            self.api.session_cookie = Some(cookie.clone());
        }
        if let Some(dir) = &cli.ui_dir {
            self.ui.dist_dir = Some(dir.clone());
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
