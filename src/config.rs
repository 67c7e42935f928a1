//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `DASHBOARD_*` environment overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::assets::AssetBase;
use crate::dashboard::{Dashboard, ModeExitPolicy, UiState, ViewMode};
use crate::organs::OrganCatalog;
use crate::patient::PatientProfile;
use crate::theme::{ThemeId, ThemeRegistry};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub assets: AssetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub patient: PatientProfile,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial UI state and mode-exit behaviour
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_theme: ThemeId,

    #[serde(default)]
    pub default_view_mode: ViewMode,

    #[serde(default)]
    pub mode_exit_policy: ModeExitPolicy,
}

/// Where images live
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Prefix prepended to image file names in rendered URLs
    #[serde(default)]
    pub public_url: String,

    /// Directory the asset host serves images from
    #[serde(default = "default_asset_dir")]
    pub dir: PathBuf,
}

fn default_asset_dir() -> PathBuf {
    PathBuf::from("./public")
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            public_url: String::new(),
            dir: default_asset_dir(),
        }
    }
}

/// Asset host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built frontend (trunk output)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("./dashboard-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Syntax(error) => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Syntax(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "server")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("patient-dashboard").join("config.toml")),
            Some(PathBuf::from("./dashboard.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(theme) = std::env::var("DASHBOARD_THEME") {
            match theme.parse() {
                Ok(theme) => self.dashboard.default_theme = theme,
                Err(e) => tracing::warn!("Ignoring DASHBOARD_THEME: {}", e),
            }
        }

        // Asset overrides
        if let Ok(public_url) = std::env::var("DASHBOARD_PUBLIC_URL") {
            self.assets.public_url = public_url;
        }
        if let Ok(dir) = std::env::var("DASHBOARD_ASSET_DIR") {
            self.assets.dir = PathBuf::from(dir);
        }

        // Server overrides
        if let Ok(host) = std::env::var("DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("DASHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(dist_dir) = std::env::var("DASHBOARD_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        // Logging overrides
        if let Ok(level) = std::env::var("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.patient
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                other
            ))),
        }
    }

    pub fn asset_base(&self) -> AssetBase {
        AssetBase::new(self.assets.public_url.clone())
    }

    /// State the dashboard starts in
    pub fn initial_state(&self) -> UiState {
        UiState::new(
            self.dashboard.default_theme,
            self.dashboard.default_view_mode,
            self.dashboard.mode_exit_policy,
        )
    }

    /// Dashboard wired from this config
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(
            ThemeRegistry::new(self.asset_base()),
            OrganCatalog::builtin(),
            self.patient.clone(),
        )
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    /// TOML error in text that did not come from a file
    #[error("Failed to parse config: {0}")]
    Syntax(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Patient Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_THEME
# - DASHBOARD_PUBLIC_URL
# - DASHBOARD_ASSET_DIR
# - DASHBOARD_HOST
# - DASHBOARD_PORT
# - DASHBOARD_DIST_DIR
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[dashboard]
# Theme on load: dark or light
default_theme = "dark"

# View mode on load: body or organs
default_view_mode = "body"

# What leaving organs mode does to organ flags:
# preserve, clear_hover (keep active organ) or clear_all
mode_exit_policy = "clear_hover"

[assets]
# Prefix prepended to image file names (like a public URL)
public_url = ""

# Directory holding body_*_{dark,light}.png and organ_*_{dark,light}.png
dir = "./public"

[server]
# Asset host address
host = "127.0.0.1"
port = 8084

# Built frontend directory
dist_dir = "./dashboard-ui/dist"

[patient]
family_name = "Chron"
given_name = "Stark"
date_of_birth = "1990-08-22"
sex = "M"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_template_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();

        assert_eq!(config.dashboard.default_theme, ThemeId::Dark);
        assert_eq!(config.dashboard.default_view_mode, ViewMode::Body);
        assert_eq!(config.dashboard.mode_exit_policy, ModeExitPolicy::ClearHover);
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert_eq!(config.patient, PatientProfile::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
            [dashboard]
            default_theme = "light"
            mode_exit_policy = "clear_all"

            [assets]
            public_url = "/static/"
            "#,
        )
        .unwrap();

        let state = config.initial_state();
        assert_eq!(state.active_theme(), ThemeId::Light);
        assert_eq!(state.view_mode(), ViewMode::Body);
        assert_eq!(state.exit_policy(), ModeExitPolicy::ClearAll);
        assert_eq!(config.asset_base().prefix(), "/static");
        assert_eq!(config.server.port, 8084);
    }

    #[test]
    fn test_partial_patient_uses_defaults() {
        let config = Config::parse("[patient]\nfamily_name = \"Doe\"\n").unwrap();

        let defaults = PatientProfile::default();
        assert_eq!(config.patient.family_name, "Doe");
        assert_eq!(config.patient.given_name, defaults.given_name);
        assert_eq!(config.patient.date_of_birth, defaults.date_of_birth);
        assert_eq!(config.patient.sex, defaults.sex);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::parse("[dashboard]\ndefault_theme = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax(_)));
        assert!(!err.to_string().contains("\"\""));

        let err = Config::parse("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::parse(
            "[patient]\nfamily_name = \"\"\ngiven_name = \"A\"\ndate_of_birth = \"2000-01-01\"\nsex = \"F\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[server]\nport = 9000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 9000);

        let missing = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));

        std::fs::write(&path, "[server\n").unwrap();
        match Config::load(&path).unwrap_err() {
            ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_dashboard_from_config() {
        let config = Config::parse("[assets]\npublic_url = \"/img\"\n").unwrap();
        let dashboard = config.dashboard();

        assert_eq!(
            dashboard.registry().resolve(ThemeId::Dark).body_skin_image,
            "/img/body_skin_dark.png"
        );
    }
}
