use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Loaded once from a YAML file at startup. The `env` selector decides which
// backends get wired: `dev` runs entirely in memory, `prod` needs the `prod`
// section with database and broker settings.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("missing config section: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Prod,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: Environment,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dev: DevConfig,
    pub prod: Option<ProdConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevConfig {
    /// Put one sample order into the in-memory store at startup.
    #[serde(default = "default_true")]
    pub seed_sample_order: bool,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            seed_sample_order: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProdConfig {
    pub db: DatabaseConfig,
    pub kafka: KafkaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KafkaConfig {
    pub brokers: String,
    pub topic: String,
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

fn default_log_level() -> String {
    "info,order_service=debug".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_connections() -> u32 {
    5
}

fn default_message_timeout_ms() -> u64 {
    5000
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.env == Environment::Prod && self.prod.is_none() {
            return Err(ConfigError::Missing("prod"));
        }
        Ok(())
    }

    /// The `prod` section; only guaranteed present when `env` is `prod`.
    pub fn prod(&self) -> Result<&ProdConfig, ConfigError> {
        self.prod.as_ref().ok_or(ConfigError::Missing("prod"))
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
