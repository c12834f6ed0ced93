use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use super::error::DashboardError;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub generator: GeneratorConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory with the built frontend, served as fallback
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            static_dir: "dist".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Uniform ranges for synthetic daily metrics, upper bounds exclusive
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sales_min: u32,
    pub sales_max: u32,
    pub transactions_min: u32,
    pub transactions_max: u32,
    pub unit_price_min: f64,
    pub unit_price_max: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            sales_min: 50,
            sales_max: 150,
            transactions_min: 20,
            transactions_max: 70,
            unit_price_min: 5.0,
            unit_price_max: 15.0,
        }
    }
}

impl GeneratorConfig {
    /// Every range must be non-empty, prices finite and non-negative
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.sales_min >= self.sales_max {
            return Err(DashboardError::InvalidConfig(format!(
                "generator.sales_min ({}) must be less than generator.sales_max ({})",
                self.sales_min, self.sales_max
            )));
        }
        if self.transactions_min >= self.transactions_max {
            return Err(DashboardError::InvalidConfig(format!(
                "generator.transactions_min ({}) must be less than generator.transactions_max ({})",
                self.transactions_min, self.transactions_max
            )));
        }
        let prices_valid = self.unit_price_min.is_finite()
            && self.unit_price_max.is_finite()
            && self.unit_price_min >= 0.0
            && self.unit_price_min < self.unit_price_max;
        if !prices_valid {
            return Err(DashboardError::InvalidConfig(format!(
                "generator.unit_price range [{}, {}) is invalid",
                self.unit_price_min, self.unit_price_max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Length of the range shown on first load
    pub default_range_days: u32,
    /// Longest range a single request may ask for
    pub max_range_days: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_range_days: 30,
            max_range_days: 731,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[generator]
sales_min = 50
sales_max = 150
transactions_min = 20
transactions_max = 70
unit_price_min = 5.0
unit_price_max = 15.0

[dashboard]
default_range_days = 30
max_range_days = 731
"#;

/// Parse and validate a TOML configuration
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.generator.validate()?;
    Ok(config)
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Store the process-wide configuration; later calls are ignored
pub fn init(config: Config) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("Configuration already initialized, keeping the first one");
    }
}

/// Process-wide configuration, defaults if `init` was never called
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.socket_addr().port(), 3000);
        assert_eq!(config.dashboard.default_range_days, 30);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
            [generator]
            sales_min = 10
            sales_max = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.generator.sales_min, 10);
        assert_eq!(config.generator.sales_max, 20);
        assert_eq!(config.generator.transactions_min, 20);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_empty_ranges_rejected() {
        let err = parse_config(
            r#"
            [generator]
            transactions_min = 70
            transactions_max = 70
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("transactions_min"));

        let generator = GeneratorConfig {
            unit_price_min: 15.0,
            unit_price_max: 5.0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            generator.validate(),
            Err(DashboardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_transactions_allowed() {
        let generator = GeneratorConfig {
            transactions_min: 0,
            transactions_max: 1,
            ..GeneratorConfig::default()
        };
        assert!(generator.validate().is_ok());
    }
}
