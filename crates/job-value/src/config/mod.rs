use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::valuation::ValuationConfig;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub valuation: ValuationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let valuation = match env::var("APP_VALUATION_CONFIG") {
            Ok(path) => load_valuation_config(PathBuf::from(path))?,
            Err(_) => ValuationConfig::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            valuation,
        })
    }
}

/// Reads formula overrides from a JSON file; omitted keys keep their defaults.
fn load_valuation_config(path: PathBuf) -> Result<ValuationConfig, ConfigError> {
    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::ValuationFile {
        path: path.clone(),
        source,
    })?;
    let config: ValuationConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::ValuationFormat {
            path: path.clone(),
            source,
        })?;
    config
        .validate()
        .map_err(|err| ConfigError::InvalidValuation {
            path,
            detail: err.to_string(),
        })?;
    Ok(config)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    ValuationFile {
        path: PathBuf,
        source: std::io::Error,
    },
    ValuationFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidValuation {
        path: PathBuf,
        detail: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::ValuationFile { path, .. } => {
                write!(f, "unable to read valuation config {}", path.display())
            }
            ConfigError::ValuationFormat { path, source } => {
                write!(f, "valuation config {} is not valid JSON: {source}", path.display())
            }
            ConfigError::InvalidValuation { path, detail } => {
                write!(f, "valuation config {} rejected: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidValuation { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::ValuationFile { source, .. } => Some(source),
            ConfigError::ValuationFormat { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_VALUATION_CONFIG");
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("job-value-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("scratch file written");
        path
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.valuation, ValuationConfig::default());
    }

    #[test]
    fn localhost_binds_loopback_on_configured_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "LocalHost");
        env::set_var("APP_PORT", "8088");
        env::set_var("APP_ENV", "prod");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.server.socket_addr().expect("loopback address"),
            SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 8088)
        );
        reset_env();
    }

    #[test]
    fn hostnames_other_than_localhost_are_rejected() {
        let server = ServerConfig {
            host: "calculator.internal".to_string(),
            port: 3000,
        };

        match server.socket_addr() {
            Err(err @ ConfigError::InvalidHost { .. }) => {
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("expected invalid host, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "eighty");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        reset_env();
    }

    #[test]
    fn reads_valuation_overrides_from_file() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = scratch_file("overrides.json", r#"{ "great_threshold": 2.5 }"#);
        env::set_var("APP_VALUATION_CONFIG", &path);

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.valuation.great_threshold, 2.5);
        assert_eq!(config.valuation.hourly_pay_scale, 35.0);

        reset_env();
        fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_valuation_file_with_unordered_thresholds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let path = scratch_file("unordered.json", r#"{ "good_threshold": 0.5 }"#);
        env::set_var("APP_VALUATION_CONFIG", &path);

        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidValuation { .. })
        ));

        reset_env();
        fs::remove_file(path).ok();
    }
}
