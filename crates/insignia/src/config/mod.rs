use chrono::NaiveDate;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::ai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::generator::{GenerationOptions, Sampler, MAX_PROJECTS};

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
    pub generation: GenerationConfig,
    pub ai: AiConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            generation: GenerationConfig::from_env()?,
            ai: AiConfig::from_env(),
        })
    }
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Inputs for the one-shot dataset build at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Fixed seed for reproducible datasets; entropy when absent.
    pub seed: Option<u64>,
    pub project_count: usize,
    /// Stand-in for "today" in adherence and reporting fields.
    pub reference_date: Option<NaiveDate>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            project_count: MAX_PROJECTS,
            reference_date: None,
        }
    }
}

impl GenerationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let seed = match env::var("APP_DATA_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed)?,
            ),
            Err(_) => None,
        };

        let project_count = match env::var("APP_PROJECT_COUNT") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|count| (1..=MAX_PROJECTS).contains(count))
                .ok_or(ConfigError::InvalidProjectCount)?,
            Err(_) => MAX_PROJECTS,
        };

        let reference_date = match env::var("APP_REFERENCE_DATE") {
            Ok(raw) => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|source| ConfigError::InvalidReferenceDate { source })?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            seed,
            project_count,
            reference_date,
        })
    }

    pub fn sampler(&self) -> Sampler {
        match self.seed {
            Some(seed) => Sampler::seeded(seed),
            None => Sampler::from_entropy(),
        }
    }

    pub fn options(&self, today: NaiveDate) -> GenerationOptions {
        GenerationOptions {
            project_count: self.project_count,
            reference_date: self.reference_date.unwrap_or(today),
        }
    }
}

/// Credentials and endpoint for the generative text service.
#[derive(Clone, PartialEq, Eq)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AiConfig {
    fn from_env() -> Self {
        let api_key = env::var("API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            model: env::var("APP_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("APP_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSeed,
    InvalidProjectCount,
    InvalidReferenceDate { source: chrono::ParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSeed => write!(f, "APP_DATA_SEED must be a valid u64"),
            ConfigError::InvalidProjectCount => {
                write!(f, "APP_PROJECT_COUNT must be between 1 and {MAX_PROJECTS}")
            }
            ConfigError::InvalidReferenceDate { .. } => {
                write!(f, "APP_REFERENCE_DATE must be formatted as YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidSeed
            | ConfigError::InvalidProjectCount => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidReferenceDate { source } => Some(source),
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
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_DATA_SEED",
            "APP_PROJECT_COUNT",
            "APP_REFERENCE_DATE",
            "API_KEY",
            "GEMINI_API_KEY",
            "APP_AI_MODEL",
            "APP_AI_BASE_URL",
        ] {
            env::remove_var(key);
        }
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
        assert_eq!(config.generation, GenerationConfig::default());
        assert_eq!(config.ai.model, DEFAULT_MODEL);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_generation_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_DATA_SEED", "42");
        env::set_var("APP_PROJECT_COUNT", "4");
        env::set_var("APP_REFERENCE_DATE", "2024-01-15");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.generation.seed, Some(42));
        assert_eq!(config.generation.project_count, 4);
        assert_eq!(
            config.generation.reference_date,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_project_count() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PROJECT_COUNT", "0");
        let err = AppConfig::load().expect_err("zero projects rejected");
        assert!(matches!(err, ConfigError::InvalidProjectCount));
        reset_env();
    }

    #[test]
    fn blank_api_key_counts_as_missing_and_is_redacted() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("API_KEY", "   ");
        let config = AppConfig::load().expect("config loads");
        assert!(config.ai.api_key.is_none());

        env::set_var("API_KEY", "secret-value");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.ai.api_key.as_deref(), Some("secret-value"));
        assert!(!format!("{:?}", config.ai).contains("secret-value"));
        reset_env();
    }
}
