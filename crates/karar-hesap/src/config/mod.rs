use crate::tariff::{Tariff, TariffError, DEFAULT_TARIFF_YEAR};
use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the calculator.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub tariff: TariffConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let year = match env::var("APP_TARIFF_YEAR") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidTariffYear { value, source })?,
            Err(_) => DEFAULT_TARIFF_YEAR,
        };
        let file = env::var("APP_TARIFF_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            tariff: TariffConfig { year, file },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Which fee tariff the calculations run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TariffConfig {
    pub year: u16,
    /// JSON tariff that replaces the built-in table for `year`.
    pub file: Option<PathBuf>,
}

impl TariffConfig {
    pub fn resolve(&self) -> Result<Tariff, TariffError> {
        match &self.file {
            Some(path) => Tariff::from_json_file(path),
            None => Tariff::for_year(self.year),
        }
    }
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_TARIFF_YEAR,
            file: None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTariffYear {
        value: String,
        source: ParseIntError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTariffYear { value, .. } => {
                write!(f, "APP_TARIFF_YEAR must be a valid year, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidTariffYear { source, .. } => Some(source),
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
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_TARIFF_YEAR");
        env::remove_var("APP_TARIFF_FILE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.tariff, TariffConfig::default());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_tariff_settings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_TARIFF_YEAR", " 2024 ");
        env::set_var("APP_TARIFF_FILE", "/etc/karar-hesap/tarife.json");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.tariff.year, 2024);
        assert_eq!(
            config.tariff.file,
            Some(PathBuf::from("/etc/karar-hesap/tarife.json"))
        );
    }

    #[test]
    fn rejects_malformed_tariff_year() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_TARIFF_YEAR", "yirmi");
        let err = AppConfig::load().expect_err("year must be numeric");
        reset_env();

        assert!(matches!(err, ConfigError::InvalidTariffYear { ref value, .. } if value == "yirmi"));
    }

    #[test]
    fn resolves_built_in_tariff_by_year() {
        let tariff = TariffConfig::default().resolve().expect("built-in tariff");
        assert_eq!(tariff.year, DEFAULT_TARIFF_YEAR);

        let unknown = TariffConfig {
            year: 1999,
            file: None,
        };
        assert!(matches!(unknown.resolve(), Err(TariffError::UnknownYear(1999))));
    }
}
