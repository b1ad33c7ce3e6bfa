use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BITKUB_BASE_URL: &str = "https://api.bitkub.com";
pub const DEFAULT_BINANCE_BASE_URL: &str = "https://fapi.binance.com";
/// Deadline for a single HTTP request
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Deployment environment, controls log format and verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    #[default]
    Local,
    Development,
    Production,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

/// Credentials and endpoint for one exchange
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key: Secret<String>,
    pub secret_key: Secret<String>,
    pub base_url: String,
    pub timeout_seconds: u64,
}

// Never expose secrets in serialization
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 4)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.serialize_field("base_url", &self.base_url)?;
        state.serialize_field("timeout_seconds", &self.timeout_seconds)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            api_key: String,
            secret_key: String,
            base_url: String,
            #[serde(default = "default_timeout_seconds")]
            timeout_seconds: u64,
        }

        fn default_timeout_seconds() -> u64 {
            DEFAULT_TIMEOUT_SECONDS
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            secret_key: Secret::new(helper.secret_key),
            base_url: helper.base_url,
            timeout_seconds: helper.timeout_seconds,
        })
    }
}

impl ExchangeConfig {
    #[must_use]
    pub fn new(api_key: String, secret_key: String, base_url: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
            base_url,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Override the per-request deadline
    #[must_use]
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Configuration for public endpoints only
    #[must_use]
    pub fn public(base_url: String) -> Self {
        Self::new(String::new(), String::new(), base_url)
    }

    /// Check if this configuration has credentials for authenticated operations
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Get API key (use carefully - exposes secret)
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get secret key (use carefully - exposes secret)
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

/// Application configuration assembled from the environment
///
/// Expected environment variables:
/// - `APP_ENV` (optional, `local` | `development` | `production`, defaults to `local`)
/// - `BITKUB_BASE_URL` (optional, defaults to `https://api.bitkub.com`)
/// - `BITKUB_API_KEY`
/// - `BITKUB_API_SECRET`
/// - `BINANCE_BASE_URL` (optional, defaults to `https://fapi.binance.com`)
/// - `HTTP_TIMEOUT_SECONDS` (optional, defaults to 30, applies to both exchanges)
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub app_env: AppEnvironment,
    pub bitkub: ExchangeConfig,
    pub binance: ExchangeConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvironmentVariable(key.to_string()))
        };

        let app_env = lookup("APP_ENV")
            .map(|value| value.parse::<AppEnvironment>())
            .transpose()?
            .unwrap_or_default();

        let timeout_seconds = match lookup("HTTP_TIMEOUT_SECONDS") {
            Some(value) => match value.parse::<u64>() {
                Ok(seconds) if seconds > 0 => seconds,
                _ => {
                    return Err(ConfigError::InvalidConfiguration(format!(
                        "HTTP_TIMEOUT_SECONDS must be a positive integer, got '{}'",
                        value
                    )))
                }
            },
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        let bitkub = ExchangeConfig::new(
            required("BITKUB_API_KEY")?,
            required("BITKUB_API_SECRET")?,
            lookup("BITKUB_BASE_URL").unwrap_or_else(|| DEFAULT_BITKUB_BASE_URL.to_string()),
        )
        .with_timeout(timeout_seconds);

        let binance = ExchangeConfig::public(
            lookup("BINANCE_BASE_URL").unwrap_or_else(|| DEFAULT_BINANCE_BASE_URL.to_string()),
        )
        .with_timeout(timeout_seconds);

        Ok(Self {
            app_env,
            bitkub,
            binance,
        })
    }

    /// Load a .env file, then read configuration from the environment
    ///
    /// With an explicit path the file must exist. Without one, a `.env` in the
    /// working directory is loaded if present and system variables are used
    /// otherwise.
    ///
    /// **Security Warning**: Never commit .env files to version control!
    #[cfg(feature = "env-file")]
    pub fn load(env_file_path: Option<&str>) -> Result<Self, ConfigError> {
        match env_file_path {
            Some(path) => {
                dotenv::from_path(path).map_err(|e| {
                    ConfigError::InvalidConfiguration(format!(
                        "Failed to load .env file '{}': {}",
                        path, e
                    ))
                })?;
            }
            None => match dotenv::from_path(".env") {
                Ok(()) => {}
                Err(dotenv::Error::Io(io_err))
                    if io_err.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(ConfigError::InvalidConfiguration(format!(
                        "Failed to load .env file: {}",
                        e
                    )));
                }
            },
        }

        Self::from_env()
    }

    #[cfg(not(feature = "env-file"))]
    pub fn load(env_file_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = env_file_path {
            return Err(ConfigError::InvalidConfiguration(format!(
                "Cannot load '{}': built without the env-file feature",
                path
            )));
        }

        Self::from_env()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BITKUB_API_KEY", "key"),
            ("BITKUB_API_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.app_env, AppEnvironment::Local);
        assert_eq!(config.bitkub.base_url, DEFAULT_BITKUB_BASE_URL);
        assert_eq!(config.binance.base_url, DEFAULT_BINANCE_BASE_URL);
        assert!(!config.binance.has_credentials());
        assert_eq!(config.bitkub.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.binance.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.bitkub.api_key(), "key");
        assert_eq!(config.bitkub.secret_key(), "secret");
        assert!(config.bitkub.has_credentials());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("BITKUB_API_KEY", "key"),
            ("BITKUB_API_SECRET", "secret"),
            ("BITKUB_BASE_URL", "http://localhost:9000"),
            ("BINANCE_BASE_URL", "http://localhost:9001"),
            ("HTTP_TIMEOUT_SECONDS", "7"),
        ]))
        .unwrap();

        assert_eq!(config.app_env, AppEnvironment::Production);
        assert_eq!(config.bitkub.base_url, "http://localhost:9000");
        assert_eq!(config.binance.base_url, "http://localhost:9001");
        assert_eq!(config.bitkub.timeout_seconds, 7);
        assert_eq!(config.binance.timeout_seconds, 7);
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        for value in ["0", "soon", "-1"] {
            let err = AppConfig::from_lookup(lookup_from(&[
                ("BITKUB_API_KEY", "key"),
                ("BITKUB_API_SECRET", "secret"),
                ("HTTP_TIMEOUT_SECONDS", value),
            ]))
            .unwrap_err();

            assert!(matches!(err, ConfigError::InvalidConfiguration(_)), "{}", value);
        }
    }

    #[test]
    fn test_missing_secret_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("BITKUB_API_KEY", "key")])).unwrap_err();

        assert!(
            matches!(err, ConfigError::MissingEnvironmentVariable(ref name) if name == "BITKUB_API_SECRET")
        );
    }

    #[test]
    fn test_unknown_environment_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "staging"),
            ("BITKUB_API_KEY", "key"),
            ("BITKUB_API_SECRET", "secret"),
        ]))
        .unwrap_err();

        assert_eq!(err.to_string(), "Unknown environment: staging");
    }

    #[test]
    fn test_secrets_never_leak() {
        let config = ExchangeConfig::new(
            "visible-key".to_string(),
            "visible-secret".to_string(),
            DEFAULT_BITKUB_BASE_URL.to_string(),
        );

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("visible-key"));
        assert!(!json.contains("visible-secret"));
        assert!(json.contains("[REDACTED]"));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("visible-secret"));
    }

    #[test]
    fn test_public_config_has_no_credentials() {
        let config = ExchangeConfig::public(DEFAULT_BINANCE_BASE_URL.to_string());
        assert!(!config.has_credentials());
    }
}
