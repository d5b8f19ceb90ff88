//! Configuration management for the marketplace admin dashboard

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    pub backend: BackendConfig,

    /// Web server configuration
    pub webserver: WebServerConfig,

    /// Session cookie configuration
    pub session: SessionConfig,

    /// Display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the marketplace REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the bearer-token cookie
    #[serde(default = "default_token_cookie")]
    pub token_cookie: String,

    /// Name of the user-role descriptor cookie
    #[serde(default = "default_user_cookie")]
    pub user_cookie: String,

    /// Cookie lifetime in days for a plain login
    #[serde(default = "default_expiry_days")]
    pub expiry_days: u32,

    /// Cookie lifetime in days when "remember me" is selected
    #[serde(default = "default_remember_me_days")]
    pub remember_me_days: u32,

    /// Mark cookies as Secure
    #[serde(default = "default_secure_cookies")]
    pub secure: bool,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency symbol used by `format_currency`
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_token_cookie() -> String {
    "admin_token".to_string()
}

fn default_user_cookie() -> String {
    "admin_user".to_string()
}

const fn default_expiry_days() -> u32 {
    1
}

const fn default_remember_me_days() -> u32 {
    30
}

const fn default_secure_cookies() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
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
    /// Load configuration from environment and files.
    ///
    /// Sources are layered in order: `config/default`, a local `config`
    /// file, the file named by `MARKET_ADMIN_CONFIG` (if set), and
    /// `MARKET_ADMIN__`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(std::env::var("MARKET_ADMIN_CONFIG").ok().as_deref())
    }

    /// Load configuration with an explicit override file.
    ///
    /// # Errors
    ///
    /// Returns an error if the override file is missing or any source
    /// fails to parse.
    pub fn load_from(config_file: Option<&str>) -> crate::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config").required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("MARKET_ADMIN").separator("__"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        let base_url =
            std::env::var("MARKET_ADMIN_API_URL").unwrap_or_else(|_| default_base_url());

        Self {
            backend: BackendConfig {
                base_url,
                request_timeout: default_request_timeout(),
            },
            webserver: WebServerConfig {
                host: default_host(),
                port: default_port(),
            },
            session: SessionConfig {
                token_cookie: default_token_cookie(),
                user_cookie: default_user_cookie(),
                expiry_days: default_expiry_days(),
                remember_me_days: default_remember_me_days(),
                secure: default_secure_cookies(),
            },
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.backend.base_url.starts_with("http"));
        assert_eq!(config.backend.request_timeout, 30);

        assert_eq!(config.webserver.host, "0.0.0.0");
        assert_eq!(config.webserver.port, 8080);

        assert_eq!(config.session.token_cookie, "admin_token");
        assert_eq!(config.session.user_cookie, "admin_user");
        assert_eq!(config.session.expiry_days, 1);
        assert_eq!(config.session.remember_me_days, 30);
        assert!(config.session.secure);

        assert_eq!(config.display.currency_symbol, "$");

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_deserializes_with_partial_fields() {
        let toml = r#"
            [backend]
            base_url = "https://api.example.com"

            [webserver]
            port = 9090

            [session]
        "#;

        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.backend.base_url, "https://api.example.com");
        assert_eq!(config.backend.request_timeout, 30);
        assert_eq!(config.webserver.host, "0.0.0.0");
        assert_eq!(config.webserver.port, 9090);
        assert_eq!(config.session.token_cookie, "admin_token");
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_load_from_honors_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        std::fs::write(
            &path,
            r#"
            [backend]
            base_url = "https://staging.example.com"

            [webserver]
            port = 9999

            [session]
            expiry_days = 7
            "#,
        )
        .unwrap();

        let config = Config::load_from(path.to_str()).unwrap();

        assert_eq!(config.backend.base_url, "https://staging.example.com");
        assert_eq!(config.webserver.port, 9999);
        assert_eq!(config.session.expiry_days, 7);
        // Untouched sections keep their defaults.
        assert_eq!(config.backend.request_timeout, 30);
    }

    #[test]
    fn test_load_from_missing_override_file_is_an_error() {
        let result = Config::load_from(Some("/nonexistent/market-admin.toml"));
        assert!(matches!(result, Err(crate::Error::Configuration { .. })));
    }

    #[test]
    fn test_config_roundtrip_through_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(back.webserver.port, config.webserver.port);
        assert_eq!(back.session.remember_me_days, config.session.remember_me_days);
    }
}
