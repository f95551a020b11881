use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub token_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "https://api.trustbridge.org".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            token_storage_key: "token".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            token_storage_key: option_env!("TOKEN_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.token_storage_key),
        }
    }

    /// Backend base URL for the current environment
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Log level handed to `wasm-logger` at startup
    pub fn log_level(&self) -> log::Level {
        if self.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:5000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.trustbridge.org");
    }

    #[test]
    fn disabled_logging_only_keeps_warnings() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert!(!config.is_logging_enabled());
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
