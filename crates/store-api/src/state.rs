//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the configuration and the read-only product catalog.

use anyhow::Context;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use store_core::ProductCatalog;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Origins allowed by CORS; empty allows any origin
    pub cors_allowed_origins: Vec<HeaderValue>,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables (and `.env` if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Fails if any configured CORS origin is not a valid header value.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => defaults.cors_allowed_origins,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            cors_allowed_origins,
            log_format: lookup("LOG_FORMAT")
                .and_then(|f| f.parse().ok())
                .unwrap_or(defaults.log_format),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: "development".to_string(),
            cors_allowed_origins: Vec::new(),
            log_format: LogFormat::default(),
        }
    }
}

/// Parse a comma-separated origin list, skipping blank entries
fn parse_origins(raw: &str) -> anyhow::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {:?}", origin))
        })
        .collect()
}

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Product catalog
    pub catalog: Arc<ProductCatalog>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state with the built-in catalog
    pub fn new(config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(ProductCatalog::builtin()),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn try_config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        try_config_from(pairs).unwrap()
    }

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "development");
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.is_production());
    }

    #[test]
    fn test_app_config_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("ENVIRONMENT", "production"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, https://shop.example.com,"),
            ("LOG_FORMAT", "JSON"),
        ]);

        assert_eq!(config.port, 3000);
        assert!(config.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "https://shop.example.com"]
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_cors_origin_fails_loading() {
        let err = try_config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000,http://bad\norigin",
        )])
        .unwrap_err();
        assert!(err.to_string().contains("Invalid CORS origin"));

        assert!(try_config_from(&[("CORS_ALLOWED_ORIGINS", "http://bad\norigin")]).is_err());
    }

    #[test]
    fn test_blank_cors_origins_allow_any() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", " , ")]);
        assert!(config.cors_allowed_origins.is_empty());
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = config_from(&[("PORT", "eighty")]);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = config_from(&[("HOST", "127.0.0.1"), ("PORT", "3000")]);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = config_from(&[("HOST", "not a host")]);
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_state_uses_builtin_catalog() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.catalog.len(), 3);
    }
}
