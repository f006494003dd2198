// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, database URL, environment type, and site settings from variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Journal Contributors

//! Environment-based configuration management for production deployment

use super::site::{split_list, ImageConfig, OutputMode, SiteConfig};
use crate::constants::{defaults, env_keys};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite { path: PathBuf },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns a configuration error for non-`SQLite` URLs or an empty path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let Some(path_str) = s.strip_prefix("sqlite:") else {
            return Err(AppError::config_invalid(
                env_keys::DATABASE_URL,
                format!("only sqlite: URLs are supported, got '{s}'"),
            ));
        };
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        match path_str {
            ":memory:" => Ok(Self::Memory),
            "" => Err(AppError::config_invalid(
                env_keys::DATABASE_URL,
                "database path is empty",
            )),
            path => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/gym_journal.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port
    pub http_port: u16,
    /// Bind address
    pub host: IpAddr,
    /// Deployment environment
    pub environment: Environment,
    /// Database location
    pub database_url: DatabaseUrl,
    /// Site/build settings
    pub site: SiteConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: IpAddr::from([0, 0, 0, 0]),
            environment: Environment::default(),
            database_url: DatabaseUrl::default(),
            site: SiteConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let http_port = var_or(env_keys::HTTP_PORT, &defaults::HTTP_PORT.to_string())
            .trim()
            .parse::<u16>()
            .map_err(|e| AppError::config_invalid(env_keys::HTTP_PORT, e.to_string()))?;
        let host = var_or(env_keys::HOST, defaults::HOST)
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| AppError::config_invalid(env_keys::HOST, e.to_string()))?;

        let site = SiteConfig {
            output_mode: lookup(env_keys::OUTPUT_MODE)
                .map_or(Ok(OutputMode::default()), |m| OutputMode::parse(&m))?,
            static_dir: PathBuf::from(var_or(env_keys::STATIC_DIR, defaults::STATIC_DIR)),
            images: ImageConfig::from_lists(
                &var_or(env_keys::IMAGE_FORMATS, defaults::IMAGE_FORMATS),
                &var_or(env_keys::IMAGE_DOMAINS, ""),
            )?,
            transpile_packages: split_list(&var_or(
                env_keys::TRANSPILE_PACKAGES,
                defaults::TRANSPILE_PACKAGES,
            )),
        };

        Ok(Self {
            http_port,
            host,
            environment: Environment::from_str_or_default(&var_or(
                env_keys::ENVIRONMENT,
                "development",
            )),
            database_url: DatabaseUrl::parse_url(&var_or(
                env_keys::DATABASE_URL,
                defaults::DATABASE_URL,
            ))?,
            site,
        })
    }

    /// Socket address the server binds to
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// One-line configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let formats: Vec<&str> = self
            .site
            .images
            .formats
            .iter()
            .map(|f| f.mime_type())
            .collect();
        format!(
            "Gym Journal Configuration: address={} environment={} database={} output={} static_dir={} image_formats=[{}] image_domains={} transpile_packages=[{}]",
            self.bind_address(),
            self.environment,
            self.database_url,
            self.site.output_mode,
            self.site.static_dir.display(),
            formats.join(", "),
            self.site.images.domains.len(),
            self.site.transpile_packages.join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.http_port, 3000);
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:3000");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(
            config.database_url.to_connection_string(),
            "sqlite:./data/gym_journal.db"
        );
        assert_eq!(config.site.output_mode, OutputMode::Standalone);
        assert!(config.site.images.domains.is_empty());
        assert_eq!(config.site.transpile_packages, vec!["gym-journal-database"]);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup(&[("HTTP_PORT", "eighty")])).unwrap_err();
        assert!(err.message.contains("HTTP_PORT"));
    }

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:///tmp/gym.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("/tmp/gym.db")
            }
        );
        assert!(DatabaseUrl::parse_url("postgres://localhost/gym").is_err());
        assert!(DatabaseUrl::parse_url("sqlite:").is_err());
    }

    #[test]
    fn test_summary_mentions_site_settings() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("OUTPUT_MODE", "external"),
            ("IMAGE_DOMAINS", "cdn.example.com"),
        ]))
        .unwrap();
        let summary = config.summary();

        assert!(summary.contains("output=external"));
        assert!(summary.contains("image/avif, image/webp"));
        assert!(summary.contains("image_domains=1"));
    }
}
