use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::store::StoreConfig;

const ENV_PREFIX: &str = "NOTESD";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("NOTESD_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from `path` (if it exists) layered under `NOTESD_*` variables.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.store.postgres.url.is_none() {
            if let Ok(url) = env::var("DATABASE_URL") {
                if !url.trim().is_empty() {
                    config.store.postgres.url = Some(url);
                }
            }
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve and validate the store configuration.
    pub fn store_runtime(&self) -> Result<StoreConfig> {
        self.store.to_runtime()
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
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

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StoreSection {
    pub backend: StoreBackendKind,
    pub postgres: PostgresSection,
}

impl StoreSection {
    pub fn to_runtime(&self) -> Result<StoreConfig> {
        match self.backend {
            StoreBackendKind::Memory => Ok(StoreConfig::Memory),
            StoreBackendKind::Postgres => {
                let pg = &self.postgres;

                if pg.max_connections == 0 {
                    bail!("store.postgres.max_connections must be greater than zero");
                }

                Ok(StoreConfig::Postgres {
                    options: pg.connect_options()?,
                    max_connections: pg.max_connections,
                    acquire_timeout: Duration::from_secs(pg.acquire_timeout_secs),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    #[default]
    Memory,
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostgresSection {
    /// Full connection URL; takes precedence over the individual fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl PostgresSection {
    /// Connection options, parsed from `url` when set or built from the parts.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = self.url.as_deref().map(str::trim) {
            if !url.is_empty() {
                return url
                    .parse::<PgConnectOptions>()
                    .context("invalid store.postgres.url");
            }
        }

        if self.host.trim().is_empty() {
            bail!("store.postgres.host must be specified");
        }
        if self.user.trim().is_empty() {
            bail!("store.postgres.user must be specified");
        }
        if self.dbname.trim().is_empty() {
            bail!("store.postgres.dbname must be specified");
        }
        let ssl_mode = self
            .sslmode
            .parse::<PgSslMode>()
            .with_context(|| format!("unsupported store.postgres.sslmode: {}", self.sslmode))?;

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.dbname)
            .ssl_mode(ssl_mode);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }

        Ok(options)
    }
}

impl Default for PostgresSection {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "appuser".to_string(),
            password: String::new(),
            dbname: "notesdb".to_string(),
            sslmode: "disable".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.store.backend, StoreBackendKind::Memory);
        assert!(matches!(config.store_runtime().unwrap(), StoreConfig::Memory));
    }

    #[test]
    fn test_builds_options_from_parts() {
        let pg = PostgresSection {
            user: "app@user".to_string(),
            password: "p@ss/w:rd".to_string(),
            ..Default::default()
        };

        let options = pg.connect_options().unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "app@user");
        assert_eq!(options.get_database(), Some("notesdb"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Disable));
    }

    #[test]
    fn test_explicit_url_wins() {
        let pg = PostgresSection {
            url: Some(" postgres://u@db:6543/notes ".to_string()),
            host: String::new(),
            ..Default::default()
        };

        let options = pg.connect_options().unwrap();
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("notes"));
    }
}
