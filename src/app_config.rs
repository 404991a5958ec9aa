use crate::domain::{Bounds, Coordinates};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    database: Database,
    map: Map,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("BIOWATT").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn map(&self) -> &Map {
        &self.map
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Database {
    url: String,
    collection: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    retry_attempts: usize,
}

impl Database {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn collection(&self) -> &str {
        self.collection.trim_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_attempts(&self) -> usize {
        self.retry_attempts
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    initial_center: Coordinates,
    initial_zoom: f64,
    focus_zoom: f64,
    #[serde(default)]
    bounds: Bounds,
}

impl Map {
    pub fn initial_center(&self) -> Coordinates {
        self.initial_center
    }

    pub fn initial_zoom(&self) -> f64 {
        self.initial_zoom
    }

    pub fn focus_zoom(&self) -> f64 {
        self.focus_zoom
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { event_buffer_size: 8 },
                database: Database {
                    url: "https://firebase.url".to_string(),
                    collection: "localizaciones".to_string(),
                    timeout: Duration::from_secs(5),
                    retry_ms: 1,
                    retry_attempts: 0,
                },
                map: Map {
                    initial_center: Coordinates::new(17.989, -92.933),
                    initial_zoom: 9.0,
                    focus_zoom: 12.0,
                    bounds: Bounds::TABASCO,
                },
            },
        }
    }

    pub fn database_url(mut self, url: String) -> Self {
        self.config.database.url = url;
        self
    }

    pub fn retry_attempts(mut self, retry_attempts: usize) -> Self {
        self.config.database.retry_attempts = retry_attempts;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_the_bundled_configuration() -> Result<(), ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(include_str!("../config.toml"), FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        assert_eq!(config.database().collection(), "localizaciones");
        assert_eq!(config.database().timeout(), Duration::from_secs(10));
        assert_eq!(config.map().initial_center(), Coordinates::new(17.989, -92.933));
        assert_eq!(config.map().bounds(), Bounds::TABASCO);
        Ok(())
    }

    #[test]
    fn trims_separators_from_the_database_location() {
        let database = Database {
            url: "https://example.firebaseio.com/".to_string(),
            collection: "/localizaciones/".to_string(),
            timeout: Duration::from_secs(1),
            retry_ms: 1,
            retry_attempts: 0,
        };

        assert_eq!(database.url(), "https://example.firebaseio.com");
        assert_eq!(database.collection(), "localizaciones");
    }
}
