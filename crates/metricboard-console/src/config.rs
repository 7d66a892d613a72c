use std::collections::HashSet;

use metricboard_types::{DashboardCatalog, DashboardSpec, MetricDescriptor};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboards: Vec<DashboardSpec>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dashboards: vec![
                DashboardSpec {
                    slug: "overview".into(),
                    title: "Stats".into(),
                    description: "Overview".into(),
                    metrics: vec![
                        MetricDescriptor::new("Users", 0).with_link("/dashboards/users"),
                        MetricDescriptor::new("Errors", 0),
                    ],
                },
                DashboardSpec {
                    slug: "users".into(),
                    title: "Users".into(),
                    description: "Account activity".into(),
                    metrics: vec![
                        MetricDescriptor::new("Active", 0),
                        MetricDescriptor::new("Back to overview", "\u{2190}").with_link("/"),
                    ],
                },
            ],
        }
    }
}

impl Config {
    /// Slugs must be non-empty and unique across dashboards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for dashboard in &self.dashboards {
            if dashboard.slug.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "dashboard \"{}\" has an empty slug",
                    dashboard.title
                )));
            }
            if !seen.insert(dashboard.slug.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate dashboard slug \"{}\"",
                    dashboard.slug
                )));
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> DashboardCatalog {
        DashboardCatalog::new(self.dashboards.clone())
    }
}

pub fn load_from_str(contents: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

pub fn load_from_file(path: &str) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    load_from_str(&contents)
}

/// Loads the config at `path`, falling back to the built-in defaults when it
/// cannot be read or is invalid.
pub fn load(path: &str) -> Config {
    match load_from_file(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("failed to load config {path}: {e}, using defaults");
            Config::default()
        }
    }
}
