use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{DysRiskError, Result};

/// Prefix for environment overrides, e.g. `DYSRISK__API__REST_PORT=9000`
pub const ENV_PREFIX: &str = "DYSRISK";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// dysrisk configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub assessment: AssessmentConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Rule parameters for the risk engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Patients strictly older than this trigger the age pass
    pub age_threshold: u32,
    /// Largest age accepted from callers
    pub max_age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub bind_address: String,
    pub rest_port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            age_threshold: 50,
            max_age: 150,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            rest_port: 8081,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.assessment.max_age == 0 {
            return Err(DysRiskError::config("Maximum age must be > 0"));
        }

        if self.assessment.age_threshold >= self.assessment.max_age {
            return Err(DysRiskError::config(format!(
                "Age threshold ({}) must be below maximum age ({})",
                self.assessment.age_threshold, self.assessment.max_age
            )));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(DysRiskError::config(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.api.bind_address, self.api.rest_port)
            .parse()
            .map_err(|_| {
                DysRiskError::config(format!(
                    "Invalid bind address '{}'",
                    self.api.bind_address
                ))
            })
    }
}
