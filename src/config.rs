use serde::Deserialize;
use std::path::Path;

use crate::domain::equilibrium::SolveOptions;
use crate::error::{ConfigError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solve: SolveOptions,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.solve.feasibility_tol > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "solve.feasibility_tol",
                reason: "must be positive".into(),
            }
            .into());
        }
        if !(self.solve.normalization_tol > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "solve.normalization_tol",
                reason: "must be positive".into(),
            }
            .into());
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Install the global tracing subscriber according to the logging
    /// section. `RUST_LOG` takes precedence over the configured level.
    pub fn init_logging(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);
        if self.logging.format == "json" {
            builder.json().init();
        } else {
            builder.init();
        }
    }
}
