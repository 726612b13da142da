//! File-based configuration for the `creator-partner` binary.
//!
//! Every key has a default, so an absent file and an empty file behave the
//! same. Command-line flags are applied on top by `main` after loading.
//!
//! ```toml
//! [generation]
//! model = "gemini-2.5-pro"
//! temperature = 0.7
//! max_output_tokens = 8192
//! timeout_secs = 180
//!
//! [telemetry]
//! filter = "info,nodes=debug"
//! format = "json"
//! otlp_endpoint = "http://localhost:4317"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generation: GenerationSettings,
    pub telemetry: TelemetrySettings,
}

/// `[generation]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationSettings {
    pub model: String,
    pub base_url: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    /// Upper bound on a single generation call.
    pub timeout_secs: u64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: llm::gemini::DEFAULT_MODEL.to_string(),
            base_url: llm::gemini::DEFAULT_BASE_URL.to_string(),
            temperature: None,
            max_output_tokens: None,
            timeout_secs: nodes::LlmGateway::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl GenerationSettings {
    /// `timeout_secs` as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[telemetry]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetrySettings {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub filter: String,
    pub format: LogFormat,
    /// OTLP gRPC endpoint. Span export is disabled when absent.
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
            otlp_endpoint: None,
        }
    }
}

impl Config {
    /// Loads `path`, or the defaults when no path is given.
    ///
    /// Values are not validated here; command-line overrides may still
    /// replace them. Call [`Config::validate`] once overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::parse(&text).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => Self::default(),
        };
        Ok(config)
    }

    /// Replaces file values with those given on the command line.
    pub fn apply_overrides(&mut self, model: Option<&str>, timeout_secs: Option<u64>) {
        if let Some(model) = model {
            self.generation.model = model.to_string();
        }
        if let Some(secs) = timeout_secs {
            self.generation.timeout_secs = secs;
        }
    }

    /// Parses TOML text without validating it.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Rejects values the generation service or the gateway cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let generation = &self.generation;

        if generation.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "generation.timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }

        if let Some(t) = generation.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::Invalid {
                    key: "generation.temperature",
                    reason: format!("{t} is outside [0, 2]"),
                });
            }
        }

        if generation.max_output_tokens == Some(0) {
            return Err(ConfigError::Invalid {
                key: "generation.max_output_tokens",
                reason: "must be greater than zero".to_string(),
            });
        }

        if generation.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "generation.model",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
