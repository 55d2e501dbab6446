use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::domain::assistant::ReplyTable;

/// Default simulated latency of an assistant reply.
pub const DEFAULT_ASSISTANT_DELAY_MS: u64 = 1500;
/// Default simulated latency of a prompt optimizer run.
pub const DEFAULT_OPTIMIZER_DELAY_MS: u64 = 2000;

/// Errors raised while reading the storefront configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a whole number of milliseconds, got `{value}`")]
    InvalidDelay { name: &'static str, value: String },
    #[error("failed to read assistant table `{path}`: {source}")]
    TableRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse assistant table `{path}`: {source}")]
    TableParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Storefront-specific settings shared with handlers through `web::Data`.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Simulated latency before an assistant reply is produced.
    pub assistant_delay: Duration,
    /// Simulated latency before optimized prompts are produced.
    pub optimizer_delay: Duration,
    /// Keyword table driving the scripted assistant.
    pub reply_table: ReplyTable,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            assistant_delay: Duration::from_millis(DEFAULT_ASSISTANT_DELAY_MS),
            optimizer_delay: Duration::from_millis(DEFAULT_OPTIMIZER_DELAY_MS),
            reply_table: ReplyTable::default(),
        }
    }
}

impl StorefrontConfig {
    /// Configuration without simulated latency.
    pub fn immediate() -> Self {
        Self {
            assistant_delay: Duration::ZERO,
            optimizer_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let assistant_delay = parse_delay(
            "ASSISTANT_REPLY_DELAY_MS",
            lookup("ASSISTANT_REPLY_DELAY_MS"),
            DEFAULT_ASSISTANT_DELAY_MS,
        )?;
        let optimizer_delay = parse_delay(
            "OPTIMIZER_DELAY_MS",
            lookup("OPTIMIZER_DELAY_MS"),
            DEFAULT_OPTIMIZER_DELAY_MS,
        )?;

        let reply_table = match lookup("ASSISTANT_TABLE").filter(|path| !path.trim().is_empty()) {
            Some(path) => load_reply_table(&path)?,
            None => ReplyTable::default(),
        };

        Ok(Self {
            assistant_delay,
            optimizer_delay,
            reply_table,
        })
    }
}

fn parse_delay(
    name: &'static str,
    value: Option<String>,
    default_ms: u64,
) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(Duration::from_millis(default_ms)),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidDelay { name, value }),
    }
}

fn load_reply_table(path: &str) -> Result<ReplyTable, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::TableRead {
        path: path.to_string(),
        source,
    })?;

    let table = ReplyTable::from_json(&json).map_err(|source| ConfigError::TableParse {
        path: path.to_string(),
        source,
    })?;

    log::info!("Loaded assistant reply table v{} from {path}", table.version);
    Ok(table)
}
