use anyhow::{anyhow, Result};
use std::str::FromStr;
use tracing::Level;

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8000";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TABLE_NAME: &str = "Job";

const ENDPOINT_URL_VAR: &str = "DYNAMODB_ENDPOINT_URL";
const REGION_VAR: &str = "AWS_REGION";
const TABLE_NAME_VAR: &str = "JOB_TABLE_NAME";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Runtime settings, read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint override. `None` targets the regional AWS endpoint.
    pub endpoint_url: Option<String>,
    pub region: String,
    pub table_name: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    ///
    /// An unset endpoint falls back to the local emulator; an empty one
    /// disables the override.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let endpoint_url = match lookup(ENDPOINT_URL_VAR) {
            None => Some(DEFAULT_ENDPOINT_URL.to_string()),
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url),
        };

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(level) => Level::from_str(&level)
                .map_err(|_| anyhow!("Invalid {LOG_LEVEL_VAR} '{level}'"))?,
            None => Level::INFO,
        };

        Ok(Self {
            endpoint_url,
            region: lookup(REGION_VAR).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            table_name: lookup(TABLE_NAME_VAR).unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            log_level,
        })
    }

    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("local DynamoDB ({url})"),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}
