use std::env;

use thiserror::Error;

/// Connection string for the MongoDB deployment. Required.
pub const MONGO_URL_VAR: &str = "MONGO_URL";

/// Name of the database holding the status check collection. Required.
pub const DB_NAME_VAR: &str = "DB_NAME";

/// Comma-separated CORS origin allow-list. Optional, defaults to `*`.
pub const CORS_ORIGINS_VAR: &str = "CORS_ORIGINS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVar(&'static str),
}

/// # Process Configuration
///
/// Loaded once at startup from the environment (after `.env` has been
/// applied). `MONGO_URL` and `DB_NAME` are required; the process refuses to
/// start without them. An empty value counts as unset.
///
/// ## Fields
/// - `mongo_url`: MongoDB connection string
/// - `db_name`: database name
/// - `cors_origins`: origin allow-list; `["*"]` means allow all
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongo_url = required(&lookup, MONGO_URL_VAR)?;
        let db_name = required(&lookup, DB_NAME_VAR)?;
        let cors_origins =
            parse_origins(&lookup(CORS_ORIGINS_VAR).unwrap_or_else(|| "*".to_string()));

        Ok(Self {
            mongo_url,
            db_name,
            cors_origins,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

/// Splits a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
