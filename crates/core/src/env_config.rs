//! Environment-driven configuration with warn-level logging for invalid values.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{
    DEFAULT_MIN_MOBILE_QUERY_LEN, DEFAULT_MIN_TEXT_QUERY_LEN, DEFAULT_POOL_SIZE, EXPORT_FILE_NAME,
};

pub const DB_PATH_ENV: &str = "PMS_SUGGEST_DB_PATH";
pub const DB_POOL_SIZE_ENV: &str = "PMS_SUGGEST_DB_POOL_SIZE";
pub const MIN_MOBILE_QUERY_LEN_ENV: &str = "PMS_SUGGEST_MIN_MOBILE_QUERY_LEN";
pub const MIN_TEXT_QUERY_LEN_ENV: &str = "PMS_SUGGEST_MIN_TEXT_QUERY_LEN";

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    parse_with_default(var, std::env::var(var).ok().as_deref(), default)
}

fn parse_with_default<T: FromStr + Display>(var: &str, raw: Option<&str>, default: T) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

/// Default location of the store file under the platform data directory.
#[must_use]
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pms-suggest")
        .join("pms-db.sqlite3")
}

/// Runtime settings for the suggestion cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestConfig {
    pub db_path: PathBuf,
    pub pool_size: u32,
    pub min_mobile_query_len: usize,
    pub min_text_query_len: usize,
    pub export_file_name: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            pool_size: DEFAULT_POOL_SIZE,
            min_mobile_query_len: DEFAULT_MIN_MOBILE_QUERY_LEN,
            min_text_query_len: DEFAULT_MIN_TEXT_QUERY_LEN,
            export_file_name: EXPORT_FILE_NAME.to_owned(),
        }
    }
}

impl SuggestConfig {
    /// Config from the process environment; invalid numbers fall back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::build(
            std::env::var(DB_PATH_ENV).ok(),
            env_parse_with_default(DB_POOL_SIZE_ENV, DEFAULT_POOL_SIZE),
            env_parse_with_default(MIN_MOBILE_QUERY_LEN_ENV, DEFAULT_MIN_MOBILE_QUERY_LEN),
            env_parse_with_default(MIN_TEXT_QUERY_LEN_ENV, DEFAULT_MIN_TEXT_QUERY_LEN),
        )
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::build(
            lookup(DB_PATH_ENV),
            parse_with_default(
                DB_POOL_SIZE_ENV,
                lookup(DB_POOL_SIZE_ENV).as_deref(),
                DEFAULT_POOL_SIZE,
            ),
            parse_with_default(
                MIN_MOBILE_QUERY_LEN_ENV,
                lookup(MIN_MOBILE_QUERY_LEN_ENV).as_deref(),
                DEFAULT_MIN_MOBILE_QUERY_LEN,
            ),
            parse_with_default(
                MIN_TEXT_QUERY_LEN_ENV,
                lookup(MIN_TEXT_QUERY_LEN_ENV).as_deref(),
                DEFAULT_MIN_TEXT_QUERY_LEN,
            ),
        )
    }

    fn build(
        db_path: Option<String>,
        pool_size: u32,
        min_mobile_query_len: usize,
        min_text_query_len: usize,
    ) -> Self {
        Self {
            db_path: db_path
                .filter(|p| !p.trim().is_empty())
                .map_or_else(default_db_path, PathBuf::from),
            // r2d2 rejects an empty pool
            pool_size: pool_size.max(1),
            min_mobile_query_len,
            min_text_query_len,
            export_file_name: EXPORT_FILE_NAME.to_owned(),
        }
    }

    #[must_use]
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}
