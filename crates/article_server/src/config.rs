//! Server configuration loaded from environment variables.
//!
//! | variable             | default                              |
//! |----------------------|--------------------------------------|
//! | `ARTICLES_DATA_PATH` | `data/articles.json`                 |
//! | `ARTICLES_BIND_ADDR` | `127.0.0.1:8888`                     |
//! | `ARTICLES_LOG_LEVEL` | `debug` (debug build) / `info`       |
//! | `ARTICLES_LOG_DIR`   | unset: stderr only                   |

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DATA_PATH_VAR: &str = "ARTICLES_DATA_PATH";
pub const BIND_ADDR_VAR: &str = "ARTICLES_BIND_ADDR";
pub const LOG_LEVEL_VAR: &str = "ARTICLES_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "ARTICLES_LOG_DIR";

const DEFAULT_DATA_PATH: &str = "data/articles.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8888";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub log_dir: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBindAddr { value: String, reason: String },
    Empty(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddr { value, reason } => {
                write!(f, "invalid {BIND_ADDR_VAR} `{value}`: {reason}")
            }
            Self::Empty(var) => write!(f, "{var} is set but empty"),
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's raw
    /// value when set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = match lookup(DATA_PATH_VAR) {
            Some(raw) => PathBuf::from(non_empty(DATA_PATH_VAR, raw)?),
            None => PathBuf::from(DEFAULT_DATA_PATH),
        };

        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                reason: err.to_string(),
            })?;

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => non_empty(LOG_LEVEL_VAR, raw)?,
            None => article_core::default_log_level().to_string(),
        };

        let log_dir = lookup(LOG_DIR_VAR)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty());

        Ok(Self {
            data_path,
            bind_addr,
            log_level,
            log_dir,
        })
    }
}

fn non_empty(var: &'static str, raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(var));
    }
    Ok(trimmed.to_string())
}
