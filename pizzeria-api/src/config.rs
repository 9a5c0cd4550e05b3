use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;

const DEFAULT_DATABASE_URL: &str = "app.db";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5555";
const DEFAULT_POOL_SIZE: u32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub pool_size: u32,
}

impl Config {
    /// Reads `DB_URI`, `BIND_ADDR` and `DB_POOL_SIZE`, after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DB_URI")
            .map(|uri| normalize_database_url(&uri))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "DB_POOL_SIZE",
                        value,
                    });
                }
            },
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
        })
    }
}

/// Accepts a plain path or a SQLAlchemy style URL, where `sqlite:///app.db`
/// is relative and `sqlite:////srv/app.db` is absolute.
fn normalize_database_url(uri: &str) -> String {
    uri.strip_prefix("sqlite:///").unwrap_or(uri).to_string()
}
