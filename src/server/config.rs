use std::{fmt::Display, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_MAX_OVERFLOW: u32 = 20;
const DEFAULT_POOL_TIMEOUT_SECS: u64 = 10;
const DEFAULT_POOL_RECYCLE_SECS: u64 = 3600;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub pool: PoolConfig,
}

/// Connection pool tuning.
///
/// The pool keeps `pool_size` connections and may grow by `max_overflow` more under load.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolConfig {
    pub pool_size: u32,
    pub max_overflow: u32,
    /// How long a request waits for a free connection before failing.
    pub pool_timeout: Duration,
    /// Connections older than this are closed and replaced.
    pub pool_recycle: Duration,
    /// Check that a connection is alive before handing it out.
    pub pre_ping: bool,
    /// Log every executed SQL statement.
    pub echo: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            max_overflow: DEFAULT_MAX_OVERFLOW,
            pool_timeout: Duration::from_secs(DEFAULT_POOL_TIMEOUT_SECS),
            pool_recycle: Duration::from_secs(DEFAULT_POOL_RECYCLE_SECS),
            pre_ping: true,
            echo: false,
        }
    }
}

impl PoolConfig {
    /// Upper bound on open connections: the base size plus the overflow allowance.
    pub fn max_connections(&self) -> u32 {
        self.pool_size.saturating_add(self.max_overflow)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Every value is validated up front so that a misconfigured process fails before it
    /// opens any connection.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let pool_size = parse_var(&lookup, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(invalid("DB_POOL_SIZE", "0", "pool size must be at least 1"));
        }

        let max_overflow = parse_var(&lookup, "DB_MAX_OVERFLOW", DEFAULT_MAX_OVERFLOW)?;

        let pool_timeout = parse_var(&lookup, "DB_POOL_TIMEOUT_SECS", DEFAULT_POOL_TIMEOUT_SECS)?;
        if pool_timeout == 0 {
            return Err(invalid(
                "DB_POOL_TIMEOUT_SECS",
                "0",
                "timeout must be at least 1 second",
            ));
        }

        let pool_recycle = parse_var(&lookup, "DB_POOL_RECYCLE_SECS", DEFAULT_POOL_RECYCLE_SECS)?;
        if pool_recycle == 0 {
            return Err(invalid(
                "DB_POOL_RECYCLE_SECS",
                "0",
                "connection lifetime must be at least 1 second",
            ));
        }

        let pre_ping = parse_bool(&lookup, "DB_POOL_PRE_PING", true)?;
        let echo = parse_bool(&lookup, "DB_ECHO", false)?;

        Ok(Self {
            database_url,
            bind_addr,
            pool: PoolConfig {
                pool_size,
                max_overflow,
                pool_timeout: Duration::from_secs(pool_timeout),
                pool_recycle: Duration::from_secs(pool_recycle),
                pre_ping,
                echo,
            },
        })
    }
}

fn invalid(name: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| invalid(name, &value, e.to_string())),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, name: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(name, &value, "expected true or false")),
    }
}
