//! Environment-driven settings.
//!
//! Values come from the process environment (optionally seeded from `.env`
//! by the binaries). Every `from_lookup` constructor takes the lookup as a
//! closure so tests can supply a map.

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MLB_API_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: parse_or(&lookup, "HOST", Ipv4Addr::UNSPECIFIED)?,
            port: parse_or(&lookup, "PORT", 8000)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

/// Outbound client settings for the stats API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl UpstreamSettings {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MLB_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_MLB_API_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "MLB_API_BASE_URL",
                value: base_url,
            });
        }

        Ok(Self {
            base_url,
            connect_timeout: timeout_or(&lookup, "UPSTREAM_CONNECT_TIMEOUT_SECS", 5)?,
            read_timeout: timeout_or(&lookup, "UPSTREAM_READ_TIMEOUT_SECS", 30)?,
        })
    }

    /// Settings pointing at an arbitrary base, with the default timeouts.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
        }
    }
}

/// Settings for the stats deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSettings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub route_prefix: String,
}

impl StatsSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerSettings::from_lookup(&lookup)?,
            upstream: UpstreamSettings::from_lookup(&lookup)?,
            route_prefix: normalize_prefix(&lookup("MLB_ROUTE_PREFIX").unwrap_or_else(|| "/mlb".into())),
        })
    }
}

/// Settings for the demo items deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsSettings {
    pub server: ServerSettings,
    pub route_prefix: String,
}

impl ItemsSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerSettings::from_lookup(&lookup)?,
            route_prefix: normalize_prefix(
                &lookup("ITEMS_ROUTE_PREFIX").unwrap_or_else(|| "/api/v1".into()),
            ),
        })
    }
}

/// `"api/v1/"` -> `"/api/v1"`, `"/"` -> `""`
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// A zero timeout would fail every upstream call, so it is rejected.
fn timeout_or<F>(lookup: &F, key: &'static str, default_secs: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, key, default_secs)? {
        0 => Err(ConfigError::Invalid {
            key,
            value: "0".to_string(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}
