/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables (optionally populated from a `.env` file by the
 * binary), with defaults suited to local development.
 *
 * # Variables
 *
 * - `DATABASE_URL` - SQLite URL (default `sqlite://postboard.db?mode=rwc`)
 * - `COOKIE_SECRET` - cookie signing secret, at least 32 bytes
 * - `SERVER_PORT` - listen port (default 4000)
 * - `CORS_ORIGIN` - browser origin allowed to send credentials
 * - `BCRYPT_COST` - bcrypt work factor (default 10)
 * - `LIVE_CHANNEL_CAPACITY` - live broadcast buffer (default 1000)
 */

use sha2::{Digest, Sha512};
use thiserror::Error;
use tower_cookies::Key;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://postboard.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_BCRYPT_COST: u32 = 10;
pub const DEFAULT_LIVE_CHANNEL_CAPACITY: usize = 1000;

/// Work factor bounds accepted by bcrypt
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Shortest accepted `COOKIE_SECRET`
pub const MIN_COOKIE_SECRET_LEN: usize = 32;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("COOKIE_SECRET must be at least {min} bytes", min = MIN_COOKIE_SECRET_LEN)]
    ShortCookieSecret,
    #[error("BCRYPT_COST must be between {min} and {max}, got {0}", min = MIN_BCRYPT_COST, max = MAX_BCRYPT_COST)]
    BcryptCostOutOfRange(u32),
}

/// Resolved server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub cookie_secret: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub bcrypt_cost: u32,
    pub live_channel_capacity: usize,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let cookie_secret = match get("COOKIE_SECRET") {
            Some(secret) if secret.len() < MIN_COOKIE_SECRET_LEN => {
                return Err(ConfigError::ShortCookieSecret)
            }
            Some(secret) => secret,
            None => {
                tracing::warn!("COOKIE_SECRET not set; using a random secret, sessions will not survive a restart");
                random_secret()
            }
        };

        let port = parse_or("SERVER_PORT", get("SERVER_PORT"), DEFAULT_PORT)?;
        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), DEFAULT_BCRYPT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::BcryptCostOutOfRange(bcrypt_cost));
        }
        let live_channel_capacity = parse_or(
            "LIVE_CHANNEL_CAPACITY",
            get("LIVE_CHANNEL_CAPACITY"),
            DEFAULT_LIVE_CHANNEL_CAPACITY,
        )?;
        if live_channel_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                name: "LIVE_CHANNEL_CAPACITY",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            database_url,
            cookie_secret,
            port,
            cors_origin: get("CORS_ORIGIN"),
            bcrypt_cost,
            live_channel_capacity,
        })
    }

    /// Signing key for the session cookie
    ///
    /// The secret is stretched to the 64 bytes the cookie jar needs with
    /// SHA-512, so the same secret always yields the same key.
    pub fn cookie_key(&self) -> Key {
        cookie_key_from_secret(&self.cookie_secret)
    }
}

pub fn cookie_key_from_secret(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidValue { name, value })
        }
    }
}

fn random_secret() -> String {
    rand::random::<[u8; 32]>()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
