//! Runtime configuration, read from the environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::explorer::fetch::MAX_RANDOM_COUNT;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com";
/// TheMealDB's public test key
pub const DEFAULT_API_KEY: &str = "1";
pub const DEFAULT_RANDOM_COUNT: usize = 6;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog root, without the `/api/json/v1/...` suffix
    pub base_url: String,
    pub api_key: String,
    /// Size of every random batch
    pub random_count: usize,
    pub request_timeout: Duration,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            random_count: DEFAULT_RANDOM_COUNT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let base_url =
            env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = env::var("MEALDB_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());

        let random_count = parse_var("RANDOM_RECIPES_COUNT", DEFAULT_RANDOM_COUNT);
        let random_count = if random_count == 0 || random_count > MAX_RANDOM_COUNT {
            tracing::warn!(
                "RANDOM_RECIPES_COUNT must be between 1 and {}, using {}",
                MAX_RANDOM_COUNT,
                DEFAULT_RANDOM_COUNT
            );
            DEFAULT_RANDOM_COUNT
        } else {
            random_count
        };

        let timeout_secs = parse_var("MEALDB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            base_url,
            api_key,
            random_count,
            request_timeout: Duration::from_secs(timeout_secs),
            bind_addr,
        }
    }
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
