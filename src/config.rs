use crate::error::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_REGION: &str = "na1";
const DEFAULT_DDRAGON_VERSION: &str = "7.16.1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    /// Overrides the host derived from `region` when set.
    pub api_base: Option<String>,
    pub ddragon_version: String,
    /// Number of recent matches fetched per search.
    pub match_count: usize,
    pub fetch_workers: usize,
    pub request_timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
    pub requests_per_second: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("RIOT_API_KEY not found in environment or .env file".to_string())
            })?;

        let region = lookup("RIOT_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string());
        let api_base = lookup("STATS_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty());
        let ddragon_version =
            lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_DDRAGON_VERSION.to_string());

        Ok(Config {
            api_key,
            region,
            api_base,
            ddragon_version,
            match_count: parse_or(&lookup, "MATCH_COUNT", 5)?,
            fetch_workers: parse_or(&lookup, "FETCH_WORKERS", 4usize)?.max(1),
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 10)?),
            max_retries: parse_or(&lookup, "MAX_RETRIES", 2)?,
            retry_backoff: Duration::from_millis(parse_or(&lookup, "RETRY_BACKOFF_MS", 250)?),
            requests_per_second: parse_or(&lookup, "REQUESTS_PER_SECOND", 20u32)?.max(1),
        })
    }

    pub fn api_base(&self) -> String {
        match &self.api_base {
            Some(base) => base.clone(),
            None => format!("https://{}.api.riotgames.com", self.region),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} must be a number, got {:?}", key, raw))
        }),
        None => Ok(default),
    }
}
