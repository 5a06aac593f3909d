use crate::utils::errors::ConfigError;
use dotenv::dotenv;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PARTIAL_CREDIT: f64 = 0.5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3043";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Runtime settings, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct Config {
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub partial_credit: f64,
    pub bind_addr: String,
    pub sites_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            partial_credit: DEFAULT_PARTIAL_CREDIT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            sites_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(secs) = parse_var::<u64, _>(&lookup, "SEO_FETCH_TIMEOUT_SECS")? {
            if secs == 0 {
                return Err(invalid("SEO_FETCH_TIMEOUT_SECS", "0", "must be at least 1"));
            }
            config.fetch_timeout = Duration::from_secs(secs);
        }

        if let Some(credit) = parse_var::<f64, _>(&lookup, "SEO_PARTIAL_CREDIT")? {
            if !(0.0..=1.0).contains(&credit) {
                return Err(invalid(
                    "SEO_PARTIAL_CREDIT",
                    &credit.to_string(),
                    "must be between 0.0 and 1.0",
                ));
            }
            config.partial_credit = credit;
        }

        if let Some(agent) = lookup("SEO_USER_AGENT").filter(|v| !v.trim().is_empty()) {
            config.user_agent = agent;
        }
        if let Some(addr) = lookup("SEO_BIND_ADDR").filter(|v| !v.trim().is_empty()) {
            config.bind_addr = addr;
        }
        if let Some(dir) = lookup("SEO_SITES_DIR").filter(|v| !v.trim().is_empty()) {
            config.sites_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| invalid(key, &raw, &e.to_string())),
        _ => Ok(None),
    }
}

fn invalid(key: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_keys_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert_eq!(config.partial_credit, 0.5);
        assert_eq!(config.bind_addr, "0.0.0.0:3043");
        assert!(config.user_agent.contains("Chrome/91"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SEO_FETCH_TIMEOUT_SECS", "30"),
            ("SEO_PARTIAL_CREDIT", "0.25"),
            ("SEO_BIND_ADDR", "127.0.0.1:8080"),
            ("SEO_SITES_DIR", "/srv/sites"),
        ]))
        .unwrap();
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert_eq!(config.partial_credit, 0.25);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.sites_dir, PathBuf::from("/srv/sites"));
    }

    #[test]
    fn rejects_out_of_range_credit() {
        let err = Config::from_lookup(lookup_from(&[("SEO_PARTIAL_CREDIT", "1.5")])).unwrap_err();
        assert!(err.to_string().contains("SEO_PARTIAL_CREDIT"));
    }

    #[test]
    fn rejects_unparseable_timeout() {
        assert!(Config::from_lookup(lookup_from(&[("SEO_FETCH_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("SEO_FETCH_TIMEOUT_SECS", "0")])).is_err());
    }
}
