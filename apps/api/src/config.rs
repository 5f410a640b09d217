use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated latency of the summary and cover-letter generators.
    pub generation_delay: Duration,
    /// Simulated latency of the ATS analyzer.
    pub analysis_delay: Duration,
    pub seed_sample_jobs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            generation_delay: Duration::from_millis(2500),
            analysis_delay: Duration::from_millis(3000),
            seed_sample_jobs: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            generation_delay: parse_delay("GENERATION_DELAY_MS", defaults.generation_delay)?,
            analysis_delay: parse_delay("ANALYSIS_DELAY_MS", defaults.analysis_delay)?,
            seed_sample_jobs: parse_env("SEED_SAMPLE_JOBS", defaults.seed_sample_jobs)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(parse_env_opt(key)?.unwrap_or(default))
}

fn parse_env_opt<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
        Err(_) => Ok(None),
    }
}

/// Milliseconds from `key`, or `default` when unset.
fn parse_delay(key: &str, default: Duration) -> Result<Duration> {
    Ok(parse_env_opt::<u64>(key)?
        .map(Duration::from_millis)
        .unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.generation_delay, Duration::from_millis(2500));
        assert_eq!(config.analysis_delay, Duration::from_millis(3000));
        assert!(config.seed_sample_jobs);
    }

    #[test]
    fn test_parse_env_falls_back_when_unset() {
        let port: u16 = parse_env("RESUMEFORGE_TEST_UNSET_PORT", 9000).unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_delay_uses_default_when_unset() {
        let default = Config::default().analysis_delay;
        let delay = parse_delay("RESUMEFORGE_TEST_UNSET_DELAY", default).unwrap();
        assert_eq!(delay, default);
    }

    #[test]
    fn test_parse_delay_reads_millis() {
        std::env::set_var("RESUMEFORGE_TEST_SET_DELAY", " 40 ");
        let delay = parse_delay("RESUMEFORGE_TEST_SET_DELAY", Duration::from_secs(9)).unwrap();
        assert_eq!(delay, Duration::from_millis(40));
        std::env::remove_var("RESUMEFORGE_TEST_SET_DELAY");
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUMEFORGE_TEST_BAD_DELAY", "soon");
        let result: Result<u64> = parse_env("RESUMEFORGE_TEST_BAD_DELAY", 10);
        assert!(result.is_err());
        std::env::remove_var("RESUMEFORGE_TEST_BAD_DELAY");
    }
}
