//! Runtime settings resolved from flags, environment and defaults.

use std::str::FromStr;

use anyhow::Context;
use anyhow::Result;
use clinic_lib::DEFAULT_AUTH_URL;
use simplelog::LevelFilter;

pub const ENV_AUTH_URL: &str = "CLINIC_AUTH_URL";
pub const ENV_PAGE_SIZE: &str = "CLINIC_PAGE_SIZE";
pub const ENV_LOG_LEVEL: &str = "CLINIC_LOG_LEVEL";

/// Rows per page on list views.
pub const DEFAULT_PAGE_SIZE: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub auth_url: String,
    pub page_size: usize,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(url) = lookup(ENV_AUTH_URL) {
            settings.auth_url = url;
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            settings.page_size = parse_page_size(&size)
                .with_context(|| format!("{} is not a valid page size", ENV_PAGE_SIZE))?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            settings.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| anyhow::anyhow!("{}={:?} is not a log level", ENV_LOG_LEVEL, level))?;
        }

        Ok(settings)
    }

    /// Flags given on the command line win over everything else.
    pub fn with_overrides(mut self, auth_url: Option<String>, page_size: Option<usize>) -> Self {
        if let Some(url) = auth_url {
            self.auth_url = url;
        }
        if let Some(size) = page_size {
            self.page_size = size;
        }
        self
    }
}

fn parse_page_size(raw: &str) -> Result<usize> {
    let size: usize = raw.trim().parse()?;
    anyhow::ensure!(size > 0, "page size must be at least 1");
    Ok(size)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.auth_url, "http://localhost:8080/apiPetNova/auth");
        assert_eq!(settings.page_size, 7);
    }

    #[test]
    fn test_env_values() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_AUTH_URL, "https://clinic.example/auth"),
            (ENV_PAGE_SIZE, " 10 "),
            (ENV_LOG_LEVEL, "debug"),
        ]))
        .unwrap();
        assert_eq!(settings.auth_url, "https://clinic.example/auth");
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_env_values() {
        assert!(Settings::from_lookup(lookup(&[(ENV_PAGE_SIZE, "0")])).is_err());
        assert!(Settings::from_lookup(lookup(&[(ENV_PAGE_SIZE, "seven")])).is_err());
        assert!(Settings::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")])).is_err());
    }

    #[test]
    fn test_flags_override_env() {
        let settings = Settings::from_lookup(lookup(&[(ENV_PAGE_SIZE, "10")]))
            .unwrap()
            .with_overrides(Some("http://other/auth".into()), Some(3));
        assert_eq!(settings.auth_url, "http://other/auth");
        assert_eq!(settings.page_size, 3);
    }
}
