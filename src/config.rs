use std::{env, time::Duration};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://coach.kportals.net/api/v1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub api_url: String,
    pub api_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let api_url = match lookup("COACH_API_URL") {
            Some(value) if value.starts_with("http://") || value.starts_with("https://") => value,
            Some(value) => {
                return Err(ConfigError::Invalid {
                    name: "COACH_API_URL",
                    value,
                });
            }
            None => DEFAULT_API_URL.to_string(),
        };

        let timeout_secs = match lookup("COACH_API_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "COACH_API_TIMEOUT_SECS",
                        value,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            api_url,
            api_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("PORT", "9000"),
            ("COACH_API_URL", "http://127.0.0.1:4000/api/v1"),
            ("COACH_API_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_url, "http://127.0.0.1:4000/api/v1");
        assert_eq!(config.api_timeout, Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("PORT", "eighty")]).is_err());
        assert!(config(&[("COACH_API_URL", "coach.local")]).is_err());
        assert_eq!(
            config(&[("COACH_API_TIMEOUT_SECS", "0")]),
            Err(ConfigError::Invalid {
                name: "COACH_API_TIMEOUT_SECS",
                value: "0".to_string()
            })
        );
    }
}
