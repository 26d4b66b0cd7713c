use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "playai-tts";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub output_dir: PathBuf,
    pub static_dir: PathBuf,
    pub provider_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("GROQ_API_KEY"))?;

        let port = var("PORT", "3000");
        let port = port.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port,
        })?;

        let timeout = var("PROVIDER_TIMEOUT_SECS", "60");
        let provider_timeout_secs = match timeout.parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                return Err(ConfigError::Invalid {
                    name: "PROVIDER_TIMEOUT_SECS",
                    value: timeout,
                })
            }
        };

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            api_key,
            base_url: var("GROQ_BASE_URL", DEFAULT_BASE_URL),
            model: var("TTS_MODEL", DEFAULT_MODEL),
            output_dir: var("OUTPUT_DIR", "./tts_outputs").into(),
            static_dir: var("STATIC_DIR", "static").into(),
            provider_timeout_secs,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value: self.host.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(config.port, 3000);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, "playai-tts");
        assert_eq!(config.output_dir, PathBuf::from("./tts_outputs"));
        assert_eq!(config.provider_timeout_secs, 60);
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_missing_key() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("GROQ_API_KEY"));

        let err = Config::from_lookup(lookup(&[("GROQ_API_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("GROQ_API_KEY"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GROQ_API_KEY", "k"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("OUTPUT_DIR", "/tmp/audio"),
            ("PROVIDER_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/audio"));
        assert_eq!(config.provider_timeout_secs, 15);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[("GROQ_API_KEY", "k"), ("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

        let err = Config::from_lookup(lookup(&[("GROQ_API_KEY", "k"), ("PROVIDER_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PROVIDER_TIMEOUT_SECS", .. }));

        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "k"), ("HOST", "not a host")])).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
