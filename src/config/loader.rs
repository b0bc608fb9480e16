//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const API_KEY_ENV: &str = "RIOT_API_KEY";
pub const PORT_ENV: &str = "PORT";
pub const BASE_URL_ENV: &str = "RIOT_API_BASE_URL";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML config file.
pub fn load_file(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load configuration: optional TOML file, then process environment, then validation.
///
/// A missing API key is not an error here; the Riot client warns about it.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_file(path)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Overlay environment variables onto `config`. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(key) = get(API_KEY_ENV) {
        config.riot.api_key = key;
    }

    if let Some(port) = get(PORT_ENV) {
        config.listener.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
            var: PORT_ENV,
            value: port.clone(),
        })?;
    }

    if let Some(base_url) = get(BASE_URL_ENV) {
        config.riot.base_url = Some(base_url);
    }

    if let Some(level) = get(LOG_LEVEL_ENV) {
        config.observability.log_level = level;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    fn write_tmp_file(s: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        write!(tmp, "{}", s).expect("write toml");
        tmp
    }

    #[test]
    fn test_defaults_without_environment() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, env(&[])).unwrap();

        assert_eq!(config.riot.api_key, "");
        assert_eq!(config.listener.port, 8081);
        assert_eq!(config.riot.timeout_secs, 10);
        assert!(config.riot.base_url.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(
            &mut config,
            env(&[
                (API_KEY_ENV, "RGAPI-test"),
                (PORT_ENV, "9000"),
                (BASE_URL_ENV, "http://127.0.0.1:4000"),
                (LOG_LEVEL_ENV, "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.riot.api_key, "RGAPI-test");
        assert_eq!(config.listener.port, 9000);
        assert_eq!(config.riot.base_url.as_deref(), Some("http://127.0.0.1:4000"));
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_empty_port_keeps_default() {
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, env(&[(PORT_ENV, "")])).unwrap();
        assert_eq!(config.listener.port, 8081);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = ServiceConfig::default();
        let err = apply_env_overrides(&mut config, env(&[(PORT_ENV, "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: PORT_ENV, .. }));
    }

    #[test]
    fn test_load_file() {
        let tmp = write_tmp_file(
            r#"
            [listener]
            port = 8090

            [riot]
            api_key = "from-file"
            timeout_secs = 5

            [observability]
            log_format = "json"
            "#,
        );
        let config = load_file(tmp.path()).expect("load config");

        assert_eq!(config.listener.port, 8090);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.riot.api_key, "from-file");
        assert_eq!(config.riot.timeout_secs, 5);
        assert_eq!(config.observability.log_format, crate::config::LogFormat::Json);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let tmp = write_tmp_file("[listener\nport = ");
        assert!(matches!(load_file(tmp.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_file(Path::new("/nonexistent/opgl-data.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
