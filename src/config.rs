// Application configuration.
// Reads the API base URL, session directory, and log filter from the environment.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

pub const BASE_URL_VAR: &str = "EMP_WEBAPI_URL";
pub const SESSION_DIR_VAR: &str = "EMP_SESSION_DIR";
pub const LOG_VAR: &str = "EMP_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the employee web API, used verbatim.
    pub api_base_url: String,
    /// Override for the session storage directory.
    pub session_dir: Option<PathBuf>,
    /// tracing-subscriber filter directive.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base_url = lookup(BASE_URL_VAR).ok_or(StoreError::MissingBaseUrl)?;
        let session_dir = lookup(SESSION_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let log_filter = lookup(LOG_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        Ok(Self {
            api_base_url,
            session_dir,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::from_lookup(lookup(&[(BASE_URL_VAR, "http://api.local/ex-emp")])).unwrap();
        assert_eq!(config.api_base_url, "http://api.local/ex-emp");
        assert!(config.session_dir.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_missing_base_url() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, StoreError::MissingBaseUrl));
    }

    #[test]
    fn test_base_url_not_validated() {
        let config = Config::from_lookup(lookup(&[(BASE_URL_VAR, "not a url/")])).unwrap();
        assert_eq!(config.api_base_url, "not a url/");
    }

    #[test]
    fn test_log_filter_precedence() {
        let config = Config::from_lookup(lookup(&[
            (BASE_URL_VAR, "x"),
            (LOG_VAR, "debug"),
            ("RUST_LOG", "warn"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "debug");

        let config = Config::from_lookup(lookup(&[(BASE_URL_VAR, "x"), ("RUST_LOG", "warn")])).unwrap();
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_session_dir_override() {
        let config =
            Config::from_lookup(lookup(&[(BASE_URL_VAR, "x"), (SESSION_DIR_VAR, "/tmp/emp")])).unwrap();
        assert_eq!(config.session_dir, Some(PathBuf::from("/tmp/emp")));
    }
}
