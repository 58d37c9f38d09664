//! Carrier endpoint and credentials.
//!
//! Settings come from the environment:
//!
//! | Variable | Required | Default |
//! |---|---|---|
//! | `SPRING_API_KEY` | yes | |
//! | `SPRING_API_URL` | no | [`DEFAULT_API_URL`] (test mode) |
//!
//! Binaries usually load a `.env` file first (for instance with `dotenvy`)
//! and then call [`CourierConfig::from_env`].

use std::fmt;

use crate::CourierError;
use crate::limits::DEFAULT_API_URL;

pub const API_KEY_VAR: &str = "SPRING_API_KEY";
pub const API_URL_VAR: &str = "SPRING_API_URL";

#[derive(Clone, PartialEq, Eq)]
pub struct CourierConfig {
    pub api_url: String,
    pub api_key: String,
}

impl CourierConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        CourierConfig {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads the configuration from process environment variables.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let api_key = get(API_KEY_VAR).ok_or(CourierError::Config { var: API_KEY_VAR })?;
        let api_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(CourierConfig { api_url, api_key })
    }
}

// Keeps the key out of logs.
impl fmt::Debug for CourierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CourierConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults_url() {
        let config = CourierConfig::from_lookup(lookup(&[(API_KEY_VAR, "f16753b55cac6c6e")])).unwrap();
        assert_eq!(config.api_key, "f16753b55cac6c6e");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_url_override() {
        let config = CourierConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "key"),
            (API_URL_VAR, "https://mtapi.net/"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://mtapi.net/");
    }

    #[test]
    fn test_missing_key() {
        let err = CourierConfig::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap_err();
        match err {
            CourierError::Config { var } => assert_eq!(var, API_KEY_VAR),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = CourierConfig::new("https://mtapi.net/", "secret");
        let debug = format!("{config:?}");
        assert!(debug.contains("https://mtapi.net/"));
        assert!(!debug.contains("secret"));
    }
}
