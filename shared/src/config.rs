//! Configuration management for the deploy functions.

use std::fmt;

use tracing::{debug, info};

use crate::env::{EnvSource, ProcessEnv};
use crate::Result;

pub const BUCKET_NAME_VAR: &str = "AWS_BUCKET_NAME";
pub const SELDON_API_URL_VAR: &str = "SELDON_API_URL";
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

pub const DEFAULT_BUCKET_NAME: &str = "seldon-sklearn";
pub const DEFAULT_SELDON_API_URL: &str = "http://localhost:8000/models/";

/// Application configuration loaded from environment variables.
///
/// Read-only once built. Credentials are redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    bucket_name: String,
    seldon_api_url: String,
    access_key_id: String,
    secret_access_key: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A variable that is set to a value that is not valid unicode fails with
    /// [`Error::NotUnicode`](crate::Error::NotUnicode), not as missing.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from an arbitrary environment source.
    ///
    /// Required variables are checked in order: `AWS_ACCESS_KEY_ID`, then
    /// `AWS_SECRET_ACCESS_KEY`. The first one missing is reported.
    pub fn from_source(env: &impl EnvSource) -> Result<Self> {
        let bucket_name = optional(env, BUCKET_NAME_VAR, DEFAULT_BUCKET_NAME)?;
        let seldon_api_url = optional(env, SELDON_API_URL_VAR, DEFAULT_SELDON_API_URL)?;
        let access_key_id = env.require_var(ACCESS_KEY_ID_VAR)?;
        let secret_access_key = env.require_var(SECRET_ACCESS_KEY_VAR)?;

        info!(
            bucket_name = %bucket_name,
            seldon_api_url = %seldon_api_url,
            "Loaded configuration"
        );

        Ok(Self {
            bucket_name,
            seldon_api_url,
            access_key_id,
            secret_access_key,
        })
    }

    /// S3 bucket model artifacts are uploaded to.
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Base URL of the Seldon model-serving API.
    pub fn seldon_api_url(&self) -> &str {
        &self.seldon_api_url
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }
}

fn optional(env: &impl EnvSource, key: &str, default: &str) -> Result<String> {
    Ok(env.get_var(key)?.unwrap_or_else(|| {
        debug!(var = key, default, "Environment variable not set, using default");
        default.to_string()
    }))
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bucket_name", &self.bucket_name)
            .field("seldon_api_url", &self.seldon_api_url)
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied_when_optional_unset() {
        let vars = env(&[
            ("AWS_ACCESS_KEY_ID", "AKIA1"),
            ("AWS_SECRET_ACCESS_KEY", "s3cr3t"),
        ]);
        let config = Config::from_source(&vars).unwrap();
        assert_eq!(config.bucket_name(), "seldon-sklearn");
        assert_eq!(config.seldon_api_url(), "http://localhost:8000/models/");
        assert_eq!(config.access_key_id(), "AKIA1");
        assert_eq!(config.secret_access_key(), "s3cr3t");
    }

    #[test]
    fn test_bucket_override_keeps_default_url() {
        let vars = env(&[
            ("AWS_BUCKET_NAME", "mybucket"),
            ("AWS_ACCESS_KEY_ID", "K"),
            ("AWS_SECRET_ACCESS_KEY", "S"),
        ]);
        let config = Config::from_source(&vars).unwrap();
        assert_eq!(config.bucket_name(), "mybucket");
        assert_eq!(config.seldon_api_url(), DEFAULT_SELDON_API_URL);
        assert_eq!(config.access_key_id(), "K");
        assert_eq!(config.secret_access_key(), "S");
    }

    #[test]
    fn test_all_values_taken_literally() {
        let vars = env(&[
            ("AWS_BUCKET_NAME", ""),
            ("SELDON_API_URL", "not a url"),
            ("AWS_ACCESS_KEY_ID", " K "),
            ("AWS_SECRET_ACCESS_KEY", "S"),
        ]);
        let config = Config::from_source(&vars).unwrap();
        assert_eq!(config.bucket_name(), "");
        assert_eq!(config.seldon_api_url(), "not a url");
        assert_eq!(config.access_key_id(), " K ");
    }

    #[test]
    fn test_empty_env_reports_access_key_first() {
        let err = Config::from_source(&env(&[])).unwrap_err();
        assert_eq!(err.missing_var(), Some("AWS_ACCESS_KEY_ID"));
    }

    #[test]
    fn test_missing_secret_reported() {
        let vars = env(&[
            ("AWS_BUCKET_NAME", "mybucket"),
            ("SELDON_API_URL", "http://seldon/"),
            ("AWS_ACCESS_KEY_ID", "K"),
        ]);
        let err = Config::from_source(&vars).unwrap_err();
        assert_eq!(err.missing_var(), Some("AWS_SECRET_ACCESS_KEY"));
    }

    #[test]
    fn test_missing_access_key_regardless_of_optionals() {
        let vars = env(&[
            ("AWS_BUCKET_NAME", "mybucket"),
            ("SELDON_API_URL", "http://seldon/"),
            ("AWS_SECRET_ACCESS_KEY", "S"),
        ]);
        let err = Config::from_source(&vars).unwrap_err();
        assert_eq!(err.missing_var(), Some("AWS_ACCESS_KEY_ID"));
    }

    #[test]
    fn test_from_env_reports_unreadable_variable() {
        struct Unreadable;

        impl EnvSource for Unreadable {
            fn get_var(&self, key: &str) -> Result<Option<String>> {
                Err(crate::Error::NotUnicode {
                    var: key.to_string(),
                })
            }
        }

        let err = Config::from_source(&Unreadable).unwrap_err();
        assert!(matches!(err, crate::Error::NotUnicode { ref var } if var == BUCKET_NAME_VAR));
        assert_eq!(err.missing_var(), None);
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let vars = env(&[
            ("AWS_ACCESS_KEY_ID", "AKIA1"),
            ("AWS_SECRET_ACCESS_KEY", "s3cr3t"),
        ]);
        let config = Config::from_source(&vars).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("seldon-sklearn"));
        assert!(!debug.contains("AKIA1"));
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("[REDACTED]"));
    }
}
