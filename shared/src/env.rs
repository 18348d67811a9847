//! Environment variable access.
//!
//! Loaders read through [`EnvSource`] instead of `std::env` so tests can
//! inject a plain map. [`ProcessEnv`] is the adapter used at the real
//! process boundary.

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

use crate::{Error, Result};

/// Read access to a key-value environment snapshot.
pub trait EnvSource {
    /// Get a variable, or `Ok(None)` if it is not set.
    ///
    /// Fails only when the variable is set but cannot be read as a string.
    fn get_var(&self, key: &str) -> Result<Option<String>>;

    /// Get a variable that must be set.
    fn require_var(&self, key: &str) -> Result<String> {
        self.get_var(key)?.ok_or_else(|| Error::MissingRequiredConfig {
            var: key.to_string(),
        })
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get_var(&self, key: &str) -> Result<Option<String>> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::NotUnicode {
                var: key.to_string(),
            }),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn get_var(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get_var(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key).cloned())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get_var(&self, key: &str) -> Result<Option<String>> {
        (**self).get_var(key)
    }
}
