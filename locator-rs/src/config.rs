//! Locator config: JSON, every field optional.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::LocatorError;

/// `{ "name": "app", "scopes": ["A", "B"], "log_filter": "debug" }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Label used in log records.
    pub name: String,
    /// Scopes created empty at init.
    pub scopes: Vec<String>,
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            name: "locator".to_string(),
            scopes: Vec::new(),
            log_filter: "info".to_string(),
        }
    }
}

impl LocatorConfig {
    pub fn from_json_str(text: &str) -> Result<Self, LocatorError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LocatorError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn with_scope<S: Into<String>>(mut self, scope: S) -> Self {
        self.scopes.push(scope.into());
        self
    }

    /// Scope names must be non-empty and unique.
    pub fn validate(&self) -> Result<(), LocatorError> {
        let mut seen = HashSet::new();
        for scope in &self.scopes {
            if scope.trim().is_empty() {
                return Err(LocatorError::InvalidConfig("empty scope name".into()));
            }
            if !seen.insert(scope.as_str()) {
                return Err(LocatorError::InvalidConfig(format!(
                    "duplicate scope: {}",
                    scope
                )));
            }
        }
        Ok(())
    }
}
