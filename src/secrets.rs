use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default secrets file location, relative to the working directory.
pub const DEFAULT_SECRETS_PATH: &str = "secrets.json";

/// Opaque bag of deployment secrets.
///
/// Both servers load this at startup to verify the secrets mount is in place;
/// no request handler reads a value out of it.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Secrets(HashMap<String, JsonValue>);

impl Secrets {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot open '{}'", path.display()))?;
        let secrets: Secrets = serde_json::from_str(&contents)
            .with_context(|| format!("cannot parse '{}'", path.display()))?;
        Ok(secrets)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }
}
