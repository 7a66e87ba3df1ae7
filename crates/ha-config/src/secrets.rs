//! Secrets loaded from `secrets.yaml` next to the configuration file

use crate::error::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Secrets file name inside the config directory
const SECRETS_FILE: &str = "secrets.yaml";

/// Key/value secrets, all stored as strings
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    secrets: HashMap<String, String>,
}

impl Secrets {
    /// Load `secrets.yaml` from `config_dir`
    ///
    /// A missing file yields an empty store; `!secret` lookups then fail with
    /// [`ConfigError::SecretNotFound`].
    pub fn load(config_dir: &Path) -> ConfigResult<Self> {
        let path = config_dir.join(SECRETS_FILE);

        if !path.exists() {
            debug!("No secrets.yaml found at {:?}, using empty secrets", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
            path: path.clone(),
            source: e,
        })?;

        let raw: HashMap<String, serde_yaml::Value> =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.clone(),
                source: e,
            })?;

        let secrets: HashMap<String, String> = raw
            .into_iter()
            .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key, v)))
            .collect();

        debug!("Loaded {} secrets from {:?}", secrets.len(), path);
        Ok(Self { secrets })
    }

    /// Get a secret by key
    pub fn get(&self, key: &str) -> ConfigResult<&str> {
        self.secrets
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::SecretNotFound {
                key: key.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

/// Secrets are scalars; nested mappings and sequences are skipped
fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}
