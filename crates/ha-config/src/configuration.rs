//! Typed view of the parts of configuration.yaml the server acts on

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::loader::YamlLoader;

/// Main configuration file name inside the config directory
pub const CONFIG_FILE: &str = "configuration.yaml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Climate platforms to set up; a single mapping is accepted as a list of one
    #[serde(default, deserialize_with = "one_or_many")]
    pub climate: Vec<PlatformConfig>,
}

/// One `climate:` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Integration providing the entities (e.g., "demo")
    pub platform: String,

    /// Display name override for the created entity
    #[serde(default)]
    pub name: Option<String>,
}

impl PlatformConfig {
    /// Entry for `platform` with no options
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            name: None,
        }
    }
}

impl Configuration {
    /// Load `configuration.yaml` from `config_dir`, resolving tags
    pub fn load(config_dir: impl Into<PathBuf>) -> ConfigResult<Self> {
        let loader = YamlLoader::new(config_dir)?;
        let path = loader.config_dir().join(CONFIG_FILE);
        let value = loader.load_file(CONFIG_FILE)?;
        Self::from_value(value, &path)
    }

    /// Interpret an already loaded YAML document
    pub fn from_value(value: serde_yaml::Value, source_path: &Path) -> ConfigResult<Self> {
        // An empty file parses as null
        if value.is_null() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_value(value).map_err(|e| ConfigError::ParseYaml {
            path: source_path.to_path_buf(),
            source: e,
        })?;

        if let Some(entry) = config.climate.iter().find(|p| p.platform.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "climate.platform".to_string(),
                reason: format!("platform must not be empty (entry {:?})", entry),
            });
        }

        Ok(config)
    }
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<PlatformConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(PlatformConfig),
        Many(Vec<PlatformConfig>),
        Empty(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(entry) => vec![entry],
        OneOrMany::Many(entries) => entries,
        OneOrMany::Empty(()) => Vec::new(),
    })
}
