//! YAML loader resolving `!secret` and `!env_var` tags

use crate::error::{ConfigError, ConfigResult};
use crate::secrets::Secrets;
use serde_yaml::value::TaggedValue;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// YAML loader bound to a config directory
pub struct YamlLoader {
    /// Base directory for resolving relative paths
    config_dir: PathBuf,
    /// Secrets store
    secrets: Secrets,
}

impl YamlLoader {
    /// Create a loader for `config_dir`, reading its secrets.yaml
    pub fn new(config_dir: impl Into<PathBuf>) -> ConfigResult<Self> {
        let config_dir = config_dir.into();
        let secrets = Secrets::load(&config_dir)?;
        Ok(Self {
            config_dir,
            secrets,
        })
    }

    /// Load and process a YAML file relative to the config directory
    pub fn load_file(&self, path: impl AsRef<Path>) -> ConfigResult<Value> {
        let path = self.config_dir.join(path.as_ref());
        debug!("Loading YAML file: {:?}", path);

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
            path: path.clone(),
            source: e,
        })?;

        self.load_string(&content, &path)
    }

    /// Load and process YAML from a string
    pub fn load_string(&self, content: &str, source_path: &Path) -> ConfigResult<Value> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseYaml {
            path: source_path.to_path_buf(),
            source: e,
        })?;

        self.process_value(value)
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn process_value(&self, value: Value) -> ConfigResult<Value> {
        match value {
            Value::Tagged(tagged) => self.process_tagged(*tagged),
            Value::Mapping(map) => {
                let mut result = serde_yaml::Mapping::new();
                for (k, v) in map {
                    result.insert(self.process_value(k)?, self.process_value(v)?);
                }
                Ok(Value::Mapping(result))
            }
            Value::Sequence(seq) => seq
                .into_iter()
                .map(|v| self.process_value(v))
                .collect::<ConfigResult<Vec<_>>>()
                .map(Value::Sequence),
            _ => Ok(value),
        }
    }

    fn process_tagged(&self, tagged: TaggedValue) -> ConfigResult<Value> {
        let tag = tagged.tag.to_string();
        trace!("Processing tag '{}' with value {:?}", tag, tagged.value);

        match tag.as_str() {
            "!secret" => self.process_secret(tagged.value),
            "!env_var" => self.process_env_var(tagged.value),
            _ => {
                // Unknown tag, keep it as-is but process the inner value
                let value = self.process_value(tagged.value)?;
                Ok(Value::Tagged(Box::new(TaggedValue {
                    tag: tagged.tag,
                    value,
                })))
            }
        }
    }

    /// `!secret key`
    fn process_secret(&self, value: Value) -> ConfigResult<Value> {
        let key = tag_argument("!secret", value)?;
        let secret = self.secrets.get(&key)?;
        debug!("Substituted secret: {}", key);
        Ok(Value::String(secret.to_string()))
    }

    /// `!env_var NAME` or `!env_var NAME default value`
    fn process_env_var(&self, value: Value) -> ConfigResult<Value> {
        let argument = tag_argument("!env_var", value)?;
        let (var, default) = match argument.split_once(char::is_whitespace) {
            Some((var, default)) => (var.to_string(), Some(default.trim().to_string())),
            None => (argument, None),
        };

        match (std::env::var(&var), default) {
            (Ok(value), _) => {
                debug!("Substituted env var: {}", var);
                Ok(Value::String(value))
            }
            (Err(_), Some(default)) => {
                debug!("Env var {} not set, using default", var);
                Ok(Value::String(default))
            }
            (Err(_), None) => Err(ConfigError::EnvVarNotFound { var }),
        }
    }
}

fn tag_argument(tag: &str, value: Value) -> ConfigResult<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(ConfigError::InvalidValue {
            key: tag.to_string(),
            reason: "tag argument must be a non-empty string".to_string(),
        }),
    }
}

/// Load a YAML file with full tag processing
pub fn load_yaml(config_dir: impl Into<PathBuf>, file: impl AsRef<Path>) -> ConfigResult<Value> {
    YamlLoader::new(config_dir)?.load_file(file)
}

/// Load a YAML string with tag processing
pub fn load_yaml_string(
    config_dir: impl Into<PathBuf>,
    content: &str,
    source_name: &str,
) -> ConfigResult<Value> {
    YamlLoader::new(config_dir)?.load_string(content, Path::new(source_name))
}
