//! YAML configuration loading for the climate server
//!
//! Reads `configuration.yaml` from a config directory and resolves the
//! custom tags the server understands:
//!
//! - `!secret key` - Substitute from secrets.yaml
//! - `!env_var VAR [default]` - Environment variable substitution
//!
//! # Example
//!
//! ```ignore
//! use ha_config::Configuration;
//!
//! let config = Configuration::load("/config")?;
//! for platform in &config.climate {
//!     println!("climate platform: {}", platform.platform);
//! }
//! ```

mod configuration;
mod error;
mod loader;
mod secrets;

pub use configuration::{Configuration, PlatformConfig, CONFIG_FILE};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_yaml, load_yaml_string, YamlLoader};
pub use secrets::Secrets;
