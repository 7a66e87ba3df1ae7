//! Home Assistant climate demo server
//!
//! Loads configuration.yaml, sets up the configured climate platforms and
//! polls their entities until Ctrl-C.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ha_climate::{ClimatePlatform, SharedClimatePlatform};
use ha_config::{Configuration, PlatformConfig, CONFIG_FILE};
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the config directory
const ENV_CONFIG_DIR: &str = "HA_CONFIG_DIR";

/// Environment variable overriding the polling interval, in seconds
const ENV_SCAN_INTERVAL: &str = "HA_SCAN_INTERVAL";

/// Polling interval used when none is configured
const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(60);

/// The running instance: one platform per domain, here only climate
pub struct HomeAssistant {
    /// Climate entities and their states
    pub climate: SharedClimatePlatform,
}

impl HomeAssistant {
    /// Create a new instance with empty platforms
    pub fn new() -> Self {
        Self {
            climate: Arc::new(ClimatePlatform::new()),
        }
    }

    /// Set up every climate platform in `config`, returning the entity count
    pub fn setup(&self, config: &Configuration) -> usize {
        let mut registered = 0;
        for platform in &config.climate {
            match platform.platform.as_str() {
                ha_demo::PLATFORM => {
                    registered += ha_demo::setup_platform(platform, &*self.climate).len();
                }
                other => warn!(platform = %other, "Unknown climate platform, skipping"),
            }
        }
        registered
    }
}

impl Default for HomeAssistant {
    fn default() -> Self {
        Self::new()
    }
}

/// Config directory: first CLI argument, then `HA_CONFIG_DIR`, then `.`
fn config_dir(arg: Option<String>, env: Option<String>) -> PathBuf {
    arg.or(env)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Interval in whole seconds; missing, zero or unparsable values use the default
fn scan_interval(raw: Option<String>) -> Duration {
    match raw.as_deref().map(str::trim).map(str::parse::<u64>) {
        Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
        Some(_) => {
            warn!("Invalid {}, using {:?}", ENV_SCAN_INTERVAL, DEFAULT_SCAN_INTERVAL);
            DEFAULT_SCAN_INTERVAL
        }
        None => DEFAULT_SCAN_INTERVAL,
    }
}

/// Load configuration, falling back to a single demo platform without a file
fn load_configuration(dir: &Path) -> Result<Configuration> {
    if !dir.join(CONFIG_FILE).exists() {
        info!(config_dir = ?dir, "No {} found, starting the demo platform", CONFIG_FILE);
        return Ok(Configuration {
            climate: vec![PlatformConfig::new(ha_demo::PLATFORM)],
        });
    }

    Configuration::load(dir).with_context(|| format!("loading configuration from {:?}", dir))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Home Assistant (Rust) climate demo");

    let dir = config_dir(std::env::args().nth(1), std::env::var(ENV_CONFIG_DIR).ok());
    let config = load_configuration(&dir)?;
    let interval = scan_interval(std::env::var(ENV_SCAN_INTERVAL).ok());

    let hass = HomeAssistant::new();
    let registered = hass.setup(&config);
    info!(entities = registered, "Climate platforms set up");

    for state in hass.climate.states() {
        info!(
            entity_id = %state.entity_id,
            state = %state.state,
            attributes = %serde_json::to_string(&state.attributes).unwrap_or_default(),
            "Initial state"
        );
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let updates = {
        let climate = hass.climate.clone();
        tokio::spawn(async move { climate.run_updates(interval, shutdown_rx).await })
    };

    info!("Home Assistant is running");
    tokio::signal::ctrl_c().await?;
    info!("Shutting down...");

    // A closed receiver means the update task already ended
    let _ = shutdown_tx.send(true);
    updates.await?;

    Ok(())
}
