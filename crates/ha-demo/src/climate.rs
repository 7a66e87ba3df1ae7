//! Demo climate entity
//!
//! A thermostat stand-in with fixed defaults. Commands only ever assign
//! fields; nothing is polled, persisted or sent anywhere.

use ha_climate::{
    AddEntities, ClimateEntity, ClimateEntityFeature, FanMode, OperationMode, TemperatureUnit,
};
use ha_config::PlatformConfig;
use ha_core::EntityId;
use tracing::{debug, info, trace};

/// Platform name this integration answers to in configuration.yaml
pub const PLATFORM: &str = "demo";

/// Name given to the entity when the configuration does not set one
pub const DEFAULT_NAME: &str = "Demo Climate Device";

/// Set up the demo climate platform
///
/// Creates one [`DemoClimate`] for the configuration entry and hands it to
/// `platform`. Returns the ids the platform assigned.
pub fn setup_platform(config: &PlatformConfig, platform: &dyn AddEntities) -> Vec<EntityId> {
    let entity = match config.name.as_deref() {
        Some(name) => DemoClimate::with_name(name),
        None => DemoClimate::new(),
    };

    let entities: Vec<Box<dyn ClimateEntity>> = vec![Box::new(entity)];
    let ids = platform.add_entities(entities);
    info!(count = ids.len(), "Demo climate platform set up");
    ids
}

/// In-memory climate entity
#[derive(Debug, Clone, PartialEq)]
pub struct DemoClimate {
    name: String,
    available: bool,
    temperature_unit: TemperatureUnit,
    current_temperature: f64,
    target_temperature: f64,
    target_temperature_low: f64,
    target_temperature_high: f64,
    temperature_step: f64,
    current_humidity: f64,
    target_humidity: f64,
    operation_mode: OperationMode,
    operation_modes: Vec<OperationMode>,
    fan_mode: FanMode,
    fan_modes: Vec<FanMode>,
    away_mode: bool,
    aux_heat: bool,
    supported_features: ClimateEntityFeature,
}

impl DemoClimate {
    /// Create the demo entity with its default name
    pub fn new() -> Self {
        Self::with_name(DEFAULT_NAME)
    }

    /// Create the demo entity with a custom display name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: true,
            temperature_unit: TemperatureUnit::Celsius,
            current_temperature: 24.0,
            target_temperature: 23.0,
            target_temperature_low: 20.0,
            target_temperature_high: 25.0,
            temperature_step: 1.0,
            current_humidity: 42.0,
            target_humidity: 40.0,
            operation_mode: OperationMode::Cool,
            operation_modes: OperationMode::ALL.to_vec(),
            fan_mode: FanMode::Auto,
            fan_modes: FanMode::ALL.to_vec(),
            away_mode: false,
            aux_heat: false,
            supported_features: ClimateEntityFeature::TARGET_TEMPERATURE
                | ClimateEntityFeature::TARGET_TEMPERATURE_HIGH
                | ClimateEntityFeature::TARGET_TEMPERATURE_LOW
                | ClimateEntityFeature::TARGET_HUMIDITY
                | ClimateEntityFeature::TARGET_HUMIDITY_HIGH
                | ClimateEntityFeature::TARGET_HUMIDITY_LOW
                | ClimateEntityFeature::FAN_MODE
                | ClimateEntityFeature::OPERATION_MODE
                | ClimateEntityFeature::HOLD_MODE
                | ClimateEntityFeature::SWING_MODE
                | ClimateEntityFeature::AWAY_MODE
                | ClimateEntityFeature::AUX_HEAT,
        }
    }
}

impl Default for DemoClimate {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce a numeric command input to a whole number
///
/// Truncates toward zero. NaN and infinities count as absent.
fn whole(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(f64::trunc)
}

impl ClimateEntity for DemoClimate {
    fn name(&self) -> &str {
        &self.name
    }

    fn available(&self) -> bool {
        self.available
    }

    fn supported_features(&self) -> ClimateEntityFeature {
        self.supported_features
    }

    fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    fn current_temperature(&self) -> f64 {
        self.current_temperature
    }

    fn target_temperature(&self) -> f64 {
        self.target_temperature
    }

    fn target_temperature_step(&self) -> f64 {
        self.temperature_step
    }

    fn target_temperature_high(&self) -> f64 {
        self.target_temperature_high
    }

    fn target_temperature_low(&self) -> f64 {
        self.target_temperature_low
    }

    fn current_humidity(&self) -> f64 {
        self.current_humidity
    }

    fn target_humidity(&self) -> f64 {
        self.target_humidity
    }

    fn current_operation(&self) -> OperationMode {
        self.operation_mode
    }

    fn operation_list(&self) -> &[OperationMode] {
        &self.operation_modes
    }

    fn current_fan_mode(&self) -> FanMode {
        self.fan_mode
    }

    fn fan_list(&self) -> &[FanMode] {
        &self.fan_modes
    }

    fn is_away_mode_on(&self) -> bool {
        self.away_mode
    }

    fn is_aux_heat_on(&self) -> bool {
        self.aux_heat
    }

    fn set_temperature(&mut self, temperature: Option<f64>) {
        let Some(temperature) = whole(temperature) else {
            trace!(name = %self.name, "set_temperature without a usable value");
            return;
        };
        if temperature == self.target_temperature {
            return;
        }

        self.target_temperature = temperature;
        debug!(name = %self.name, temperature, "Target temperature set");
    }

    fn set_humidity(&mut self, humidity: Option<f64>) {
        let Some(humidity) = whole(humidity) else {
            trace!(name = %self.name, "set_humidity without a usable value");
            return;
        };
        if humidity == self.target_humidity {
            return;
        }

        self.target_humidity = humidity;
        debug!(name = %self.name, humidity, "Target humidity set");
    }

    fn set_fan_mode(&mut self, fan_mode: Option<&str>) {
        let Some(raw) = fan_mode else {
            return;
        };
        let Some(mode) = raw
            .parse::<FanMode>()
            .ok()
            .filter(|mode| self.fan_modes.contains(mode))
        else {
            trace!(name = %self.name, fan_mode = raw, "Ignoring unsupported fan mode");
            return;
        };
        if mode == self.fan_mode {
            return;
        }

        self.fan_mode = mode;
        debug!(name = %self.name, fan_mode = %mode, "Fan mode set");
    }

    fn set_operation_mode(&mut self, operation_mode: Option<&str>) {
        let Some(raw) = operation_mode else {
            return;
        };
        let Some(mode) = raw
            .parse::<OperationMode>()
            .ok()
            .filter(|mode| self.operation_modes.contains(mode))
        else {
            trace!(name = %self.name, operation_mode = raw, "Ignoring unsupported operation mode");
            return;
        };
        if mode == self.operation_mode {
            return;
        }

        self.operation_mode = mode;
        debug!(name = %self.name, operation_mode = %mode, "Operation mode set");
    }

    fn turn_away_mode_on(&mut self) {
        self.away_mode = true;
    }

    fn turn_away_mode_off(&mut self) {
        self.away_mode = false;
    }

    fn turn_aux_heat_on(&mut self) {
        self.aux_heat = true;
    }

    fn turn_aux_heat_off(&mut self) {
        self.aux_heat = false;
    }

    /// Nothing backs the demo entity, so there is nothing to pull
    fn refresh(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole() {
        assert_eq!(whole(Some(21.9)), Some(21.0));
        assert_eq!(whole(Some(-3.7)), Some(-3.0));
        assert_eq!(whole(Some(f64::NAN)), None);
        assert_eq!(whole(Some(f64::INFINITY)), None);
        assert_eq!(whole(None), None);
    }

    #[test]
    fn test_defaults() {
        let demo = DemoClimate::new();
        assert_eq!(demo.name(), DEFAULT_NAME);
        assert!(demo.available());
        assert_eq!(demo.temperature_unit(), TemperatureUnit::Celsius);
        assert_eq!(demo.target_temperature_low(), 20.0);
        assert_eq!(demo.target_temperature_high(), 25.0);
        assert_eq!(demo.target_temperature_step(), 1.0);
        assert!(!demo.supported_features().contains(ClimateEntityFeature::ON_OFF));
        assert_eq!(demo.supported_features().bits(), 4095);
    }

    #[test]
    fn test_temperature_truncates_and_leaves_bounds() {
        let mut demo = DemoClimate::new();
        demo.set_temperature(Some(27.8));
        assert_eq!(demo.target_temperature(), 27.0);
        // Bounds are independent of the target
        assert_eq!(demo.target_temperature_low(), 20.0);
        assert_eq!(demo.target_temperature_high(), 25.0);

        demo.set_temperature(Some(f64::NAN));
        assert_eq!(demo.target_temperature(), 27.0);
    }
}
