//! The climate entity contract
//!
//! A climate entity exposes read accessors the host may call at any time and
//! commands the host forwards from users. Commands take a single optional
//! input and never fail: an absent value, an unknown mode or a value equal to
//! the current one is dropped without a trace in the return type.

use std::collections::HashMap;

use ha_core::{ATTR_FRIENDLY_NAME, ATTR_SUPPORTED_FEATURES, ATTR_UNIT_OF_MEASUREMENT, STATE_UNAVAILABLE};
use serde_json::{json, Value};

use crate::command::ClimateCommand;
use crate::consts::*;
use crate::{ClimateEntityFeature, FanMode, OperationMode, TemperatureUnit};

/// A thermostat-like entity
pub trait ClimateEntity: Send + Sync {
    // Identity

    /// Display name, fixed at construction
    fn name(&self) -> &str;

    /// Whether the entity can currently be reached
    fn available(&self) -> bool {
        true
    }

    /// Capability bitset advertised to the UI
    fn supported_features(&self) -> ClimateEntityFeature;

    // Temperature

    fn temperature_unit(&self) -> TemperatureUnit;
    fn current_temperature(&self) -> f64;
    fn target_temperature(&self) -> f64;
    fn target_temperature_step(&self) -> f64;
    fn target_temperature_high(&self) -> f64;
    fn target_temperature_low(&self) -> f64;

    /// Lowest target temperature the UI should offer
    fn min_temp(&self) -> f64 {
        match self.temperature_unit() {
            TemperatureUnit::Celsius => DEFAULT_MIN_TEMP_CELSIUS,
            TemperatureUnit::Fahrenheit => DEFAULT_MIN_TEMP_FAHRENHEIT,
        }
    }

    /// Highest target temperature the UI should offer
    fn max_temp(&self) -> f64 {
        match self.temperature_unit() {
            TemperatureUnit::Celsius => DEFAULT_MAX_TEMP_CELSIUS,
            TemperatureUnit::Fahrenheit => DEFAULT_MAX_TEMP_FAHRENHEIT,
        }
    }

    // Humidity

    fn current_humidity(&self) -> f64;
    fn target_humidity(&self) -> f64;

    fn min_humidity(&self) -> f64 {
        DEFAULT_MIN_HUMIDITY
    }

    fn max_humidity(&self) -> f64 {
        DEFAULT_MAX_HUMIDITY
    }

    // Modes and toggles

    fn current_operation(&self) -> OperationMode;
    fn operation_list(&self) -> &[OperationMode];
    fn current_fan_mode(&self) -> FanMode;
    fn fan_list(&self) -> &[FanMode];
    fn is_away_mode_on(&self) -> bool;
    fn is_aux_heat_on(&self) -> bool;

    // Commands

    fn set_temperature(&mut self, temperature: Option<f64>);
    fn set_humidity(&mut self, humidity: Option<f64>);
    fn set_fan_mode(&mut self, fan_mode: Option<&str>);
    fn set_operation_mode(&mut self, operation_mode: Option<&str>);
    fn turn_away_mode_on(&mut self);
    fn turn_away_mode_off(&mut self);
    fn turn_aux_heat_on(&mut self);
    fn turn_aux_heat_off(&mut self);

    /// Pull fresh data from whatever backs the entity
    fn refresh(&mut self);

    /// Route a parsed command to the matching method
    fn apply(&mut self, command: ClimateCommand) {
        match command {
            ClimateCommand::SetTemperature { temperature } => self.set_temperature(temperature),
            ClimateCommand::SetHumidity { humidity } => self.set_humidity(humidity),
            ClimateCommand::SetFanMode { fan_mode } => self.set_fan_mode(fan_mode.as_deref()),
            ClimateCommand::SetOperationMode { operation_mode } => {
                self.set_operation_mode(operation_mode.as_deref())
            }
            ClimateCommand::AwayMode(true) => self.turn_away_mode_on(),
            ClimateCommand::AwayMode(false) => self.turn_away_mode_off(),
            ClimateCommand::AuxHeat(true) => self.turn_aux_heat_on(),
            ClimateCommand::AuxHeat(false) => self.turn_aux_heat_off(),
        }
    }

    /// State string the host records: the operation mode, or `unavailable`
    fn state(&self) -> String {
        if self.available() {
            self.current_operation().to_string()
        } else {
            STATE_UNAVAILABLE.to_string()
        }
    }

    /// Attributes the host records next to [`ClimateEntity::state`]
    ///
    /// Optional dimensions only appear when the matching feature bit is set.
    fn state_attributes(&self) -> HashMap<String, Value> {
        let features = self.supported_features();
        let mut attributes = HashMap::new();
        let mut put = |key: &str, value: Value| {
            attributes.insert(key.to_string(), value);
        };

        put(ATTR_FRIENDLY_NAME, json!(self.name()));
        put(ATTR_SUPPORTED_FEATURES, json!(features.bits()));
        put(ATTR_UNIT_OF_MEASUREMENT, json!(self.temperature_unit().as_str()));
        put(ATTR_CURRENT_TEMPERATURE, json!(self.current_temperature()));
        put(ATTR_TEMPERATURE, json!(self.target_temperature()));
        put(ATTR_TARGET_TEMP_STEP, json!(self.target_temperature_step()));
        put(ATTR_MIN_TEMP, json!(self.min_temp()));
        put(ATTR_MAX_TEMP, json!(self.max_temp()));

        if features.contains(ClimateEntityFeature::TARGET_TEMPERATURE_HIGH) {
            put(ATTR_TARGET_TEMP_HIGH, json!(self.target_temperature_high()));
        }
        if features.contains(ClimateEntityFeature::TARGET_TEMPERATURE_LOW) {
            put(ATTR_TARGET_TEMP_LOW, json!(self.target_temperature_low()));
        }
        if features.contains(ClimateEntityFeature::TARGET_HUMIDITY) {
            put(ATTR_CURRENT_HUMIDITY, json!(self.current_humidity()));
            put(ATTR_HUMIDITY, json!(self.target_humidity()));
            put(ATTR_MIN_HUMIDITY, json!(self.min_humidity()));
            put(ATTR_MAX_HUMIDITY, json!(self.max_humidity()));
        }
        if features.contains(ClimateEntityFeature::FAN_MODE) {
            put(ATTR_FAN_MODE, json!(self.current_fan_mode()));
            put(ATTR_FAN_LIST, json!(self.fan_list()));
        }
        if features.contains(ClimateEntityFeature::OPERATION_MODE) {
            put(ATTR_OPERATION_MODE, json!(self.current_operation()));
            put(ATTR_OPERATION_LIST, json!(self.operation_list()));
        }
        if features.contains(ClimateEntityFeature::AWAY_MODE) {
            put(ATTR_AWAY_MODE, json!(on_off(self.is_away_mode_on())));
        }
        if features.contains(ClimateEntityFeature::AUX_HEAT) {
            put(ATTR_AUX_HEAT, json!(on_off(self.is_aux_heat_on())));
        }

        attributes
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        STATE_ON
    } else {
        STATE_OFF
    }
}
