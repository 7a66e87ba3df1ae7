//! Climate domain constants: attribute keys, service names and default limits

/// Domain of every climate entity id
pub const DOMAIN: &str = "climate";

// State attributes
pub const ATTR_CURRENT_TEMPERATURE: &str = "current_temperature";
pub const ATTR_TEMPERATURE: &str = "temperature";
pub const ATTR_TARGET_TEMP_STEP: &str = "target_temp_step";
pub const ATTR_TARGET_TEMP_HIGH: &str = "target_temp_high";
pub const ATTR_TARGET_TEMP_LOW: &str = "target_temp_low";
pub const ATTR_MIN_TEMP: &str = "min_temp";
pub const ATTR_MAX_TEMP: &str = "max_temp";
pub const ATTR_CURRENT_HUMIDITY: &str = "current_humidity";
pub const ATTR_HUMIDITY: &str = "humidity";
pub const ATTR_MIN_HUMIDITY: &str = "min_humidity";
pub const ATTR_MAX_HUMIDITY: &str = "max_humidity";
pub const ATTR_FAN_MODE: &str = "fan_mode";
pub const ATTR_FAN_LIST: &str = "fan_list";
pub const ATTR_OPERATION_MODE: &str = "operation_mode";
pub const ATTR_OPERATION_LIST: &str = "operation_list";
pub const ATTR_AWAY_MODE: &str = "away_mode";
pub const ATTR_AUX_HEAT: &str = "aux_heat";

// Services
pub const SERVICE_SET_TEMPERATURE: &str = "set_temperature";
pub const SERVICE_SET_HUMIDITY: &str = "set_humidity";
pub const SERVICE_SET_FAN_MODE: &str = "set_fan_mode";
pub const SERVICE_SET_OPERATION_MODE: &str = "set_operation_mode";
pub const SERVICE_SET_AWAY_MODE: &str = "set_away_mode";
pub const SERVICE_SET_AUX_HEAT: &str = "set_aux_heat";

// Default limits advertised to the UI
pub const DEFAULT_MIN_TEMP_CELSIUS: f64 = 7.0;
pub const DEFAULT_MAX_TEMP_CELSIUS: f64 = 35.0;
pub const DEFAULT_MIN_TEMP_FAHRENHEIT: f64 = 45.0;
pub const DEFAULT_MAX_TEMP_FAHRENHEIT: f64 = 95.0;
pub const DEFAULT_MIN_HUMIDITY: f64 = 30.0;
pub const DEFAULT_MAX_HUMIDITY: f64 = 99.0;

/// Toggle attributes are reported as `"on"` / `"off"`
pub const STATE_ON: &str = "on";
pub const STATE_OFF: &str = "off";
