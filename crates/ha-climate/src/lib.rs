//! Climate domain for Home Assistant
//!
//! This crate defines what a climate entity is (its modes, units, capability
//! bitset and the [`ClimateEntity`] trait) and hosts climate entities in a
//! [`ClimatePlatform`], which turns `climate.*` service calls into entity
//! commands and writes [`ha_core::State`] snapshots.

pub mod command;
pub mod consts;
mod entity;
mod error;
mod feature;
mod modes;
mod platform;

pub use command::ClimateCommand;
pub use entity::ClimateEntity;
pub use error::{ModeError, ServiceError, ServiceResult};
pub use feature::ClimateEntityFeature;
pub use modes::{FanMode, OperationMode, TemperatureUnit};
pub use platform::{AddEntities, ClimatePlatform, SharedClimatePlatform};

/// Services handled by the climate platform, as `(service, description)`
pub fn services() -> &'static [(&'static str, &'static str)] {
    &[
        (consts::SERVICE_SET_TEMPERATURE, "Set the target temperature"),
        (consts::SERVICE_SET_HUMIDITY, "Set the target humidity"),
        (consts::SERVICE_SET_FAN_MODE, "Set the fan mode"),
        (consts::SERVICE_SET_OPERATION_MODE, "Set the operation mode"),
        (consts::SERVICE_SET_AWAY_MODE, "Turn away mode on or off"),
        (consts::SERVICE_SET_AUX_HEAT, "Turn auxiliary heat on or off"),
    ]
}
