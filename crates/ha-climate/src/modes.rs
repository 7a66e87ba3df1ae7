//! Operation modes, fan modes and temperature units

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModeError;

/// High-level thermostat behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    Heat,
    Cool,
    Idle,
    Auto,
}

impl OperationMode {
    /// Every operation mode, in advertisement order
    pub const ALL: [OperationMode; 4] = [Self::Heat, Self::Cool, Self::Idle, Self::Auto];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heat => "heat",
            Self::Cool => "cool",
            Self::Idle => "idle",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for OperationMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModeError::UnknownOperationMode(s.to_string()))
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fan behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanMode {
    Circulate,
    Continuous,
    Auto,
}

impl FanMode {
    /// Every fan mode, in advertisement order
    pub const ALL: [FanMode; 3] = [Self::Circulate, Self::Continuous, Self::Auto];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circulate => "circulate",
            Self::Continuous => "continuous",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for FanMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ModeError::UnknownFanMode(s.to_string()))
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit the entity's temperatures are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "°F")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "°C" | "C" | "celsius" => Ok(Self::Celsius),
            "°F" | "F" | "fahrenheit" => Ok(Self::Fahrenheit),
            other => Err(ModeError::UnknownTemperatureUnit(other.to_string())),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
