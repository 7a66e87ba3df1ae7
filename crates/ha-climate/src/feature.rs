//! Capability bitset advertised by climate entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Which state dimensions a UI should expose as controls
///
/// Advertisement only: the platform never consults it before forwarding a
/// command. Serializes as its integer value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClimateEntityFeature(u32);

impl ClimateEntityFeature {
    pub const TARGET_TEMPERATURE: Self = Self(1);
    pub const TARGET_TEMPERATURE_HIGH: Self = Self(2);
    pub const TARGET_TEMPERATURE_LOW: Self = Self(4);
    pub const TARGET_HUMIDITY: Self = Self(8);
    pub const TARGET_HUMIDITY_HIGH: Self = Self(16);
    pub const TARGET_HUMIDITY_LOW: Self = Self(32);
    pub const FAN_MODE: Self = Self(64);
    pub const OPERATION_MODE: Self = Self(128);
    pub const HOLD_MODE: Self = Self(256);
    pub const SWING_MODE: Self = Self(512);
    pub const AWAY_MODE: Self = Self(1024);
    pub const AUX_HEAT: Self = Self(2048);
    pub const ON_OFF: Self = Self(4096);

    const NAMED: [(Self, &'static str); 13] = [
        (Self::TARGET_TEMPERATURE, "TARGET_TEMPERATURE"),
        (Self::TARGET_TEMPERATURE_HIGH, "TARGET_TEMPERATURE_HIGH"),
        (Self::TARGET_TEMPERATURE_LOW, "TARGET_TEMPERATURE_LOW"),
        (Self::TARGET_HUMIDITY, "TARGET_HUMIDITY"),
        (Self::TARGET_HUMIDITY_HIGH, "TARGET_HUMIDITY_HIGH"),
        (Self::TARGET_HUMIDITY_LOW, "TARGET_HUMIDITY_LOW"),
        (Self::FAN_MODE, "FAN_MODE"),
        (Self::OPERATION_MODE, "OPERATION_MODE"),
        (Self::HOLD_MODE, "HOLD_MODE"),
        (Self::SWING_MODE, "SWING_MODE"),
        (Self::AWAY_MODE, "AWAY_MODE"),
        (Self::AUX_HEAT, "AUX_HEAT"),
        (Self::ON_OFF, "ON_OFF"),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// True when every flag in `other` is set in `self`
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ClimateEntityFeature {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ClimateEntityFeature {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for ClimateEntityFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "ClimateEntityFeature({})", names.join(" | "))
    }
}
