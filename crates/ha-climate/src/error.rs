//! Error types for the climate domain
//!
//! Entity commands never fail; these errors only surface at the host edge,
//! when parsing mode strings or routing a malformed service call.

use thiserror::Error;

/// Result type for platform service dispatch
pub type ServiceResult<T = ()> = Result<T, ServiceError>;

/// A string that names no known mode or unit
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown operation mode '{0}'")]
    UnknownOperationMode(String),

    #[error("unknown fan mode '{0}'")]
    UnknownFanMode(String),

    #[error("unknown temperature unit '{0}'")]
    UnknownTemperatureUnit(String),
}

/// Errors returned when a service call cannot be routed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("service {domain}.{service} is not handled by the climate platform")]
    UnknownService { domain: String, service: String },

    #[error("invalid service data for {service}: {reason}")]
    InvalidData { service: String, reason: String },
}
