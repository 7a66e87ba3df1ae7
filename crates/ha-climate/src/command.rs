//! Typed command inputs parsed from `climate.*` service calls

use ha_core::ServiceCall;

use crate::consts::*;
use crate::{ServiceError, ServiceResult};

/// One command for a climate entity
///
/// Value-carrying commands keep their input optional: a missing or
/// mistyped value reaches the entity as `None` and is dropped there.
#[derive(Debug, Clone, PartialEq)]
pub enum ClimateCommand {
    SetTemperature { temperature: Option<f64> },
    SetHumidity { humidity: Option<f64> },
    SetFanMode { fan_mode: Option<String> },
    SetOperationMode { operation_mode: Option<String> },
    AwayMode(bool),
    AuxHeat(bool),
}

impl ClimateCommand {
    /// Parse the command carried by a service call
    ///
    /// Only the service name and its payload are inspected; the caller is
    /// responsible for checking the domain.
    pub fn from_service_call(call: &ServiceCall) -> ServiceResult<Self> {
        let command = match call.service.as_str() {
            SERVICE_SET_TEMPERATURE => Self::SetTemperature {
                temperature: call.get(ATTR_TEMPERATURE),
            },
            SERVICE_SET_HUMIDITY => Self::SetHumidity {
                humidity: call.get(ATTR_HUMIDITY),
            },
            SERVICE_SET_FAN_MODE => Self::SetFanMode {
                fan_mode: call.get(ATTR_FAN_MODE),
            },
            SERVICE_SET_OPERATION_MODE => Self::SetOperationMode {
                operation_mode: call.get(ATTR_OPERATION_MODE),
            },
            SERVICE_SET_AWAY_MODE => Self::AwayMode(required_flag(call, ATTR_AWAY_MODE)?),
            SERVICE_SET_AUX_HEAT => Self::AuxHeat(required_flag(call, ATTR_AUX_HEAT)?),
            _ => {
                return Err(ServiceError::UnknownService {
                    domain: call.domain.clone(),
                    service: call.service.clone(),
                })
            }
        };
        Ok(command)
    }

    /// Service name this command is sent under
    pub fn service(&self) -> &'static str {
        match self {
            Self::SetTemperature { .. } => SERVICE_SET_TEMPERATURE,
            Self::SetHumidity { .. } => SERVICE_SET_HUMIDITY,
            Self::SetFanMode { .. } => SERVICE_SET_FAN_MODE,
            Self::SetOperationMode { .. } => SERVICE_SET_OPERATION_MODE,
            Self::AwayMode(_) => SERVICE_SET_AWAY_MODE,
            Self::AuxHeat(_) => SERVICE_SET_AUX_HEAT,
        }
    }
}

/// Toggle services have no "absent" reading: the flag decides on or off
fn required_flag(call: &ServiceCall, key: &str) -> ServiceResult<bool> {
    call.get::<bool>(key).ok_or_else(|| ServiceError::InvalidData {
        service: call.service_id(),
        reason: format!("'{}' must be a boolean", key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ha_core::Context;
    use serde_json::{json, Value};

    fn call(service: &str, data: Value) -> ServiceCall {
        ServiceCall::new(DOMAIN, service, data, Context::new())
    }

    #[test]
    fn test_parse_value_commands() {
        assert_eq!(
            ClimateCommand::from_service_call(&call("set_temperature", json!({"temperature": 21.7})))
                .unwrap(),
            ClimateCommand::SetTemperature { temperature: Some(21.7) }
        );
        assert_eq!(
            ClimateCommand::from_service_call(&call("set_humidity", json!({"humidity": 55})))
                .unwrap(),
            ClimateCommand::SetHumidity { humidity: Some(55.0) }
        );
        assert_eq!(
            ClimateCommand::from_service_call(&call("set_fan_mode", json!({"fan_mode": "circulate"})))
                .unwrap(),
            ClimateCommand::SetFanMode { fan_mode: Some("circulate".to_string()) }
        );
    }

    #[test]
    fn test_missing_or_mistyped_values_become_none() {
        assert_eq!(
            ClimateCommand::from_service_call(&call("set_temperature", json!({}))).unwrap(),
            ClimateCommand::SetTemperature { temperature: None }
        );
        assert_eq!(
            ClimateCommand::from_service_call(&call("set_operation_mode", json!({"operation_mode": 4})))
                .unwrap(),
            ClimateCommand::SetOperationMode { operation_mode: None }
        );
    }

    #[test]
    fn test_toggle_commands_need_a_boolean() {
        assert_eq!(
            ClimateCommand::from_service_call(&call("set_away_mode", json!({"away_mode": true})))
                .unwrap(),
            ClimateCommand::AwayMode(true)
        );
        assert!(matches!(
            ClimateCommand::from_service_call(&call("set_aux_heat", json!({"aux_heat": "yes"}))),
            Err(ServiceError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_unknown_service() {
        let err = ClimateCommand::from_service_call(&call("set_swing_mode", json!({}))).unwrap_err();
        assert_eq!(
            err,
            ServiceError::UnknownService {
                domain: "climate".to_string(),
                service: "set_swing_mode".to_string(),
            }
        );
    }

    #[test]
    fn test_every_advertised_service_parses() {
        let data = json!({"away_mode": true, "aux_heat": false});
        for (service, _) in crate::services() {
            let command = ClimateCommand::from_service_call(&call(service, data.clone())).unwrap();
            assert_eq!(command.service(), *service);
        }
    }

    #[test]
    fn test_service_name_matches_parse() {
        let command = ClimateCommand::AuxHeat(false);
        let parsed = ClimateCommand::from_service_call(&call(
            command.service(),
            json!({"aux_heat": false}),
        ))
        .unwrap();
        assert_eq!(parsed, command);
    }
}
