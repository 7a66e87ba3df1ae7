//! Behaviour of the demo climate entity, alone and behind a platform

use ha_climate::consts::*;
use ha_climate::{AddEntities, ClimateEntity, ClimatePlatform, FanMode, OperationMode};
use ha_config::PlatformConfig;
use ha_core::{Context, ServiceCall};
use ha_demo::{setup_platform, DemoClimate, DEFAULT_NAME};
use serde_json::{json, Value};

// =============================================================================
// Entity
// =============================================================================

#[test]
fn test_initial_state() {
    let demo = DemoClimate::new();

    assert_eq!(demo.current_operation(), OperationMode::Cool);
    assert_eq!(demo.current_fan_mode(), FanMode::Auto);
    assert_eq!(demo.target_temperature(), 23.0);
    assert_eq!(demo.current_temperature(), 24.0);
    assert_eq!(demo.target_humidity(), 40.0);
    assert_eq!(demo.current_humidity(), 42.0);
    assert!(!demo.is_away_mode_on());
    assert!(!demo.is_aux_heat_on());
    assert_eq!(
        demo.operation_list(),
        &[
            OperationMode::Heat,
            OperationMode::Cool,
            OperationMode::Idle,
            OperationMode::Auto
        ]
    );
    assert_eq!(
        demo.fan_list(),
        &[FanMode::Circulate, FanMode::Continuous, FanMode::Auto]
    );
}

#[test]
fn test_every_operation_mode_can_be_set() {
    let mut demo = DemoClimate::new();
    for mode in OperationMode::ALL {
        demo.set_operation_mode(Some(mode.as_str()));
        assert_eq!(demo.current_operation(), mode);
    }
}

#[test]
fn test_unknown_operation_mode_is_ignored() {
    let mut demo = DemoClimate::new();
    for bogus in ["dry", "HEAT", "", "fan_only"] {
        demo.set_operation_mode(Some(bogus));
        assert_eq!(demo.current_operation(), OperationMode::Cool);
    }
    demo.set_operation_mode(None);
    assert_eq!(demo.current_operation(), OperationMode::Cool);
}

#[test]
fn test_absent_temperature_is_ignored() {
    let mut demo = DemoClimate::new();
    demo.set_temperature(None);
    assert_eq!(demo.target_temperature(), 23.0);
}

#[test]
fn test_setting_current_target_is_a_no_op() {
    let mut demo = DemoClimate::new();
    let before = demo.clone();

    demo.set_temperature(Some(23.0));
    demo.set_temperature(Some(23.4));
    assert_eq!(demo, before);
}

#[test]
fn test_bogus_fan_mode_is_ignored() {
    let mut demo = DemoClimate::new();
    demo.set_fan_mode(Some("bogus"));
    assert_eq!(demo.current_fan_mode(), FanMode::Auto);

    demo.set_fan_mode(Some("circulate"));
    assert_eq!(demo.current_fan_mode(), FanMode::Circulate);
    demo.set_fan_mode(None);
    assert_eq!(demo.current_fan_mode(), FanMode::Circulate);
}

#[test]
fn test_away_mode_toggle() {
    let mut demo = DemoClimate::new();
    demo.turn_away_mode_on();
    assert!(demo.is_away_mode_on());
    demo.turn_away_mode_off();
    assert!(!demo.is_away_mode_on());
}

#[test]
fn test_aux_heat_toggle() {
    let mut demo = DemoClimate::new();
    demo.turn_aux_heat_on();
    demo.turn_aux_heat_on();
    assert!(demo.is_aux_heat_on());
    demo.turn_aux_heat_off();
    assert!(!demo.is_aux_heat_on());
}

#[test]
fn test_humidity_is_idempotent() {
    let mut demo = DemoClimate::new();
    demo.set_humidity(Some(55.0));
    assert_eq!(demo.target_humidity(), 55.0);

    let before = demo.clone();
    demo.set_humidity(Some(55.0));
    assert_eq!(demo, before);
}

#[test]
fn test_low_high_bounds_are_not_enforced() {
    let mut demo = DemoClimate::new();
    demo.set_temperature(Some(40.0));
    assert_eq!(demo.target_temperature(), 40.0);
    assert!(demo.target_temperature() > demo.target_temperature_high());
}

#[test]
fn test_refresh_changes_nothing() {
    let mut demo = DemoClimate::new();
    let before = demo.clone();
    demo.refresh();
    assert_eq!(demo, before);
}

#[test]
fn test_state_and_attributes() {
    let demo = DemoClimate::new();
    assert_eq!(demo.state(), "cool");

    let attributes = demo.state_attributes();
    let attr = |key: &str| attributes.get(key).cloned().unwrap_or(Value::Null);

    assert_eq!(attr("friendly_name"), json!(DEFAULT_NAME));
    assert_eq!(attr("supported_features"), json!(4095));
    assert_eq!(attr(ATTR_TEMPERATURE), json!(23.0));
    assert_eq!(attr(ATTR_CURRENT_TEMPERATURE), json!(24.0));
    assert_eq!(attr(ATTR_TARGET_TEMP_LOW), json!(20.0));
    assert_eq!(attr(ATTR_TARGET_TEMP_HIGH), json!(25.0));
    assert_eq!(attr(ATTR_HUMIDITY), json!(40.0));
    assert_eq!(attr(ATTR_CURRENT_HUMIDITY), json!(42.0));
    assert_eq!(attr(ATTR_MIN_TEMP), json!(7.0));
    assert_eq!(attr(ATTR_MAX_TEMP), json!(35.0));
    assert_eq!(attr(ATTR_FAN_MODE), json!("auto"));
    assert_eq!(attr(ATTR_FAN_LIST), json!(["circulate", "continuous", "auto"]));
    assert_eq!(attr(ATTR_OPERATION_MODE), json!("cool"));
    assert_eq!(attr(ATTR_OPERATION_LIST), json!(["heat", "cool", "idle", "auto"]));
    assert_eq!(attr(ATTR_AWAY_MODE), json!("off"));
    assert_eq!(attr(ATTR_AUX_HEAT), json!("off"));
}

// =============================================================================
// Platform setup and service calls
// =============================================================================

fn call(service: &str, data: Value) -> ServiceCall {
    ServiceCall::new(DOMAIN, service, data, Context::new())
}

fn demo_platform() -> ClimatePlatform {
    let platform = ClimatePlatform::new();
    let ids = setup_platform(&PlatformConfig::new("demo"), &platform);
    assert_eq!(ids.len(), 1);
    platform
}

#[test]
fn test_setup_registers_demo_entity() {
    let platform = demo_platform();
    let state = platform.state("climate.demo_climate_device").unwrap();

    assert_eq!(state.state, "cool");
    assert_eq!(state.attribute::<f64>(ATTR_TEMPERATURE), Some(23.0));
}

#[test]
fn test_setup_with_name_override() {
    let platform = ClimatePlatform::new();
    let config = PlatformConfig {
        platform: "demo".to_string(),
        name: Some("Upstairs Hallway".to_string()),
    };

    let ids = setup_platform(&config, &platform);
    assert_eq!(ids[0].to_string(), "climate.upstairs_hallway");
    assert_eq!(
        platform.with_entity("climate.upstairs_hallway", |e| e.name().to_string()),
        Some("Upstairs Hallway".to_string())
    );
}

#[test]
fn test_setup_with_non_ascii_names() {
    let platform = ClimatePlatform::new();
    let mut ids = Vec::new();
    for name in ["Wohnzimmer Heizkörper", "Café", "Спальня", "卧室"] {
        let config = PlatformConfig {
            platform: "demo".to_string(),
            name: Some(name.to_string()),
        };
        ids.extend(setup_platform(&config, &platform));
    }

    let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(ids[0], "climate.wohnzimmer_heizkorper");
    assert_eq!(ids[1], "climate.cafe");
    assert!(ids[2].starts_with("climate.spal"));
    assert_eq!(ids[3], "climate.wo_shi");
    assert!(!ids.iter().any(|id| id.contains("unnamed_device")));
}

#[test]
fn test_setup_twice_gets_distinct_ids() {
    let platform = demo_platform();
    let ids = setup_platform(&PlatformConfig::new("demo"), &platform);
    assert_eq!(ids[0].to_string(), "climate.demo_climate_device_2");
}

#[test]
fn test_registry_accepts_no_entities() {
    let platform = ClimatePlatform::new();
    assert!(platform.add_entities(Vec::new()).is_empty());
    assert!(platform.is_empty());
}

#[test]
fn test_service_calls_drive_the_entity() {
    let platform = demo_platform();

    platform
        .call_service(&call(SERVICE_SET_TEMPERATURE, json!({"temperature": 21.7})))
        .unwrap();
    platform
        .call_service(&call(SERVICE_SET_HUMIDITY, json!({"humidity": 55})))
        .unwrap();
    platform
        .call_service(&call(SERVICE_SET_FAN_MODE, json!({"fan_mode": "continuous"})))
        .unwrap();
    platform
        .call_service(&call(SERVICE_SET_OPERATION_MODE, json!({"operation_mode": "heat"})))
        .unwrap();
    platform
        .call_service(&call(SERVICE_SET_AWAY_MODE, json!({"away_mode": true})))
        .unwrap();
    platform
        .call_service(&call(SERVICE_SET_AUX_HEAT, json!({"aux_heat": true})))
        .unwrap();

    let state = platform.state("climate.demo_climate_device").unwrap();
    assert_eq!(state.state, "heat");
    assert_eq!(state.attribute::<f64>(ATTR_TEMPERATURE), Some(21.0));
    assert_eq!(state.attribute::<f64>(ATTR_HUMIDITY), Some(55.0));
    assert_eq!(state.attribute::<String>(ATTR_FAN_MODE).as_deref(), Some("continuous"));
    assert_eq!(state.attribute::<String>(ATTR_AWAY_MODE).as_deref(), Some("on"));
    assert_eq!(state.attribute::<String>(ATTR_AUX_HEAT).as_deref(), Some("on"));
}

#[test]
fn test_malformed_service_values_leave_state_alone() {
    let platform = demo_platform();
    let before = platform.state("climate.demo_climate_device").unwrap();

    platform
        .call_service(&call(SERVICE_SET_TEMPERATURE, json!({"temperature": "warm"})))
        .unwrap();
    platform
        .call_service(&call(SERVICE_SET_FAN_MODE, json!({"fan_mode": "bogus"})))
        .unwrap();
    platform
        .call_service(&call(SERVICE_SET_OPERATION_MODE, json!({})))
        .unwrap();

    let after = platform.state("climate.demo_climate_device").unwrap();
    assert_eq!(after, before);
}
