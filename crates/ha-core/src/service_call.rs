//! Service call type carrying a command to a domain's entities

use crate::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Service data key naming the targeted entities
const ATTR_ENTITY_ID: &str = "entity_id";

/// A `domain.service` request with its JSON payload
///
/// Hosts forward user and UI commands as service calls, e.g.
/// `climate.set_temperature` with `{"entity_id": "climate.hall", "temperature": 21}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCall {
    /// The domain the service belongs to (e.g., "climate")
    pub domain: String,

    /// The service name (e.g., "set_fan_mode")
    pub service: String,

    /// Data passed to the service
    #[serde(default)]
    pub service_data: serde_json::Value,

    /// Context tracking who initiated this call
    #[serde(default)]
    pub context: Context,
}

impl ServiceCall {
    /// Create a new service call
    pub fn new(
        domain: impl Into<String>,
        service: impl Into<String>,
        service_data: serde_json::Value,
        context: Context,
    ) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            service_data,
            context,
        }
    }

    /// Get the full service identifier (domain.service)
    pub fn service_id(&self) -> String {
        format!("{}.{}", self.domain, self.service)
    }

    /// Get a typed value from service_data
    ///
    /// Returns `None` both when the key is missing and when the value does
    /// not deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.service_data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Entity ids named by the call
    ///
    /// `None` means the call has no `entity_id` key and targets every entity
    /// of the domain. A single string and an array of strings are both
    /// accepted; non-string array members are dropped.
    pub fn target_entity_ids(&self) -> Option<Vec<String>> {
        match self.service_data.get(ATTR_ENTITY_ID)? {
            serde_json::Value::String(s) => Some(vec![s.clone()]),
            serde_json::Value::Array(arr) => Some(
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect(),
            ),
            _ => Some(Vec::new()),
        }
    }
}
