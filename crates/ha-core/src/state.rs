//! Snapshot of an entity's state as the host sees it

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Context, EntityId, STATE_UNAVAILABLE};

/// State string plus attributes written for an entity at a point in time
///
/// For a climate entity the state string is the operation mode (`"cool"`)
/// and the attributes carry temperatures, humidities, fan mode and toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    /// The entity this state belongs to
    pub entity_id: EntityId,

    /// The state value (e.g., "heat", "auto", "unavailable")
    pub state: String,

    /// Additional attributes associated with the state
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,

    /// When the state string last changed
    pub last_changed: DateTime<Utc>,

    /// When the state or any attribute was last written
    pub last_updated: DateTime<Utc>,

    /// Context of the write that produced this state
    pub context: Context,
}

impl State {
    /// Create a new state with current timestamp
    pub fn new(
        entity_id: EntityId,
        state: impl Into<String>,
        attributes: HashMap<String, serde_json::Value>,
        context: Context,
    ) -> Self {
        let now = Utc::now();
        Self {
            entity_id,
            state: state.into(),
            attributes,
            last_changed: now,
            last_updated: now,
            context,
        }
    }

    /// Create the successor of this state
    ///
    /// `last_changed` only moves when the state string differs; an
    /// attribute-only change (a new target temperature, say) bumps
    /// `last_updated` alone.
    pub fn with_update(
        &self,
        new_state: impl Into<String>,
        new_attributes: HashMap<String, serde_json::Value>,
        context: Context,
    ) -> Self {
        let now = Utc::now();
        let new_state = new_state.into();
        let last_changed = if self.state == new_state {
            self.last_changed
        } else {
            now
        };

        Self {
            entity_id: self.entity_id.clone(),
            state: new_state,
            attributes: new_attributes,
            last_changed,
            last_updated: now,
            context,
        }
    }

    /// Check if the state value represents an unavailable entity
    pub fn is_unavailable(&self) -> bool {
        self.state == STATE_UNAVAILABLE
    }

    /// Get an attribute value by key
    pub fn attribute<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        // Timestamps and context are not compared
        self.entity_id == other.entity_id
            && self.state == other.state
            && self.attributes == other.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hall() -> EntityId {
        EntityId::new("climate", "hall").unwrap()
    }

    #[test]
    fn test_attribute_only_update_keeps_last_changed() {
        let first = State::new(
            hall(),
            "cool",
            HashMap::from([("temperature".to_string(), json!(23.0))]),
            Context::new(),
        );
        let second = first.with_update(
            "cool",
            HashMap::from([("temperature".to_string(), json!(21.0))]),
            Context::new(),
        );

        assert_eq!(second.last_changed, first.last_changed);
        assert!(second.last_updated >= first.last_updated);
        assert_eq!(second.attribute::<f64>("temperature"), Some(21.0));
        assert_ne!(first, second);
    }

    #[test]
    fn test_state_change_moves_last_changed() {
        let first = State::new(hall(), "cool", HashMap::new(), Context::new());
        let second = first.with_update("heat", HashMap::new(), Context::new());

        assert_eq!(second.state, "heat");
        assert!(second.last_changed >= first.last_changed);
        assert_eq!(second.last_changed, second.last_updated);
    }

    #[test]
    fn test_unavailable() {
        let state = State::new(hall(), STATE_UNAVAILABLE, HashMap::new(), Context::new());
        assert!(state.is_unavailable());
    }
}
