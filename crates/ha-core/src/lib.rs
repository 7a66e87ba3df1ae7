//! Core types for the Home Assistant climate platform
//!
//! This crate provides the types every other crate in the workspace speaks:
//! EntityId, State, Context, and ServiceCall.

mod context;
mod entity_id;
mod service_call;
mod state;

pub use context::Context;
pub use entity_id::{slugify, EntityId, EntityIdError};
pub use service_call::ServiceCall;
pub use state::State;

/// State value reported by an entity that cannot currently be reached
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// Attribute carrying the human readable entity name
pub const ATTR_FRIENDLY_NAME: &str = "friendly_name";

/// Attribute carrying the entity's capability bitset
pub const ATTR_SUPPORTED_FEATURES: &str = "supported_features";

/// Attribute carrying the unit the state values are expressed in
pub const ATTR_UNIT_OF_MEASUREMENT: &str = "unit_of_measurement";
