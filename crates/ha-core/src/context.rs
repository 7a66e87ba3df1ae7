//! Context type for tracing who caused a service call or state write

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Origin of a service call or state write
///
/// A state written in response to a service call carries a child of the
/// call's context, so a consumer can walk back from a state to the command
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Unique identifier for this context (ULID)
    pub id: String,

    /// User that initiated the action, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Context that caused this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Context {
    /// Create a new context with a fresh ULID
    pub fn new() -> Self {
        Self {
            id: Ulid::new().to_string(),
            user_id: None,
            parent_id: None,
        }
    }

    /// Create a new context attributed to a user
    pub fn with_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Self::new()
        }
    }

    /// Create a child context with this context as parent
    pub fn child(&self) -> Self {
        Self {
            id: Ulid::new().to_string(),
            user_id: self.user_id.clone(),
            parent_id: Some(self.id.clone()),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_keeps_user_and_links_parent() {
        let parent = Context::with_user("admin");
        let child = parent.child();

        assert_ne!(child.id, parent.id);
        assert_eq!(child.parent_id.as_deref(), Some(parent.id.as_str()));
        assert_eq!(child.user_id.as_deref(), Some("admin"));
    }

    #[test]
    fn test_optional_fields_skipped() {
        let json = serde_json::to_value(Context::new()).unwrap();
        assert!(json.get("user_id").is_none());
        assert!(json.get("parent_id").is_none());
    }
}
