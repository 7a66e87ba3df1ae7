//! Entity ID type and entity ID generation from display names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Object id used when a name slugifies to nothing
const FALLBACK_OBJECT_ID: &str = "unnamed_device";

/// Error type for invalid entity IDs
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntityIdError {
    #[error("entity_id must contain exactly one '.' separator")]
    InvalidFormat,

    #[error("domain cannot be empty")]
    EmptyDomain,

    #[error("object_id cannot be empty")]
    EmptyObjectId,

    #[error("domain '{0}' must be lowercase alphanumeric with single underscores")]
    InvalidDomain(String),

    #[error("object_id '{0}' must be lowercase alphanumeric with underscores")]
    InvalidObjectId(String),
}

/// A `domain.object_id` pair such as `climate.demo_climate_device`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId {
    domain: String,
    object_id: String,
}

impl EntityId {
    /// Create a new EntityId from domain and object_id parts
    pub fn new(
        domain: impl Into<String>,
        object_id: impl Into<String>,
    ) -> Result<Self, EntityIdError> {
        let domain = domain.into();
        let object_id = object_id.into();

        if domain.is_empty() {
            return Err(EntityIdError::EmptyDomain);
        }
        if object_id.is_empty() {
            return Err(EntityIdError::EmptyObjectId);
        }
        if domain.contains("__") || !is_valid_slug(&domain) {
            return Err(EntityIdError::InvalidDomain(domain));
        }
        if !is_valid_slug(&object_id) {
            return Err(EntityIdError::InvalidObjectId(object_id));
        }

        Ok(Self { domain, object_id })
    }

    /// Generate an entity id for `name` within `domain`
    ///
    /// The object id is the slug of `name`. When `is_taken` reports the
    /// candidate as already in use, `_2`, `_3`, ... are appended until a free
    /// id is found.
    pub fn generate(
        domain: &str,
        name: &str,
        is_taken: impl Fn(&EntityId) -> bool,
    ) -> Result<Self, EntityIdError> {
        let mut base = slugify(name);
        if base.is_empty() {
            base = FALLBACK_OBJECT_ID.to_string();
        }

        let candidate = Self::new(domain, base.clone())?;
        if !is_taken(&candidate) {
            return Ok(candidate);
        }

        let mut suffix = 2u32;
        loop {
            let candidate = Self::new(domain, format!("{}_{}", base, suffix))?;
            if !is_taken(&candidate) {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }

    /// Get the domain part of the entity ID
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Get the object_id part of the entity ID
    pub fn object_id(&self) -> &str {
        &self.object_id
    }
}

/// Lowercase alphanumerics and underscores, no leading or trailing underscore
fn is_valid_slug(s: &str) -> bool {
    !s.starts_with('_')
        && !s.ends_with('_')
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Turn a display name into an object id
///
/// Non-ASCII letters are transliterated first, so "Café" becomes `cafe`. Runs
/// of anything other than letters and digits become a single `_`, with none
/// leading or trailing. The result is either empty or a valid object id.
pub fn slugify(name: &str) -> String {
    slug::slugify(name).replace('-', "_")
}

impl FromStr for EntityId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((domain, object_id)) if !object_id.contains('.') => {
                Self::new(domain, object_id)
            }
            _ => Err(EntityIdError::InvalidFormat),
        }
    }
}

impl TryFrom<String> for EntityId {
    type Error = EntityIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> String {
        id.to_string()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.object_id)
    }
}
